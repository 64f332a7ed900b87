use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCreated {
    pub transaction_id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub amount: i128,
    pub created_at: u64,
}

pub fn emit_transaction_created(env: &Env, event: TransactionCreated) {
    let topics = (symbol_short!("tx_create"), event.transaction_id);
    env.events().publish(topics, event);
}

pub fn emit_product_delivered(env: &Env, transaction_id: u64, seller: Address) {
    env.events()
        .publish((symbol_short!("delivered"), transaction_id), seller);
}

pub fn emit_dispute_initiated(env: &Env, transaction_id: u64, buyer: Address, at: u64) {
    env.events()
        .publish((symbol_short!("disputed"), transaction_id), (buyer, at));
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Confirmed,
    Mediated,
    TimedOut,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCompleted {
    pub transaction_id: u64,
    pub recipient: Address,
    pub amount: i128,
    pub resolution: Resolution,
}

pub fn emit_transaction_completed(env: &Env, event: TransactionCompleted) {
    let topics = (symbol_short!("completed"), event.transaction_id);
    env.events().publish(topics, event);
}

pub fn emit_withdrawal(env: &Env, party: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdrawn"), party), amount);
}

pub fn emit_pause_toggled(env: &Env, paused: bool) {
    env.events().publish((symbol_short!("paused"),), paused);
}

pub fn emit_emergency_withdrawal(env: &Env, owner: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("emergency"), owner), amount);
}

pub fn emit_upgraded(env: &Env, new_wasm_hash: BytesN<32>) {
    env.events()
        .publish((symbol_short!("upgraded"),), new_wasm_hash);
}
