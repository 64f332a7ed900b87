use crate::entities::{DataKey, EscrowTransaction};
use crate::errors::Error;
use soroban_sdk::Env;

pub const DAY_IN_LEDGERS: u32 = 17280;

// Longest lifecycle is 30 days to deliver plus 7 days of dispute; keep
// every touched entry alive for well past that.
pub const BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

pub(crate) fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0u64)
}

/// Reserves the next sequential id. Ids start at 1 and are never reused.
pub(crate) fn next_id(env: &Env) -> Result<u64, Error> {
    let id = transaction_count(env)
        .checked_add(1)
        .ok_or(Error::ArithmeticOverflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::TransactionCount, &id);
    bump(env, &DataKey::TransactionCount);
    Ok(id)
}

pub fn load(env: &Env, transaction_id: u64) -> Result<EscrowTransaction, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(transaction_id))
        .ok_or(Error::TransactionNotFound)
}

pub(crate) fn save(env: &Env, transaction: &EscrowTransaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    bump(env, &key);
}
