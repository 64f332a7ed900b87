//! Pull-payment balances.
//!
//! Completing a transaction only credits an entry here. Value leaves the
//! contract when the credited party calls `withdraw`, and the entry is
//! zeroed before the token transfer is issued.

use crate::entities::DataKey;
use crate::errors::Error;
use crate::store;
use soroban_sdk::{Address, Env};

pub fn balance_of(env: &Env, party: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(party.clone()))
        .unwrap_or(0i128)
}

fn set_balance(env: &Env, party: &Address, amount: i128) {
    let key = DataKey::Balance(party.clone());
    env.storage().persistent().set(&key, &amount);
    store::bump(env, &key);
}

pub(crate) fn credit(env: &Env, party: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let updated = balance_of(env, party)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    set_balance(env, party, updated);
    Ok(())
}

/// Empties `party`'s own entry and returns what it held.
pub(crate) fn withdraw(env: &Env, party: &Address) -> Result<i128, Error> {
    let amount = balance_of(env, party);
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    set_balance(env, party, 0);
    Ok(amount)
}
