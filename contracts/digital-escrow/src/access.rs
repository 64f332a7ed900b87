use crate::entities::DataKey;
use crate::errors::Error;
use crate::store;
use soroban_sdk::{Address, Env};

// Owner, token and pause flag live in instance storage: they are read by
// nearly every call and share the contract instance's lifetime.

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub(crate) fn init(env: &Env, owner: &Address, token: &Address) -> Result<(), Error> {
    if is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::Paused, &false);
    store::bump_instance(env);

    env.storage()
        .persistent()
        .set(&DataKey::TransactionCount, &0u64);
    store::bump(env, &DataKey::TransactionCount);
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

/// `caller` must have signed and must be the stored owner.
pub(crate) fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = owner(env)?;
    if *caller != owner {
        return Err(Error::UnauthorizedAccess);
    }
    store::bump_instance(env);
    Ok(owner)
}

pub(crate) fn require_not_paused(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    if is_paused(env) {
        return Err(Error::ContractPaused);
    }
    store::bump_instance(env);
    Ok(())
}

pub(crate) fn require_paused(env: &Env) -> Result<(), Error> {
    if !is_paused(env) {
        return Err(Error::NotPaused);
    }
    Ok(())
}

pub(crate) fn toggle_pause(env: &Env) -> bool {
    let paused = !is_paused(env);
    env.storage().instance().set(&DataKey::Paused, &paused);
    paused
}
