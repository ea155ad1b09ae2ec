//! Deployment configuration held in instance storage.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ContractError, StakingConfig};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const FEE_COLLECTOR: Symbol = symbol_short!("FEE_COLL");

pub(crate) const TTL_THRESHOLD: u32 = 5_184_000;
pub(crate) const TTL_EXTEND_TO: u32 = 10_368_000;

pub fn store(env: &Env, config: &StakingConfig) {
    let instance = env.storage().instance();
    instance.set(&ADMIN, &config.admin);
    instance.set(&STAKE_TOKEN, &config.stake_token);
    instance.set(&REWARD_TOKEN, &config.reward_token);
    instance.set(&FEE_COLLECTOR, &config.fee_collector);
    instance.set(&INITIALIZED, &true);
    extend_instance_ttl(env);
}

pub fn load(env: &Env) -> Result<StakingConfig, ContractError> {
    Ok(StakingConfig {
        admin: admin(env)?,
        stake_token: stake_token(env)?,
        reward_token: reward_token(env)?,
        fee_collector: fee_collector(env)?,
    })
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

// ── Guards ───────────────────────────────────────────────────────────────────

/// Guard: revert if the contract is not yet initialized.
pub fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    extend_instance_ttl(env);
    Ok(())
}

/// Guard: revert if `caller` is not the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller != admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ── Accessors ────────────────────────────────────────────────────────────────

fn read(env: &Env, key: &Symbol) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    read(env, &ADMIN)
}

pub fn stake_token(env: &Env) -> Result<Address, ContractError> {
    read(env, &STAKE_TOKEN)
}

pub fn reward_token(env: &Env) -> Result<Address, ContractError> {
    read(env, &REWARD_TOKEN)
}

pub fn fee_collector(env: &Env) -> Result<Address, ContractError> {
    read(env, &FEE_COLLECTOR)
}

pub fn set_fee_collector(env: &Env, fee_collector: &Address) {
    env.storage().instance().set(&FEE_COLLECTOR, fee_collector);
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

pub fn pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

pub fn set_pending_admin(env: &Env, new_admin: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, new_admin);
}

pub fn clear_pending_admin(env: &Env) {
    env.storage().instance().remove(&PENDING_ADMIN);
}
