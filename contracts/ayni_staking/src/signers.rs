//! Registry of 20-byte signer addresses allowed to issue vouchers.
//!
//! Membership lives in one persistent entry per signer; an instance-level
//! list tracks members for enumeration.

use soroban_sdk::{contracttype, symbol_short, BytesN, Env, Symbol, Vec};

use crate::{config, events, ContractError};

const SIGNER_LIST: Symbol = symbol_short!("SGN_LIST");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum SignerKey {
    Signer(BytesN<20>),
}

fn is_zero(signer: &BytesN<20>) -> bool {
    signer.to_array() == [0u8; 20]
}

pub fn is_authorized(env: &Env, signer: &BytesN<20>) -> bool {
    env.storage()
        .persistent()
        .get(&SignerKey::Signer(signer.clone()))
        .unwrap_or(false)
}

pub fn list(env: &Env) -> Vec<BytesN<20>> {
    env.storage()
        .instance()
        .get(&SIGNER_LIST)
        .unwrap_or(Vec::new(env))
}

/// Add `signer`. Emits an event only when membership changes.
pub fn add(env: &Env, signer: &BytesN<20>) -> Result<(), ContractError> {
    if is_zero(signer) {
        return Err(ContractError::InvalidInput);
    }
    if is_authorized(env, signer) {
        return Ok(());
    }

    let key = SignerKey::Signer(signer.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, config::TTL_THRESHOLD, config::TTL_EXTEND_TO);

    let mut members = list(env);
    members.push_back(signer.clone());
    env.storage().instance().set(&SIGNER_LIST, &members);

    events::publish_signer_added(env, signer.clone());
    Ok(())
}

/// Remove `signer`. Removing a non-member is a no-op.
pub fn remove(env: &Env, signer: &BytesN<20>) {
    if !is_authorized(env, signer) {
        return;
    }

    env.storage()
        .persistent()
        .remove(&SignerKey::Signer(signer.clone()));

    let mut members = list(env);
    if let Some(idx) = members.first_index_of(signer.clone()) {
        members.remove(idx);
    }
    env.storage().instance().set(&SIGNER_LIST, &members);

    events::publish_signer_removed(env, signer.clone());
}
