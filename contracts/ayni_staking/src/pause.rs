//! Admin-controlled gate on new stakes. Claims and admin overrides are
//! never gated.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, ContractError};

const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::EnforcedPause);
    }
    Ok(())
}

/// Set the gate. Re-applying the current state publishes nothing.
pub fn set_paused(env: &Env, admin: &Address, paused: bool) {
    if is_paused(env) == paused {
        return;
    }
    env.storage().instance().set(&PAUSED, &paused);

    if paused {
        events::publish_paused(env, admin.clone());
    } else {
        events::publish_unpaused(env, admin.clone());
    }
}
