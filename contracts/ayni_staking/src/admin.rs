//! Owner-only overrides and the two-step admin transfer. Callers have
//! already passed `require_auth` and the admin check.

use soroban_sdk::{Address, Env};

use crate::{config, events, funds, ledger, ledger::StakeKey, ContractError};

/// Close an open stake and return its principal to the staker.
pub fn force_remove_stake(env: &Env, key: &StakeKey) -> Result<(), ContractError> {
    let mut stake = ledger::load(env, key)?;
    let principal = stake.force_close()?;
    ledger::store(env, &stake);

    funds::pay(env, &config::stake_token(env)?, &stake.staker, principal)?;

    events::publish_stake_removed(
        env,
        stake.user_id,
        stake.stake_id,
        stake.interval,
        stake.staker,
        principal,
    );
    Ok(())
}

pub fn update_stake_wallet(
    env: &Env,
    key: &StakeKey,
    old_wallet: Address,
    new_wallet: Address,
) -> Result<(), ContractError> {
    let mut stake = ledger::load(env, key)?;
    stake.rebind(&old_wallet, new_wallet.clone())?;
    ledger::store(env, &stake);

    events::publish_stake_wallet_updated(
        env,
        stake.user_id,
        stake.stake_id,
        stake.interval,
        old_wallet,
        new_wallet,
    );
    Ok(())
}

// ── Admin transfer (two-step) ────────────────────────────────────────────────

pub fn propose_admin(env: &Env, current_admin: Address, new_admin: Address) {
    config::set_pending_admin(env, &new_admin);
    events::publish_admin_transfer_proposed(env, current_admin, new_admin);
}

pub fn accept_admin(env: &Env, new_admin: Address) -> Result<(), ContractError> {
    let pending = config::pending_admin(env).ok_or(ContractError::InvalidInput)?;
    if new_admin != pending {
        return Err(ContractError::Unauthorized);
    }

    let old_admin = config::admin(env)?;
    config::set_admin(env, &new_admin);
    config::clear_pending_admin(env);

    events::publish_admin_transfer_accepted(env, old_admin, new_admin);
    Ok(())
}

pub fn cancel_admin_transfer(env: &Env, current_admin: Address) -> Result<(), ContractError> {
    let pending = config::pending_admin(env).ok_or(ContractError::InvalidInput)?;
    config::clear_pending_admin(env);

    events::publish_admin_transfer_cancelled(env, current_admin, pending);
    Ok(())
}
