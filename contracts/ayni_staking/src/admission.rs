//! Opening stakes from signed admission vouchers.
//!
//! Both voucher kinds funnel into [`admit`] after their kind-specific
//! validation and signature check. Checks run in a fixed order so a given
//! bad voucher always fails with the same error:
//!
//! 1. payload shape and field ranges
//! 2. registered signer
//! 3. expiry, then salt consumption
//! 4. pause gate
//! 5. free stake key
//! 6. token pull, record creation, event

use common::one_time;
use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::{
    config, events, funds,
    ledger::{self, Stake, StakeKey},
    pause, replay,
    voucher::{self, StakeExternalVoucher, StakeVirtualVoucher, Voucher},
    ContractError,
};

/// Kind-independent view of an admission voucher.
struct Admission {
    key: StakeKey,
    owner: Address,
    source: Address,
    amount: i128,
    fee: i128,
    end_time: u64,
    expiry: u64,
    salt: BytesN<32>,
}

fn validate_common(amount: i128, interval: u32, salt: &BytesN<32>) -> Result<(), ContractError> {
    if amount <= 0 || interval == 0 || one_time::is_zero(salt) {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn stake_external(
    env: &Env,
    caller: &Address,
    encoded: &Bytes,
    signature: &BytesN<65>,
) -> Result<Stake, ContractError> {
    let v = StakeExternalVoucher::decode(env, encoded)?;
    validate_common(v.amount, v.interval, &v.salt)?;
    voucher::verify(env, &v, signature)?;

    admit(
        env,
        caller,
        Admission {
            key: StakeKey {
                user_id: v.user_id,
                interval: v.interval,
                stake_id: v.stake_id,
            },
            owner: v.destination_address,
            source: v.source_address,
            amount: v.amount,
            fee: 0,
            end_time: v.end_time,
            expiry: v.expiry,
            salt: v.salt,
        },
    )
}

pub fn stake_virtual(
    env: &Env,
    caller: &Address,
    encoded: &Bytes,
    signature: &BytesN<65>,
) -> Result<Stake, ContractError> {
    let v = StakeVirtualVoucher::decode(env, encoded)?;
    validate_common(v.amount, v.interval, &v.salt)?;
    if v.fee_tokens <= 0 {
        return Err(ContractError::InvalidInput);
    }
    voucher::verify(env, &v, signature)?;

    admit(
        env,
        caller,
        Admission {
            key: StakeKey {
                user_id: v.user_id,
                interval: v.interval,
                stake_id: v.stake_id,
            },
            owner: v.source_address.clone(),
            source: v.source_address,
            amount: v.amount,
            fee: v.fee_tokens,
            end_time: v.end_time,
            expiry: v.expiry,
            salt: v.salt,
        },
    )
}

fn admit(env: &Env, caller: &Address, a: Admission) -> Result<Stake, ContractError> {
    replay::check_expiry(env, a.expiry)?;
    replay::consume_salt(env, &a.salt)?;
    pause::require_not_paused(env)?;

    if ledger::exists(env, &a.key) {
        return Err(ContractError::InvalidInput);
    }

    let total = a
        .amount
        .checked_add(a.fee)
        .ok_or(ContractError::InvalidInput)?;
    let stake_token = config::stake_token(env)?;

    funds::pull(env, &stake_token, &a.source, total)?;
    if a.fee > 0 {
        let fee_collector = config::fee_collector(env)?;
        funds::pay(env, &stake_token, &fee_collector, a.fee)?;
    }

    let stake = Stake::open(
        a.key,
        a.owner,
        a.amount,
        a.end_time,
        env.ledger().timestamp(),
    );
    ledger::create(env, &stake)?;

    events::publish_staked(
        env,
        caller.clone(),
        stake.claim_address.clone(),
        stake.user_id.clone(),
        stake.stake_id,
        stake.interval,
        stake.amount,
    );

    Ok(stake)
}
