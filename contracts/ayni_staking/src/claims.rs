//! Reward claims and terminal settlement.
//!
//! A claim voucher settles every month up to `claimed_month`. The final
//! month also returns principal and closes the stake; intermediate months
//! pay rewards only. Claims are not gated by the staking pause.

use common::one_time;
use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::{
    config, events, funds,
    ledger::{self, Settlement, Stake, StakeKey},
    replay,
    voucher::{self, ClaimVoucher, Voucher},
    ContractError,
};

pub fn claim(
    env: &Env,
    caller: &Address,
    encoded: &Bytes,
    signature: &BytesN<65>,
) -> Result<Stake, ContractError> {
    let v = ClaimVoucher::decode(env, encoded)?;
    if one_time::is_zero(&v.nonce) || v.rewards < 0 {
        return Err(ContractError::InvalidInput);
    }
    voucher::verify(env, &v, signature)?;
    replay::check_expiry(env, v.expiry)?;
    replay::consume_nonce(env, &v.nonce)?;

    let key = StakeKey {
        user_id: v.user_id.clone(),
        interval: v.interval,
        stake_id: v.stake_id,
    };
    let mut stake = ledger::load(env, &key)?;
    if stake.is_claimed {
        return Err(ContractError::AlreadyClaimed);
    }
    if *caller != stake.claim_address {
        return Err(ContractError::Unauthorized);
    }
    if v.destination_address != stake.claim_address {
        return Err(ContractError::InvalidInput);
    }

    let settlement = stake.settle(v.claimed_month, env.ledger().timestamp())?;
    ledger::store(env, &stake);

    funds::pay(
        env,
        &config::reward_token(env)?,
        &stake.claim_address,
        v.rewards,
    )?;
    let principal_returned = match settlement {
        Settlement::Partial => 0,
        Settlement::Terminal { principal } => {
            funds::pay(env, &config::stake_token(env)?, &stake.staker, principal)?;
            principal
        }
    };

    events::publish_claimed(
        env,
        caller.clone(),
        v.user_id,
        v.stake_id,
        v.interval,
        v.claimed_month,
        v.rewards,
        principal_returned,
    );

    Ok(stake)
}
