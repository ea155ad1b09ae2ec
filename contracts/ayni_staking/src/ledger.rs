//! # Stake ledger
//!
//! One persistent record per `(user_id, interval, stake_id)`. Records are
//! never deleted; closed stakes stay queryable with `is_claimed == true`.
//!
//! ```text
//!   open (active) ──partial claim──▶ open (claimed_until_month advanced)
//!        │                                 │
//!        ├──────── terminal claim ─────────┤
//!        └──────── force removal ──────────┴──▶ closed (is_claimed)
//! ```

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::{
    config::{TTL_EXTEND_TO, TTL_THRESHOLD},
    ContractError,
};

// ── Types ────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeKey {
    pub user_id: BytesN<32>,
    pub interval: u32,
    pub stake_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stake {
    pub user_id: BytesN<32>,
    pub interval: u32,
    pub stake_id: u64,
    /// Receives returned principal.
    pub staker: Address,
    /// Submits claim vouchers and receives rewards.
    pub claim_address: Address,
    pub amount: i128,
    pub end_time: u64,
    pub is_active: bool,
    pub is_claimed: bool,
    pub claimed_until_month: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum LedgerKey {
    Stake(StakeKey),
}

/// Outcome of settling a claim against a stake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Settlement {
    /// Rewards only; the stake stays open.
    Partial,
    /// Final month; principal goes back to the staker.
    Terminal { principal: i128 },
}

impl Stake {
    pub fn open(
        key: StakeKey,
        owner: Address,
        amount: i128,
        end_time: u64,
        created_at: u64,
    ) -> Self {
        Self {
            user_id: key.user_id,
            interval: key.interval,
            stake_id: key.stake_id,
            staker: owner.clone(),
            claim_address: owner,
            amount,
            end_time,
            is_active: true,
            is_claimed: false,
            claimed_until_month: 0,
            created_at,
        }
    }

    pub fn key(&self) -> StakeKey {
        StakeKey {
            user_id: self.user_id.clone(),
            interval: self.interval,
            stake_id: self.stake_id,
        }
    }

    /// Advance settlement to `claimed_month`.
    ///
    /// Months must strictly increase and never pass `interval`. Settling the
    /// final month closes the stake and requires `now >= end_time`.
    pub fn settle(&mut self, claimed_month: u32, now: u64) -> Result<Settlement, ContractError> {
        if self.is_claimed {
            return Err(ContractError::AlreadyClaimed);
        }
        if claimed_month <= self.claimed_until_month || claimed_month > self.interval {
            return Err(ContractError::InvalidInput);
        }

        if claimed_month < self.interval {
            self.claimed_until_month = claimed_month;
            return Ok(Settlement::Partial);
        }

        if now < self.end_time {
            return Err(ContractError::StakeNotMatured);
        }
        self.close();
        Ok(Settlement::Terminal {
            principal: self.amount,
        })
    }

    /// Close without a voucher; returns the principal owed to the staker.
    pub fn force_close(&mut self) -> Result<i128, ContractError> {
        if self.is_claimed {
            return Err(ContractError::InvalidInput);
        }
        self.close();
        Ok(self.amount)
    }

    /// Move the principal recipient from `old_wallet` to `new_wallet`.
    /// `claim_address` is left as it was, so reward rights never move.
    pub fn rebind(
        &mut self,
        old_wallet: &Address,
        new_wallet: Address,
    ) -> Result<(), ContractError> {
        if self.staker != *old_wallet {
            return Err(ContractError::InvalidInput);
        }
        self.staker = new_wallet;
        Ok(())
    }

    fn close(&mut self) {
        self.claimed_until_month = self.interval;
        self.is_active = false;
        self.is_claimed = true;
    }
}

// ── Storage ──────────────────────────────────────────────────────────────────

pub fn exists(env: &Env, key: &StakeKey) -> bool {
    env.storage()
        .persistent()
        .has(&LedgerKey::Stake(key.clone()))
}

pub fn get(env: &Env, key: &StakeKey) -> Option<Stake> {
    env.storage().persistent().get(&LedgerKey::Stake(key.clone()))
}

/// Like [`get`], but an absent record is [`ContractError::InvalidInput`].
pub fn load(env: &Env, key: &StakeKey) -> Result<Stake, ContractError> {
    get(env, key).ok_or(ContractError::InvalidInput)
}

/// Persist a new record. Fails if the key is taken.
pub fn create(env: &Env, stake: &Stake) -> Result<(), ContractError> {
    if exists(env, &stake.key()) {
        return Err(ContractError::InvalidInput);
    }
    store(env, stake);
    Ok(())
}

/// Overwrite an existing record.
pub fn store(env: &Env, stake: &Stake) {
    let key = LedgerKey::Stake(stake.key());
    env.storage().persistent().set(&key, stake);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
