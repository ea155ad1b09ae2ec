#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::StakingConfig;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub fee_collector: Address,
    pub timestamp: u64,
}

/// Fired when a voucher opens a stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub caller: Address,
    pub destination: Address,
    pub user_id: BytesN<32>,
    pub stake_id: u64,
    pub interval: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired on every successful claim. `principal_returned` is non-zero only
/// for the claim that closes the stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub caller: Address,
    pub user_id: BytesN<32>,
    pub stake_id: u64,
    pub interval: u32,
    pub claimed_month: u32,
    pub rewards: i128,
    pub principal_returned: i128,
    pub timestamp: u64,
}

/// Fired when the admin force-closes a stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRemovedEvent {
    pub user_id: BytesN<32>,
    pub stake_id: u64,
    pub interval: u32,
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin rebinds a stake's principal recipient.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWalletUpdatedEvent {
    pub user_id: BytesN<32>,
    pub stake_id: u64,
    pub interval: u32,
    pub old_wallet: Address,
    pub new_wallet: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerAddedEvent {
    pub signer: BytesN<20>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRemovedEvent {
    pub signer: BytesN<20>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub admin: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeCollectorUpdatedEvent {
    pub fee_collector: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, config: &StakingConfig) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin: config.admin.clone(),
            stake_token: config.stake_token.clone(),
            reward_token: config.reward_token.clone(),
            fee_collector: config.fee_collector.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    caller: Address,
    destination: Address,
    user_id: BytesN<32>,
    stake_id: u64,
    interval: u32,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), caller.clone()),
        StakedEvent {
            caller,
            destination,
            user_id,
            stake_id,
            interval,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

#[allow(clippy::too_many_arguments)]
pub fn publish_claimed(
    env: &Env,
    caller: Address,
    user_id: BytesN<32>,
    stake_id: u64,
    interval: u32,
    claimed_month: u32,
    rewards: i128,
    principal_returned: i128,
) {
    env.events().publish(
        (symbol_short!("CLAIMED"), caller.clone()),
        ClaimedEvent {
            caller,
            user_id,
            stake_id,
            interval,
            claimed_month,
            rewards,
            principal_returned,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_removed(
    env: &Env,
    user_id: BytesN<32>,
    stake_id: u64,
    interval: u32,
    staker: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("STK_RMVD"), staker.clone()),
        StakeRemovedEvent {
            user_id,
            stake_id,
            interval,
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_wallet_updated(
    env: &Env,
    user_id: BytesN<32>,
    stake_id: u64,
    interval: u32,
    old_wallet: Address,
    new_wallet: Address,
) {
    env.events().publish(
        (symbol_short!("WLT_UPD"), new_wallet.clone()),
        StakeWalletUpdatedEvent {
            user_id,
            stake_id,
            interval,
            old_wallet,
            new_wallet,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_signer_added(env: &Env, signer: BytesN<20>) {
    env.events().publish(
        (symbol_short!("SGN_ADD"),),
        SignerAddedEvent {
            signer,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_signer_removed(env: &Env, signer: BytesN<20>) {
    env.events().publish(
        (symbol_short!("SGN_RMV"),),
        SignerRemovedEvent {
            signer,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"), admin.clone()),
        PauseToggledEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"), admin.clone()),
        PauseToggledEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_fee_collector_updated(env: &Env, fee_collector: Address) {
    env.events().publish(
        (symbol_short!("FEE_COLL"),),
        FeeCollectorUpdatedEvent {
            fee_collector,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
