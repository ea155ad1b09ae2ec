#![no_std]

pub mod admin;
pub mod admission;
pub mod claims;
pub mod config;
pub mod events;
pub mod funds;
pub mod ledger;
pub mod pause;
pub mod replay;
pub mod signers;
pub mod voucher;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, Vec};

pub use ledger::{Stake, StakeKey};
pub use voucher::{ClaimVoucher, StakeExternalVoucher, StakeVirtualVoucher, Voucher};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    InsufficientBalance = 5,
    InvalidSigner = 6,
    SignatureExpired = 7,
    SaltAlreadyUsed = 8,
    NonceAlreadyUsed = 9,
    AlreadyClaimed = 10,
    EnforcedPause = 11,
    DecodeError = 12,
    StakeNotMatured = 13,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Deployment configuration returned by `get_config`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub fee_collector: Address,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct AyniStakingContract;

#[contractimpl]
impl AyniStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `stake_token`   – SEP-41 token held as principal.
    /// * `reward_token`  – SEP-41 token paid out by claims; funded by transfer.
    /// * `fee_collector` – receives the fee portion of virtual stakes.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        fee_collector: Address,
    ) -> Result<(), ContractError> {
        if config::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::InvalidInput);
        }

        let settings = StakingConfig {
            admin,
            stake_token,
            reward_token,
            fee_collector,
        };
        config::store(&env, &settings);

        events::publish_initialized(&env, &settings);

        Ok(())
    }

    // ── Admission ───────────────────────────────────────────────────────────

    /// Open a stake whose principal is pulled from the voucher's source
    /// address and credited to its destination address.
    pub fn stake_external(
        env: Env,
        caller: Address,
        encoded: Bytes,
        signature: BytesN<65>,
    ) -> Result<Stake, ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();

        admission::stake_external(&env, &caller, &encoded, &signature)
    }

    /// Open a stake funded by the voucher's source address, which pays
    /// principal plus a fee in a single pull.
    pub fn stake_virtual(
        env: Env,
        caller: Address,
        encoded: Bytes,
        signature: BytesN<65>,
    ) -> Result<Stake, ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();

        admission::stake_virtual(&env, &caller, &encoded, &signature)
    }

    // ── Claims ──────────────────────────────────────────────────────────────

    /// Settle rewards up to the voucher's month; on the final month also
    /// return principal and close the stake.
    ///
    /// Not gated by the staking pause.
    pub fn claim(
        env: Env,
        caller: Address,
        encoded: Bytes,
        signature: BytesN<65>,
    ) -> Result<Stake, ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();

        claims::claim(&env, &caller, &encoded, &signature)
    }

    // ── Admin overrides ─────────────────────────────────────────────────────

    /// Close a stake without a voucher, returning principal to its staker.
    pub fn force_remove_stake(
        env: Env,
        caller: Address,
        user_id: BytesN<32>,
        interval: u32,
        stake_id: u64,
    ) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        admin::force_remove_stake(
            &env,
            &StakeKey {
                user_id,
                interval,
                stake_id,
            },
        )
    }

    /// Redirect principal to `new_wallet`; reward claims stay with `old_wallet`.
    pub fn update_stake_wallet(
        env: Env,
        caller: Address,
        user_id: BytesN<32>,
        interval: u32,
        stake_id: u64,
        old_wallet: Address,
        new_wallet: Address,
    ) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        admin::update_stake_wallet(
            &env,
            &StakeKey {
                user_id,
                interval,
                stake_id,
            },
            old_wallet,
            new_wallet,
        )
    }

    // ── Pause gate ──────────────────────────────────────────────────────────

    pub fn pause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        pause::set_paused(&env, &caller, true);
        Ok(())
    }

    pub fn unpause_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        pause::set_paused(&env, &caller, false);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    // ── Signer registry ─────────────────────────────────────────────────────

    /// Authorize `signer` to issue vouchers. Adding a member again is a no-op.
    pub fn add_signer(env: Env, caller: Address, signer: BytesN<20>) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        signers::add(&env, &signer)
    }

    /// Revoke `signer`. Vouchers it issued stop verifying immediately.
    pub fn remove_signer(
        env: Env,
        caller: Address,
        signer: BytesN<20>,
    ) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        signers::remove(&env, &signer);
        Ok(())
    }

    pub fn is_signer(env: Env, signer: BytesN<20>) -> bool {
        signers::is_authorized(&env, &signer)
    }

    pub fn get_signers(env: Env) -> Vec<BytesN<20>> {
        signers::list(&env)
    }

    // ── Configuration ───────────────────────────────────────────────────────

    pub fn set_fee_collector(
        env: Env,
        caller: Address,
        fee_collector: Address,
    ) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        caller.require_auth();
        config::require_admin(&env, &caller)?;

        config::set_fee_collector(&env, &fee_collector);
        events::publish_fee_collector_updated(&env, fee_collector);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<StakingConfig, ContractError> {
        config::load(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        config::admin(&env)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        current_admin.require_auth();
        config::require_admin(&env, &current_admin)?;

        admin::propose_admin(&env, current_admin, new_admin);
        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        new_admin.require_auth();

        admin::accept_admin(&env, new_admin)
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        config::require_initialized(&env)?;
        current_admin.require_auth();
        config::require_admin(&env, &current_admin)?;

        admin::cancel_admin_transfer(&env, current_admin)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        config::pending_admin(&env)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return a stake record; closed stakes stay queryable.
    pub fn get_stake(
        env: Env,
        user_id: BytesN<32>,
        interval: u32,
        stake_id: u64,
    ) -> Result<Stake, ContractError> {
        ledger::load(
            &env,
            &StakeKey {
                user_id,
                interval,
                stake_id,
            },
        )
    }

    pub fn has_stake(env: Env, user_id: BytesN<32>, interval: u32, stake_id: u64) -> bool {
        ledger::exists(
            &env,
            &StakeKey {
                user_id,
                interval,
                stake_id,
            },
        )
    }

    pub fn is_salt_used(env: Env, salt: BytesN<32>) -> bool {
        replay::is_salt_used(&env, &salt)
    }

    pub fn is_nonce_used(env: Env, nonce: BytesN<32>) -> bool {
        replay::is_nonce_used(&env, &nonce)
    }

    /// Separator of the typed-data domain vouchers must be signed under.
    pub fn domain_separator(env: Env) -> Result<BytesN<32>, ContractError> {
        voucher::domain_separator(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────




#[cfg(test)]
mod test_claim;


#[cfg(test)]
mod test_pause;
