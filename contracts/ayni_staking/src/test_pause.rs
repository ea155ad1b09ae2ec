#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::Address as _,
    Address, IntoVal,
};

use crate::{
    testutils::{Harness, DEFAULT_END_TIME},
    ContractError,
};

#[test]
fn test_pause_blocks_admission() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    h.mint_stake(&owner, 10);

    h.client.pause_staking(&h.admin);
    assert!(h.client.is_paused());

    let v = h.external(&owner, &owner, 1, 10);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_stake_external(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::EnforcedPause);

    let virt = h.virtual_stake(&owner, 2, 9, 1);
    let (payload, signature) = h.sign(&virt);
    let result = h.client.try_stake_virtual(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::EnforcedPause);
}

#[test]
fn test_paused_failure_keeps_salt_usable() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    h.mint_stake(&owner, 10);

    let v = h.external(&owner, &owner, 1, 10);
    let (payload, signature) = h.sign(&v);

    h.client.pause_staking(&h.admin);
    let result = h.client.try_stake_external(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::EnforcedPause);
    assert!(!h.client.is_salt_used(&v.salt));

    h.client.unpause_staking(&h.admin);
    assert!(!h.client.is_paused());
    h.client.stake_external(&owner, &payload, &signature);
    assert!(h.client.is_salt_used(&v.salt));
    assert_eq!(h.stake_balance(&h.contract_id), 10);
}

#[test]
fn test_claims_unaffected_by_pause() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.client.pause_staking(&h.admin);

    h.claim(&owner, &h.claim_for(&stake, 3, 1));
    h.set_time(DEFAULT_END_TIME);
    h.claim(&owner, &h.claim_for(&stake, 12, 1));
    assert_eq!(h.stake_balance(&owner), 10);
    assert_eq!(h.reward_balance(&owner), 2);
}

#[test]
fn test_admin_overrides_unaffected_by_pause() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.client.pause_staking(&h.admin);
    h.client
        .force_remove_stake(&h.admin, &stake.user_id, &stake.interval, &stake.stake_id);
    assert_eq!(h.stake_balance(&owner), 10);
}

#[test]
fn test_pause_events() {
    let h = Harness::new();

    h.client.pause_staking(&h.admin);
    let event = h.last_event();
    assert_eq!(
        event.0,
        (symbol_short!("PAUSED"), h.admin.clone()).into_val(&h.env)
    );

    h.client.unpause_staking(&h.admin);
    let event = h.last_event();
    assert_eq!(
        event.0,
        (symbol_short!("UNPAUSED"), h.admin.clone()).into_val(&h.env)
    );
}

#[test]
fn test_pause_is_owner_only() {
    let h = Harness::new();
    let stranger = Address::generate(&h.env);

    let result = h.client.try_pause_staking(&stranger);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::Unauthorized);
    assert!(!h.client.is_paused());

    h.client.pause_staking(&h.admin);
    let result = h.client.try_unpause_staking(&stranger);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::Unauthorized);
    assert!(h.client.is_paused());
}
