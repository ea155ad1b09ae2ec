#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

extern crate std;

use common::testutils::TestSigner;
use soroban_sdk::{
    symbol_short,
    testutils::Address as _,
    Address, BytesN, IntoVal, TryIntoVal,
};

use crate::{
    events,
    testutils::{Harness, DEFAULT_END_TIME, REWARD_FUNDING},
    ContractError,
};

// ── Partial and terminal claims ───────────────────────────────────────────────

#[test]
fn test_partial_claim_pays_rewards_only() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let v = h.claim_for(&stake, 3, 2);
    let updated = h.claim(&owner, &v);

    assert_eq!(updated.claimed_until_month, 3);
    assert!(updated.is_active);
    assert!(!updated.is_claimed);
    assert_eq!(h.reward_balance(&owner), 2);
    assert_eq!(h.stake_balance(&owner), 0);
    assert_eq!(h.stake_balance(&h.contract_id), 10);
    assert!(h.client.is_nonce_used(&v.nonce));
}

#[test]
fn test_full_lifecycle_returns_principal() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.claim(&owner, &h.claim_for(&stake, 6, 3));

    h.set_time(DEFAULT_END_TIME);
    let closed = h.claim(&owner, &h.claim_for(&stake, 12, 4));

    assert!(closed.is_claimed);
    assert!(!closed.is_active);
    assert_eq!(closed.claimed_until_month, 12);
    assert_eq!(h.stake_balance(&owner), 10);
    assert_eq!(h.reward_balance(&owner), 7);
    assert_eq!(h.stake_balance(&h.contract_id), 0);
    assert_eq!(h.reward_balance(&h.contract_id), REWARD_FUNDING - 7);
}

#[test]
fn test_claimed_event_reports_principal_only_on_terminal() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.claim(&owner, &h.claim_for(&stake, 1, 1));
    let event = h.last_event();
    assert_eq!(
        event.0,
        (symbol_short!("CLAIMED"), owner.clone()).into_val(&h.env)
    );
    let payload: events::ClaimedEvent = event.1.try_into_val(&h.env).unwrap();
    assert_eq!(payload.claimed_month, 1);
    assert_eq!(payload.rewards, 1);
    assert_eq!(payload.principal_returned, 0);

    h.set_time(DEFAULT_END_TIME);
    h.claim(&owner, &h.claim_for(&stake, 12, 1));
    let payload: events::ClaimedEvent = h.last_event().1.try_into_val(&h.env).unwrap();
    assert_eq!(payload.claimed_month, 12);
    assert_eq!(payload.principal_returned, 10);
}

#[test]
fn test_terminal_claim_before_end_time_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.set_time(DEFAULT_END_TIME - 1);
    let v = h.claim_for(&stake, 12, 1);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::StakeNotMatured);
    assert!(!h.client.is_nonce_used(&v.nonce));
}

#[test]
fn test_claim_after_close_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    h.set_time(DEFAULT_END_TIME);
    h.claim(&owner, &h.claim_for(&stake, 12, 0));

    let v = h.claim_for(&stake, 12, 5);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::AlreadyClaimed);
}

#[test]
fn test_zero_rewards_skip_transfer() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let updated = h.claim(&owner, &h.claim_for(&stake, 2, 0));
    assert_eq!(updated.claimed_until_month, 2);
    assert_eq!(h.reward_balance(&owner), 0);
    assert_eq!(h.reward_balance(&h.contract_id), REWARD_FUNDING);
}

// ── Month ordering ────────────────────────────────────────────────────────────

#[test]
fn test_months_must_advance() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);
    h.claim(&owner, &h.claim_for(&stake, 5, 1));

    for month in [5u32, 4, 13, 0] {
        let v = h.claim_for(&stake, month, 1);
        let (payload, signature) = h.sign(&v);
        let result = h.client.try_claim(&owner, &payload, &signature);
        assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidInput);
    }
    assert_eq!(
        h.client
            .get_stake(&stake.user_id, &stake.interval, &stake.stake_id)
            .claimed_until_month,
        5
    );
}

// ── Replay and authorization ──────────────────────────────────────────────────

#[test]
fn test_nonce_replay_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let first = h.claim_for(&stake, 1, 1);
    h.claim(&owner, &first);

    let mut second = h.claim_for(&stake, 2, 1);
    second.nonce = first.nonce.clone();
    let (payload, signature) = h.sign(&second);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::NonceAlreadyUsed);
}

#[test]
fn test_zero_nonce_and_negative_rewards_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let mut zero_nonce = h.claim_for(&stake, 1, 1);
    zero_nonce.nonce = BytesN::from_array(&h.env, &[0; 32]);
    let mut negative = h.claim_for(&stake, 1, 1);
    negative.rewards = -1;

    for v in [zero_nonce, negative] {
        let (payload, signature) = h.sign(&v);
        let result = h.client.try_claim(&owner, &payload, &signature);
        assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidInput);
    }
}

#[test]
fn test_claim_by_non_owner_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stranger = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let v = h.claim_for(&stake, 1, 1);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&stranger, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::Unauthorized);
}

#[test]
fn test_claim_destination_must_match() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let mut v = h.claim_for(&stake, 1, 1);
    v.destination_address = Address::generate(&h.env);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidInput);
}

#[test]
fn test_claim_for_unknown_stake_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let mut v = h.claim_for(&stake, 1, 1);
    v.stake_id = 99;
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidInput);
}

#[test]
fn test_claim_with_unregistered_signer_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let v = h.claim_for(&stake, 1, 1);
    let (payload, signature) = h.sign_with(&TestSigner::from_seed(77), &v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidSigner);
}

#[test]
fn test_expired_claim_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let v = h.claim_for(&stake, 1, 1);
    let (payload, signature) = h.sign(&v);
    h.set_time(v.expiry + 1);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::SignatureExpired);
}

#[test]
fn test_claim_with_empty_reward_pool_rejected() {
    let h = Harness::new();
    let owner = Address::generate(&h.env);
    let stake = h.open_stake(&owner, 1, 10);

    let v = h.claim_for(&stake, 1, REWARD_FUNDING + 1);
    let (payload, signature) = h.sign(&v);
    let result = h.client.try_claim(&owner, &payload, &signature);
    assert_eq!(
        result.unwrap_err().unwrap(),
        ContractError::InsufficientBalance
    );
    assert_eq!(
        h.client
            .get_stake(&stake.user_id, &stake.interval, &stake.stake_id)
            .claimed_until_month,
        0
    );
}

// ── Virtual stakes ────────────────────────────────────────────────────────────

#[test]
fn test_virtual_stake_lifecycle() {
    let h = Harness::new();
    let source = Address::generate(&h.env);
    h.mint_stake(&source, 10);

    let v = h.virtual_stake(&source, 1, 9, 1);
    let (payload, signature) = h.sign(&v);
    let stake = h.client.stake_virtual(&source, &payload, &signature);

    h.set_time(DEFAULT_END_TIME);
    h.claim(&source, &h.claim_for(&stake, 12, 2));

    assert_eq!(h.stake_balance(&source), 9);
    assert_eq!(h.reward_balance(&source), 2);
    assert_eq!(h.stake_balance(&h.fee_collector), 1);
}
