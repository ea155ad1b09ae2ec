#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for payload decoding at the contract boundary.
//!
//! Invariants tested:
//! - Payloads of the wrong length always fail with `DecodeError`, never a trap
//! - Any single-byte change to a signed payload is rejected

use ayni_staking::ContractError;
use proptest::prelude::*;
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Bytes, BytesN};

use crate::harness::setup;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_wrong_length_is_decode_error(raw in prop::collection::vec(any::<u8>(), 0..400)) {
        let ctx = setup();
        let caller = Address::generate(&ctx.env);
        let payload = Bytes::from_slice(&ctx.env, &raw);
        let signature = BytesN::from_array(&ctx.env, &[1u8; 65]);

        if raw.len() != 174 {
            let result = ctx.client.try_stake_external(&caller, &payload, &signature);
            prop_assert_eq!(result.unwrap_err().unwrap(), ContractError::DecodeError);
        }
        if raw.len() != 157 {
            let result = ctx.client.try_stake_virtual(&caller, &payload, &signature);
            prop_assert_eq!(result.unwrap_err().unwrap(), ContractError::DecodeError);
        }
        if raw.len() != 169 {
            let result = ctx.client.try_claim(&caller, &payload, &signature);
            prop_assert_eq!(result.unwrap_err().unwrap(), ContractError::DecodeError);
        }
    }

    #[test]
    fn prop_flipped_byte_is_rejected(index in 0usize..174, mask in 1u8..=255) {
        let ctx = setup();
        let owner = Address::generate(&ctx.env);
        StellarAssetClient::new(&ctx.env, &ctx.stake_token).mint(&owner, &1_000);

        let v = ctx.external(&owner, 10, ctx.bytes32(0x44, 1));
        let (payload, signature) = ctx.sign(&v);
        let mut raw = [0u8; 174];
        payload.copy_into_slice(&mut raw);
        raw[index] ^= mask;

        let result = ctx.client.try_stake_external(&owner, &Bytes::from_array(&ctx.env, &raw), &signature);
        prop_assert!(result.is_err());
        prop_assert_eq!(ctx.stake_balance(&ctx.contract_id), 0);
    }
}
