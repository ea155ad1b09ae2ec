//! # One-time value sets
//!
//! Append-only sets of consumed 32-byte values (salts, nonces) in persistent
//! storage. Each set is identified by a namespace symbol so independent
//! replay domains never collide.
//!
//! A value is consumed at most once; a second consumption fails with
//! [`CommonError::AlreadyConsumed`]. The all-zero value is never consumable.
//!
//! ## Usage pattern
//!
//! ```ignore
//! one_time::consume(&env, &SALTS, &voucher.salt)?;
//! // ... rest of the state transition
//! ```
//!
//! Consumption is a plain storage write, so a contract call that returns an
//! error after consuming rolls the marker back together with everything else.

use soroban_sdk::{contracttype, BytesN, Env, Symbol};

use crate::CommonError;

// ── Storage key ──────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum OneTimeKey {
    Consumed(Symbol, BytesN<32>),
}

// ── TTL constants (mirror common convention) ─────────────────────────────────

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

// ── Public API ────────────────────────────────────────────────────────────────

/// `true` for the all-zero value.
pub fn is_zero(value: &BytesN<32>) -> bool {
    value.to_array() == [0u8; 32]
}

/// Whether `value` has been consumed in `namespace`.
pub fn is_consumed(env: &Env, namespace: &Symbol, value: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&OneTimeKey::Consumed(namespace.clone(), value.clone()))
}

/// Ledger timestamp at which `value` was consumed, if it was.
pub fn consumed_at(env: &Env, namespace: &Symbol, value: &BytesN<32>) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&OneTimeKey::Consumed(namespace.clone(), value.clone()))
}

/// Mark `value` consumed in `namespace`.
///
/// # Errors
/// - [`CommonError::InvalidInput`] — `value` is all zeroes.
/// - [`CommonError::AlreadyConsumed`] — `value` was consumed before.
pub fn consume(env: &Env, namespace: &Symbol, value: &BytesN<32>) -> Result<(), CommonError> {
    if is_zero(value) {
        return Err(CommonError::InvalidInput);
    }

    let key = OneTimeKey::Consumed(namespace.clone(), value.clone());
    if env.storage().persistent().has(&key) {
        return Err(CommonError::AlreadyConsumed);
    }

    env.storage()
        .persistent()
        .set(&key, &env.ledger().timestamp());
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
