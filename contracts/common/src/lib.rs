//! Shared primitives for the Ayni staking contracts.
//!
//! This crate provides:
//! - [`CommonError`] — error codes raised by the shared primitives.
//! - [`codec`] — fixed-width positional payload reader/writer.
//! - [`typed_data`] — structured-data (EIP-712 style) hashing.
//! - [`signature`] — secp256k1 signer recovery.
//! - [`one_time`] — append-only consumed-value sets for replay protection.
//!
//! Contracts map these errors into their own error enums; nothing here is
//! exposed as a contract entry point.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod codec;
pub mod one_time;
pub mod signature;
pub mod typed_data;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes raised by the shared primitives.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 10 – 19 | Signatures                     |
/// | 30 – 39 | Validation / payload decoding  |
/// | 40 – 49 | Replay protection              |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Signatures (10–19) ───────────────────────────────────
    /// The signature bytes cannot be a valid recoverable secp256k1
    /// signature (bad recovery byte, zero or out-of-range scalars,
    /// non-canonical high `s`).
    MalformedSignature = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// A value is zero or otherwise unusable where a non-trivial value
    /// is required.
    InvalidInput = 30,

    /// A payload has the wrong length or contains an unknown tag.
    MalformedPayload = 31,

    /// The address kind cannot be represented as an address word
    /// (only accounts and contracts are supported).
    UnsupportedAddress = 32,

    // ── Replay (40–49) ───────────────────────────────────────
    /// The one-time value has already been consumed.
    AlreadyConsumed = 40,
}
