//! Voucher freshness: expiry, salts and claim nonces.
//!
//! Admission vouchers consume their salt; claim vouchers consume their
//! nonce and leave the salt untouched. Both sets are append-only.

use common::{one_time, CommonError};
use soroban_sdk::{symbol_short, BytesN, Env, Symbol};

use crate::ContractError;

const SALTS: Symbol = symbol_short!("SALT");
const NONCES: Symbol = symbol_short!("NONCE");

/// A voucher is expired once the ledger clock passes its expiry; a voucher
/// expiring exactly now is still accepted.
pub fn check_expiry(env: &Env, expiry: u64) -> Result<(), ContractError> {
    if env.ledger().timestamp() > expiry {
        return Err(ContractError::SignatureExpired);
    }
    Ok(())
}

pub fn is_salt_used(env: &Env, salt: &BytesN<32>) -> bool {
    one_time::is_consumed(env, &SALTS, salt)
}

pub fn is_nonce_used(env: &Env, nonce: &BytesN<32>) -> bool {
    one_time::is_consumed(env, &NONCES, nonce)
}

pub fn consume_salt(env: &Env, salt: &BytesN<32>) -> Result<(), ContractError> {
    one_time::consume(env, &SALTS, salt).map_err(|e| match e {
        CommonError::AlreadyConsumed => ContractError::SaltAlreadyUsed,
        _ => ContractError::InvalidInput,
    })
}

pub fn consume_nonce(env: &Env, nonce: &BytesN<32>) -> Result<(), ContractError> {
    one_time::consume(env, &NONCES, nonce).map_err(|e| match e {
        CommonError::AlreadyConsumed => ContractError::NonceAlreadyUsed,
        _ => ContractError::InvalidInput,
    })
}
