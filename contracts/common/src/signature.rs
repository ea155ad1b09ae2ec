//! # secp256k1 signer recovery
//!
//! Recovers the 20-byte signer address (last 20 bytes of the keccak256 of
//! the uncompressed public key) from a digest and a 65-byte `r ‖ s ‖ v`
//! signature.
//!
//! Recovery runs in-contract on `k256` rather than through the host's
//! `secp256k1_recover`, which traps on unrecoverable input and would abort
//! the invocation without a contract error code. Every failure (bad `v`,
//! out-of-range or high-`s` scalars, an `r` that is not the x-coordinate of
//! a curve point, a recovered key that does not verify) is reported as
//! [`CommonError::MalformedSignature`].

use k256::{
    ecdsa::{RecoveryId, Signature, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

use crate::CommonError;

pub const SIGNATURE_LEN: usize = 65;
pub const SIGNER_ADDRESS_LEN: usize = 20;

/// Order of the secp256k1 group.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// `CURVE_ORDER / 2`; canonical signatures keep `s` at or below it.
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Split `r ‖ s ‖ v` into the 64-byte compact signature and a recovery id
/// in `0..=1`.
pub fn split_signature(signature: &[u8; 65]) -> Result<([u8; 64], u32), CommonError> {
    let recovery_id = match signature[64] {
        0 | 1 => signature[64] as u32,
        27 | 28 => (signature[64] - 27) as u32,
        _ => return Err(CommonError::MalformedSignature),
    };

    let mut compact = [0u8; 64];
    compact.copy_from_slice(&signature[..64]);

    let (r, s) = compact.split_at(32);
    let zero = [0u8; 32];
    if r == zero.as_slice() || s == zero.as_slice() {
        return Err(CommonError::MalformedSignature);
    }
    if r >= CURVE_ORDER.as_slice() || s > HALF_CURVE_ORDER.as_slice() {
        return Err(CommonError::MalformedSignature);
    }

    Ok((compact, recovery_id))
}

/// Address of an uncompressed (`0x04 ‖ x ‖ y`) public key.
pub fn signer_address(env: &Env, public_key: &BytesN<65>) -> BytesN<20> {
    let key = public_key.to_array();
    let hashed = env
        .crypto()
        .keccak256(&Bytes::from_slice(env, &key[1..]))
        .to_bytes()
        .to_array();

    let mut address = [0u8; SIGNER_ADDRESS_LEN];
    address.copy_from_slice(&hashed[32 - SIGNER_ADDRESS_LEN..]);
    BytesN::from_array(env, &address)
}

/// Uncompressed public key that produced `signature` over `prehash`.
pub fn recover_public_key(
    prehash: &[u8; 32],
    signature: &[u8; 65],
) -> Result<[u8; 65], CommonError> {
    let (compact, recovery_id) = split_signature(signature)?;
    let signature =
        Signature::from_slice(&compact).map_err(|_| CommonError::MalformedSignature)?;
    let recovery_id =
        RecoveryId::from_byte(recovery_id as u8).ok_or(CommonError::MalformedSignature)?;

    let key = VerifyingKey::recover_from_prehash(prehash, &signature, recovery_id)
        .map_err(|_| CommonError::MalformedSignature)?;
    let point = key.as_affine().to_encoded_point(false);
    point
        .as_bytes()
        .try_into()
        .map_err(|_| CommonError::MalformedSignature)
}

/// Recover the address that produced `signature` over `digest`.
pub fn recover_signer(
    env: &Env,
    digest: &Hash<32>,
    signature: &BytesN<65>,
) -> Result<BytesN<20>, CommonError> {
    let public_key = recover_public_key(&digest.to_array(), &signature.to_array())?;
    Ok(signer_address(env, &BytesN::from_array(env, &public_key)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
