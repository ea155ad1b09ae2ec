//! # Positional payload codec
//!
//! Fixed-width, big-endian, field-after-field encoding used for signed
//! voucher payloads. There are no length prefixes or field tags: the reader
//! is told the exact payload length up front and every field has a fixed
//! width, so any truncation or trailing garbage is a decode failure.
//!
//! | Field kind     | Width | Layout                                     |
//! |----------------|-------|--------------------------------------------|
//! | `u32`          | 4     | big-endian                                 |
//! | `u64`          | 8     | big-endian                                 |
//! | `i128`         | 16    | big-endian two's complement                |
//! | `BytesN<32>`   | 32    | raw                                        |
//! | `Address`      | 33    | tag (`0x00` account, `0x01` contract) + key |

use soroban_sdk::{
    xdr::{FromXdr, ToXdr},
    Address, Bytes, BytesN, Env,
};

use crate::CommonError;

pub const ADDRESS_WORD_LEN: u32 = 33;

pub const ACCOUNT_TAG: u8 = 0x00;
pub const CONTRACT_TAG: u8 = 0x01;

// XDR discriminants of `ScVal::Address(ScAddress)`.
const SCV_ADDRESS: u32 = 18;
const SC_ADDRESS_TYPE_ACCOUNT: u32 = 0;
const SC_ADDRESS_TYPE_CONTRACT: u32 = 1;
const PUBLIC_KEY_TYPE_ED25519: u32 = 0;

// Serialized lengths of the two supported `ScVal::Address` shapes.
const ACCOUNT_XDR_LEN: u32 = 44;
const CONTRACT_XDR_LEN: u32 = 40;

// ── Address words ────────────────────────────────────────────────────────────

/// Canonical 33-byte form of an account or contract address.
///
/// Muxed and other address kinds are rejected with
/// [`CommonError::UnsupportedAddress`].
pub fn address_word(env: &Env, address: &Address) -> Result<[u8; 33], CommonError> {
    let xdr = address.to_xdr(env);
    let mut word = [0u8; ADDRESS_WORD_LEN as usize];

    match (xdr.len(), xdr.get(7)) {
        (ACCOUNT_XDR_LEN, Some(t)) if t as u32 == SC_ADDRESS_TYPE_ACCOUNT => {
            if xdr.get(11) != Some(PUBLIC_KEY_TYPE_ED25519 as u8) {
                return Err(CommonError::UnsupportedAddress);
            }
            word[0] = ACCOUNT_TAG;
            xdr.slice(12..ACCOUNT_XDR_LEN)
                .copy_into_slice(&mut word[1..]);
        }
        (CONTRACT_XDR_LEN, Some(t)) if t as u32 == SC_ADDRESS_TYPE_CONTRACT => {
            word[0] = CONTRACT_TAG;
            xdr.slice(8..CONTRACT_XDR_LEN)
                .copy_into_slice(&mut word[1..]);
        }
        _ => return Err(CommonError::UnsupportedAddress),
    }

    Ok(word)
}

/// Inverse of [`address_word`].
pub fn address_from_word(env: &Env, word: &[u8; 33]) -> Result<Address, CommonError> {
    let mut xdr = Bytes::new(env);
    xdr.extend_from_array(&SCV_ADDRESS.to_be_bytes());

    match word[0] {
        ACCOUNT_TAG => {
            xdr.extend_from_array(&SC_ADDRESS_TYPE_ACCOUNT.to_be_bytes());
            xdr.extend_from_array(&PUBLIC_KEY_TYPE_ED25519.to_be_bytes());
        }
        CONTRACT_TAG => {
            xdr.extend_from_array(&SC_ADDRESS_TYPE_CONTRACT.to_be_bytes());
        }
        _ => return Err(CommonError::MalformedPayload),
    }
    xdr.extend_from_slice(&word[1..]);

    Address::from_xdr(env, &xdr).map_err(|_| CommonError::MalformedPayload)
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// Appends fixed-width fields to a payload.
pub struct PayloadWriter {
    buf: Bytes,
}

impl PayloadWriter {
    pub fn new(env: &Env) -> Self {
        Self {
            buf: Bytes::new(env),
        }
    }

    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_array(&value.to_be_bytes());
        self
    }

    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_array(&value.to_be_bytes());
        self
    }

    pub fn put_i128(&mut self, value: i128) -> &mut Self {
        self.buf.extend_from_array(&value.to_be_bytes());
        self
    }

    pub fn put_bytes32(&mut self, value: &BytesN<32>) -> &mut Self {
        self.buf.extend_from_array(&value.to_array());
        self
    }

    pub fn put_address(&mut self, address: &Address) -> Result<&mut Self, CommonError> {
        let word = address_word(self.buf.env(), address)?;
        self.buf.extend_from_array(&word);
        Ok(self)
    }

    pub fn finish(self) -> Bytes {
        self.buf
    }
}

// ── Reader ───────────────────────────────────────────────────────────────────

/// Reads fixed-width fields back out of a payload of known length.
pub struct PayloadReader<'a> {
    env: &'a Env,
    buf: &'a Bytes,
    pos: u32,
}

impl<'a> PayloadReader<'a> {
    /// Fails with [`CommonError::MalformedPayload`] unless `buf` is exactly
    /// `expected_len` bytes long.
    pub fn new(env: &'a Env, buf: &'a Bytes, expected_len: u32) -> Result<Self, CommonError> {
        if buf.len() != expected_len {
            return Err(CommonError::MalformedPayload);
        }
        Ok(Self { env, buf, pos: 0 })
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CommonError> {
        let end = self
            .pos
            .checked_add(N as u32)
            .ok_or(CommonError::MalformedPayload)?;
        if end > self.buf.len() {
            return Err(CommonError::MalformedPayload);
        }
        let mut out = [0u8; N];
        self.buf.slice(self.pos..end).copy_into_slice(&mut out);
        self.pos = end;
        Ok(out)
    }

    pub fn u32(&mut self) -> Result<u32, CommonError> {
        Ok(u32::from_be_bytes(self.take::<4>()?))
    }

    pub fn u64(&mut self) -> Result<u64, CommonError> {
        Ok(u64::from_be_bytes(self.take::<8>()?))
    }

    pub fn i128(&mut self) -> Result<i128, CommonError> {
        Ok(i128::from_be_bytes(self.take::<16>()?))
    }

    pub fn bytes32(&mut self) -> Result<BytesN<32>, CommonError> {
        let raw = self.take::<32>()?;
        Ok(BytesN::from_array(self.env, &raw))
    }

    pub fn address(&mut self) -> Result<Address, CommonError> {
        let word = self.take::<33>()?;
        address_from_word(self.env, &word)
    }

    /// Fails if any bytes remain unread.
    pub fn finish(self) -> Result<(), CommonError> {
        if self.pos != self.buf.len() {
            return Err(CommonError::MalformedPayload);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
