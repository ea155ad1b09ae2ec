//! # Structured-data hashing
//!
//! EIP-712 style digests computed with the host's keccak256:
//!
//! ```text
//! structHash = keccak256(typeHash ‖ word(field_1) ‖ … ‖ word(field_n))
//! digest     = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! Every field contributes one 32-byte word. Integers are left-padded
//! big-endian, `bytes32` is taken as-is, and dynamic `string` / `bytes`
//! values contribute their keccak256.
//!
//! The domain carries the network id in place of an EVM chain id and the
//! verifying contract as a dynamic `bytes` value (its address word), so
//! off-chain signers can reproduce the digest with stock typed-data tooling.

use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

/// Type string of the signing domain.
pub const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,bytes32 chainId,bytes verifyingContract)";

const DIGEST_PREFIX: [u8; 2] = [0x19, 0x01];

fn keccak(env: &Env, data: &[u8]) -> [u8; 32] {
    env.crypto()
        .keccak256(&Bytes::from_slice(env, data))
        .to_bytes()
        .to_array()
}

/// keccak256 of a type string.
pub fn type_hash(env: &Env, type_string: &[u8]) -> [u8; 32] {
    keccak(env, type_string)
}

// ── Struct hasher ────────────────────────────────────────────────────────────

/// Accumulates the encoded words of one struct and hashes them.
pub struct StructHasher<'a> {
    env: &'a Env,
    buf: Bytes,
}

impl<'a> StructHasher<'a> {
    pub fn new(env: &'a Env, type_string: &[u8]) -> Self {
        let mut buf = Bytes::new(env);
        buf.extend_from_array(&type_hash(env, type_string));
        Self { env, buf }
    }

    pub fn uint(&mut self, value: u128) -> &mut Self {
        let mut word = [0u8; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        self.buf.extend_from_array(&word);
        self
    }

    /// Signed values are sign-extended to 256 bits.
    pub fn int(&mut self, value: i128) -> &mut Self {
        let mut word = if value < 0 { [0xFFu8; 32] } else { [0u8; 32] };
        word[16..].copy_from_slice(&value.to_be_bytes());
        self.buf.extend_from_array(&word);
        self
    }

    pub fn bytes32(&mut self, value: &BytesN<32>) -> &mut Self {
        self.buf.extend_from_array(&value.to_array());
        self
    }

    /// `string` or `bytes` member.
    pub fn dynamic(&mut self, value: &[u8]) -> &mut Self {
        let hashed = keccak(self.env, value);
        self.buf.extend_from_array(&hashed);
        self
    }

    pub fn finish(&self) -> BytesN<32> {
        self.env.crypto().keccak256(&self.buf).to_bytes()
    }
}

// ── Domain & digest ──────────────────────────────────────────────────────────

/// Separator of the signing domain.
pub fn domain_separator(
    env: &Env,
    name: &[u8],
    version: &[u8],
    chain_id: &BytesN<32>,
    verifying_contract: &[u8],
) -> BytesN<32> {
    StructHasher::new(env, DOMAIN_TYPE)
        .dynamic(name)
        .dynamic(version)
        .bytes32(chain_id)
        .dynamic(verifying_contract)
        .finish()
}

/// Final digest a signer signs over.
pub fn typed_data_digest(
    env: &Env,
    domain_separator: &BytesN<32>,
    struct_hash: &BytesN<32>,
) -> Hash<32> {
    let mut msg = Bytes::from_array(env, &DIGEST_PREFIX);
    msg.extend_from_array(&domain_separator.to_array());
    msg.extend_from_array(&struct_hash.to_array());
    env.crypto().keccak256(&msg)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
