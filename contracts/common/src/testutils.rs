//! Off-chain signer stand-in for tests.
//!
//! Produces the same `r ‖ s ‖ v` signatures an EVM-style typed-data signer
//! would, so tests exercise the real recovery path.

use k256::{ecdsa::SigningKey, elliptic_curve::sec1::ToEncodedPoint};
use soroban_sdk::{crypto::Hash, BytesN, Env};

use crate::signature::signer_address;

pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    /// Deterministic key whose secret scalar is `[seed; 32]`.
    ///
    /// # Panics
    /// If `seed` is zero.
    pub fn from_seed(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("seed must be a valid scalar");
        Self { key }
    }

    pub fn public_key(&self, env: &Env) -> BytesN<65> {
        let point = self.key.verifying_key().as_affine().to_encoded_point(false);
        let mut raw = [0u8; 65];
        raw.copy_from_slice(point.as_bytes());
        BytesN::from_array(env, &raw)
    }

    /// 20-byte signer address as registered with a contract.
    pub fn address(&self, env: &Env) -> BytesN<20> {
        signer_address(env, &self.public_key(env))
    }

    /// Sign a prehashed digest; `v` is returned as 27/28.
    pub fn sign(&self, env: &Env, digest: &Hash<32>) -> BytesN<65> {
        let prehash = digest.to_bytes().to_array();
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(&prehash)
            .expect("prehash signing cannot fail for a 32-byte digest");

        let mut raw = [0u8; 65];
        raw[..64].copy_from_slice(signature.to_bytes().as_slice());
        raw[64] = 27 + recovery_id.to_byte();
        BytesN::from_array(env, &raw)
    }
}
