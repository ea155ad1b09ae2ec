//! # Signed vouchers
//!
//! Every state-changing user operation carries an off-chain authorization:
//! a positionally encoded payload plus a secp256k1 signature over its
//! typed-data digest. The three voucher kinds share one signing domain:
//!
//! ```text
//! EIP712Domain(name = "AyniStaking", version = "1",
//!              chainId = network id, verifyingContract = this contract)
//! ```
//!
//! Binding the domain to the network id and the contract's own address word
//! means a voucher signed for one deployment never verifies on another.
//!
//! Wire layout (all integers big-endian, addresses as 33-byte words):
//!
//! | Voucher        | Fields                                                                                     | Bytes |
//! |----------------|--------------------------------------------------------------------------------------------|-------|
//! | StakeExternal  | destination, source, stake_id, interval, end_time, amount, expiry, user_id, salt            | 174   |
//! | StakeVirtual   | source, stake_id, interval, end_time, amount, fee_tokens, expiry, user_id, salt            | 157   |
//! | Claim          | destination, stake_id, interval, rewards, claimed_month, expiry, user_id, salt, nonce      | 169   |

use common::{
    codec::{address_word, PayloadReader, PayloadWriter},
    signature::recover_signer,
    typed_data::{self, StructHasher},
    CommonError,
};
use soroban_sdk::{crypto::Hash, Address, Bytes, BytesN, Env};

use crate::{signers, ContractError};

pub const DOMAIN_NAME: &[u8] = b"AyniStaking";
pub const DOMAIN_VERSION: &[u8] = b"1";

// ── Voucher kinds ────────────────────────────────────────────────────────────

/// A signed payload kind: fixed wire layout plus typed-data struct.
pub trait Voucher: Sized {
    /// Typed-data type string, field order matching the wire layout.
    const TYPE_STRING: &'static [u8];
    /// Exact encoded length in bytes.
    const ENCODED_LEN: u32;

    fn write(&self, w: &mut PayloadWriter) -> Result<(), CommonError>;
    fn read(r: &mut PayloadReader) -> Result<Self, CommonError>;
    fn hash_fields(&self, env: &Env, h: &mut StructHasher) -> Result<(), CommonError>;

    fn encode(&self, env: &Env) -> Result<Bytes, ContractError> {
        let mut w = PayloadWriter::new(env);
        self.write(&mut w).map_err(|_| ContractError::InvalidInput)?;
        Ok(w.finish())
    }

    fn decode(env: &Env, payload: &Bytes) -> Result<Self, ContractError> {
        let mut r = PayloadReader::new(env, payload, Self::ENCODED_LEN)
            .map_err(|_| ContractError::DecodeError)?;
        let voucher = Self::read(&mut r).map_err(|_| ContractError::DecodeError)?;
        r.finish().map_err(|_| ContractError::DecodeError)?;
        Ok(voucher)
    }

    fn struct_hash(&self, env: &Env) -> Result<BytesN<32>, ContractError> {
        let mut h = StructHasher::new(env, Self::TYPE_STRING);
        self.hash_fields(env, &mut h)
            .map_err(|_| ContractError::InvalidInput)?;
        Ok(h.finish())
    }
}

fn put_address(w: &mut PayloadWriter, address: &Address) -> Result<(), CommonError> {
    w.put_address(address)?;
    Ok(())
}

fn hash_address(env: &Env, h: &mut StructHasher, address: &Address) -> Result<(), CommonError> {
    h.dynamic(&address_word(env, address)?);
    Ok(())
}

/// Authorizes opening a stake funded by `source_address` on behalf of
/// `destination_address`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeExternalVoucher {
    pub destination_address: Address,
    pub source_address: Address,
    pub stake_id: u64,
    pub interval: u32,
    pub end_time: u64,
    pub amount: i128,
    pub expiry: u64,
    pub user_id: BytesN<32>,
    pub salt: BytesN<32>,
}

impl Voucher for StakeExternalVoucher {
    const TYPE_STRING: &'static [u8] = b"StakeExternal(bytes destinationAddress,bytes sourceAddress,uint256 stakeId,uint256 interval,uint256 endTime,uint256 amount,uint256 expiry,bytes32 userId,bytes32 salt)";
    const ENCODED_LEN: u32 = 174;

    fn write(&self, w: &mut PayloadWriter) -> Result<(), CommonError> {
        put_address(w, &self.destination_address)?;
        put_address(w, &self.source_address)?;
        w.put_u64(self.stake_id)
            .put_u32(self.interval)
            .put_u64(self.end_time)
            .put_i128(self.amount)
            .put_u64(self.expiry)
            .put_bytes32(&self.user_id)
            .put_bytes32(&self.salt);
        Ok(())
    }

    fn read(r: &mut PayloadReader) -> Result<Self, CommonError> {
        Ok(Self {
            destination_address: r.address()?,
            source_address: r.address()?,
            stake_id: r.u64()?,
            interval: r.u32()?,
            end_time: r.u64()?,
            amount: r.i128()?,
            expiry: r.u64()?,
            user_id: r.bytes32()?,
            salt: r.bytes32()?,
        })
    }

    fn hash_fields(&self, env: &Env, h: &mut StructHasher) -> Result<(), CommonError> {
        hash_address(env, h, &self.destination_address)?;
        hash_address(env, h, &self.source_address)?;
        h.uint(self.stake_id as u128)
            .uint(self.interval as u128)
            .uint(self.end_time as u128)
            .int(self.amount)
            .uint(self.expiry as u128)
            .bytes32(&self.user_id)
            .bytes32(&self.salt);
        Ok(())
    }
}

/// Authorizes a stake whose principal and fee are both paid by
/// `source_address`, which also becomes its claim address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeVirtualVoucher {
    pub source_address: Address,
    pub stake_id: u64,
    pub interval: u32,
    pub end_time: u64,
    pub amount: i128,
    pub fee_tokens: i128,
    pub expiry: u64,
    pub user_id: BytesN<32>,
    pub salt: BytesN<32>,
}

impl Voucher for StakeVirtualVoucher {
    const TYPE_STRING: &'static [u8] = b"StakeVirtual(bytes sourceAddress,uint256 stakeId,uint256 interval,uint256 endTime,uint256 amount,uint256 feeTokens,uint256 expiry,bytes32 userId,bytes32 salt)";
    const ENCODED_LEN: u32 = 157;

    fn write(&self, w: &mut PayloadWriter) -> Result<(), CommonError> {
        put_address(w, &self.source_address)?;
        w.put_u64(self.stake_id)
            .put_u32(self.interval)
            .put_u64(self.end_time)
            .put_i128(self.amount)
            .put_i128(self.fee_tokens)
            .put_u64(self.expiry)
            .put_bytes32(&self.user_id)
            .put_bytes32(&self.salt);
        Ok(())
    }

    fn read(r: &mut PayloadReader) -> Result<Self, CommonError> {
        Ok(Self {
            source_address: r.address()?,
            stake_id: r.u64()?,
            interval: r.u32()?,
            end_time: r.u64()?,
            amount: r.i128()?,
            fee_tokens: r.i128()?,
            expiry: r.u64()?,
            user_id: r.bytes32()?,
            salt: r.bytes32()?,
        })
    }

    fn hash_fields(&self, env: &Env, h: &mut StructHasher) -> Result<(), CommonError> {
        hash_address(env, h, &self.source_address)?;
        h.uint(self.stake_id as u128)
            .uint(self.interval as u128)
            .uint(self.end_time as u128)
            .int(self.amount)
            .int(self.fee_tokens)
            .uint(self.expiry as u128)
            .bytes32(&self.user_id)
            .bytes32(&self.salt);
        Ok(())
    }
}

/// Authorizes paying `rewards` for months up to `claimed_month`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimVoucher {
    pub destination_address: Address,
    pub stake_id: u64,
    pub interval: u32,
    pub rewards: i128,
    pub claimed_month: u32,
    pub expiry: u64,
    pub user_id: BytesN<32>,
    pub salt: BytesN<32>,
    pub nonce: BytesN<32>,
}

impl Voucher for ClaimVoucher {
    const TYPE_STRING: &'static [u8] = b"Claim(bytes destinationAddress,uint256 stakeId,uint256 interval,uint256 rewards,uint256 claimedMonth,uint256 expiry,bytes32 userId,bytes32 salt,bytes32 nonce)";
    const ENCODED_LEN: u32 = 169;

    fn write(&self, w: &mut PayloadWriter) -> Result<(), CommonError> {
        put_address(w, &self.destination_address)?;
        w.put_u64(self.stake_id)
            .put_u32(self.interval)
            .put_i128(self.rewards)
            .put_u32(self.claimed_month)
            .put_u64(self.expiry)
            .put_bytes32(&self.user_id)
            .put_bytes32(&self.salt)
            .put_bytes32(&self.nonce);
        Ok(())
    }

    fn read(r: &mut PayloadReader) -> Result<Self, CommonError> {
        Ok(Self {
            destination_address: r.address()?,
            stake_id: r.u64()?,
            interval: r.u32()?,
            rewards: r.i128()?,
            claimed_month: r.u32()?,
            expiry: r.u64()?,
            user_id: r.bytes32()?,
            salt: r.bytes32()?,
            nonce: r.bytes32()?,
        })
    }

    fn hash_fields(&self, env: &Env, h: &mut StructHasher) -> Result<(), CommonError> {
        hash_address(env, h, &self.destination_address)?;
        h.uint(self.stake_id as u128)
            .uint(self.interval as u128)
            .int(self.rewards)
            .uint(self.claimed_month as u128)
            .uint(self.expiry as u128)
            .bytes32(&self.user_id)
            .bytes32(&self.salt)
            .bytes32(&self.nonce);
        Ok(())
    }
}

// ── Domain & verification ────────────────────────────────────────────────────

/// Separator of this deployment's signing domain.
pub fn domain_separator(env: &Env) -> Result<BytesN<32>, ContractError> {
    let contract_word = address_word(env, &env.current_contract_address())
        .map_err(|_| ContractError::InvalidInput)?;
    Ok(typed_data::domain_separator(
        env,
        DOMAIN_NAME,
        DOMAIN_VERSION,
        &env.ledger().network_id(),
        &contract_word,
    ))
}

/// Digest an authorized signer signs for `voucher`.
pub fn digest<V: Voucher>(env: &Env, voucher: &V) -> Result<Hash<32>, ContractError> {
    let domain = domain_separator(env)?;
    let body = voucher.struct_hash(env)?;
    Ok(typed_data::typed_data_digest(env, &domain, &body))
}

/// Recover the voucher's signer and require it to be registered.
///
/// Malformed signatures and unregistered signers both fail with
/// [`ContractError::InvalidSigner`].
pub fn verify<V: Voucher>(
    env: &Env,
    voucher: &V,
    signature: &BytesN<65>,
) -> Result<BytesN<20>, ContractError> {
    let digest = digest(env, voucher)?;
    let signer =
        recover_signer(env, &digest, signature).map_err(|_| ContractError::InvalidSigner)?;
    if !signers::is_authorized(env, &signer) {
        return Err(ContractError::InvalidSigner);
    }
    Ok(signer)
}
