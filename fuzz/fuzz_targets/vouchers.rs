#![no_main]

use arbitrary::Arbitrary;
use ayni_staking::{
    voucher::{self, Voucher},
    AyniStakingContract, AyniStakingContractClient, ClaimVoucher, StakeExternalVoucher,
};
use common::testutils::TestSigner;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Bytes, BytesN, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    /// Raw bytes straight into an entry point with a junk signature.
    RawExternal { payload: Vec<u8>, signature: [u8; 32] },
    RawVirtual { payload: Vec<u8> },
    RawClaim { payload: Vec<u8> },
    /// Well-formed, correctly signed vouchers with arbitrary field values.
    SignedStake { stake_id: u8, amount: i64, expiry: u16, salt: u8 },
    SignedClaim { stake_id: u8, month: u8, rewards: i64, nonce: u8 },
    Advance { seconds: u16 },
    Pause,
    Unpause,
    ForceRemove { stake_id: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths_allowing_non_root_auth();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(AyniStakingContract, ());
    let client = AyniStakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    client.initialize(&admin, &stake_token, &reward_token, &Address::generate(&env));

    let signer = TestSigner::from_seed(1);
    client.add_signer(&admin, &signer.address(&env));
    StellarAssetClient::new(&env, &stake_token).mint(&user, &(i64::MAX as i128));
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &(i64::MAX as i128));

    let user_id = BytesN::from_array(&env, &[7u8; 32]);
    let sign = |digest| signer.sign(&env, &digest);

    // Contract errors are expected; only host traps and panics are findings.
    for action in actions {
        match action {
            FuzzAction::RawExternal { payload, signature } => {
                let mut sig = [0u8; 65];
                sig[..32].copy_from_slice(&signature);
                sig[32..64].copy_from_slice(&signature);
                sig[64] = signature[0];
                let _ = client.try_stake_external(
                    &user,
                    &Bytes::from_slice(&env, &payload),
                    &BytesN::from_array(&env, &sig),
                );
            }
            FuzzAction::RawVirtual { payload } => {
                let _ = client.try_stake_virtual(
                    &user,
                    &Bytes::from_slice(&env, &payload),
                    &BytesN::from_array(&env, &[1u8; 65]),
                );
            }
            FuzzAction::RawClaim { payload } => {
                let _ = client.try_claim(
                    &user,
                    &Bytes::from_slice(&env, &payload),
                    &BytesN::from_array(&env, &[1u8; 65]),
                );
            }
            FuzzAction::SignedStake { stake_id, amount, expiry, salt } => {
                let v = StakeExternalVoucher {
                    destination_address: user.clone(),
                    source_address: user.clone(),
                    stake_id: stake_id as u64,
                    interval: 12,
                    end_time: 1_000,
                    amount: amount as i128,
                    expiry: expiry as u64,
                    user_id: user_id.clone(),
                    salt: BytesN::from_array(&env, &[salt; 32]),
                };
                let digest = env
                    .as_contract(&contract_id, || voucher::digest(&env, &v))
                    .unwrap();
                let _ = client.try_stake_external(&user, &v.encode(&env).unwrap(), &sign(digest));
            }
            FuzzAction::SignedClaim { stake_id, month, rewards, nonce } => {
                let Some(stake) = client
                    .try_get_stake(&user_id, &12, &(stake_id as u64))
                    .ok()
                    .and_then(|r| r.ok())
                else {
                    continue;
                };
                let v = ClaimVoucher {
                    destination_address: stake.claim_address.clone(),
                    stake_id: stake.stake_id,
                    interval: stake.interval,
                    rewards: rewards as i128,
                    claimed_month: month as u32,
                    expiry: u64::MAX,
                    user_id: stake.user_id.clone(),
                    salt: BytesN::from_array(&env, &[nonce; 32]),
                    nonce: BytesN::from_array(&env, &[nonce; 32]),
                };
                let digest = env
                    .as_contract(&contract_id, || voucher::digest(&env, &v))
                    .unwrap();
                let before = client.get_stake(&stake.user_id, &stake.interval, &stake.stake_id);
                if client
                    .try_claim(&user, &v.encode(&env).unwrap(), &sign(digest))
                    .is_ok()
                {
                    let after = client.get_stake(&stake.user_id, &stake.interval, &stake.stake_id);
                    assert!(after.claimed_until_month > before.claimed_until_month);
                    assert!(after.claimed_until_month <= after.interval);
                }
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(seconds as u64));
            }
            FuzzAction::Pause => {
                let _ = client.try_pause_staking(&admin);
            }
            FuzzAction::Unpause => {
                let _ = client.try_unpause_staking(&admin);
            }
            FuzzAction::ForceRemove { stake_id } => {
                let _ = client.try_force_remove_stake(&admin, &user_id, &12, &(stake_id as u64));
            }
        }
    }
});
