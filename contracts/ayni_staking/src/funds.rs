//! Token movements. Balances are checked first so shortfalls surface as
//! [`ContractError::InsufficientBalance`] instead of a token-contract trap.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Pull `amount` of `asset` from `from` into the contract.
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token::Client::new(env, asset);
    if client.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` of `asset` out of the contract. Zero amounts move nothing.
pub fn pay(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, asset);
    let this = env.current_contract_address();
    if client.balance(&this) < amount {
        return Err(ContractError::InsufficientBalance);
    }
    client.transfer(&this, to, &amount);
    Ok(())
}
