//! Writes that touch more than one module.
//!
//! Each function takes the current map by value and returns the next one,
//! so a failed write leaves no half-patched state behind for the caller.

use super::auth::AuthGenesis;
use super::bank::BankGenesis;
use super::errors::ModuleStateResult;
use super::sanitize::{sanitize_accounts, sanitize_balances};
use super::staking::{Delegation, StakingGenesis, StakingParams};
use super::state_map::ModuleStateMap;
use gn_01_validator_keys::{
    bonded_pool_balance, Balance, BaseAccount, ProjectionConfig, StakingValidatorRecord,
};
use shared_crypto::Bech32Prefixes;
use tracing::{debug, info};

/// Write staking state, then rewrite bank state with the bonded pool balance.
///
/// The pool balance is recomputed from `validators` and replaces any pool
/// entry already present, so bonded tokens are counted exactly once.
pub fn configure_staking(
    mut map: ModuleStateMap,
    params: StakingParams,
    validators: Vec<StakingValidatorRecord>,
    delegations: Vec<Delegation>,
    prefixes: &Bech32Prefixes,
) -> ModuleStateResult<ModuleStateMap> {
    let config = ProjectionConfig {
        prefixes: prefixes.clone(),
        bond_denom: params.bond_denom.clone(),
        ..Default::default()
    };
    let pool = bonded_pool_balance(&validators, &config)?;

    let mut bank: BankGenesis = map.get()?;
    let staking = StakingGenesis::new(params, validators, delegations);
    map.set(&staking)?;

    bank.balances.retain(|b| b.address != pool.address);
    debug!(
        pool = %pool.address,
        bonded = %pool.coins.amount_of(&config.bond_denom),
        "bonded pool balance recomputed"
    );
    bank.balances.push(pool);
    bank.balances = sanitize_balances(bank.balances)?;
    map.set(&bank)?;

    info!(validators = staking.validators.len(), "staking configured");
    Ok(map)
}

/// Merge accounts into auth state and balances into bank state.
pub fn register_accounts(
    mut map: ModuleStateMap,
    accounts: Vec<BaseAccount>,
    balances: Vec<Balance>,
) -> ModuleStateResult<ModuleStateMap> {
    let mut auth: AuthGenesis = map.get()?;
    let mut bank: BankGenesis = map.get()?;

    auth.accounts.extend(accounts);
    auth.accounts = sanitize_accounts(auth.accounts)?;

    bank.balances.extend(balances);
    bank.balances = sanitize_balances(bank.balances)?;

    map.set(&auth)?;
    map.set(&bank)?;

    info!(
        accounts = auth.accounts.len(),
        balances = bank.balances.len(),
        "accounts registered"
    );
    Ok(map)
}
