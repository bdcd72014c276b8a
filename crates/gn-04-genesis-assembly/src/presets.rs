//! Ready-made plans.

use crate::domain::{GenesisError, GenesisResult, GenesisStep};
use crate::pipeline::GenesisPlan;
use gn_01_validator_keys::{
    ConsensusValidator, ConsensusValidators, ProjectionConfig, StakingValidators,
    DEFAULT_VOTING_POWER,
};
use gn_02_module_state::{MintGenesis, StakingParams};
use shared_crypto::Bech32Prefixes;
use shared_types::Coin;
use std::sync::Arc;

/// Plan for a network whose only accounts are its validators.
///
/// Every validator gets a funded base account, a bonded staking record, a
/// consensus entry named `val-{i}` and one gentx self-delegating `amount`.
/// Module params are the defaults except for the bond and mint denom, which
/// follow `amount`. Addresses use the `cosmos` prefixes.
pub fn default_genesis_only_validators<'a>(
    chain_id: &str,
    staking_vals: &'a StakingValidators,
    amount: Coin,
) -> GenesisResult<GenesisPlan<'a>> {
    genesis_only_validators(chain_id, staking_vals, amount, Bech32Prefixes::default())
}

/// [`default_genesis_only_validators`] with custom address prefixes.
pub fn genesis_only_validators<'a>(
    chain_id: &str,
    staking_vals: &'a StakingValidators,
    amount: Coin,
    prefixes: Bech32Prefixes,
) -> GenesisResult<GenesisPlan<'a>> {
    if staking_vals.is_empty() {
        return Err(GenesisError::InvalidConfig(
            "at least one validator is required".to_string(),
        ));
    }
    amount
        .validate_positive()
        .map_err(|e| GenesisError::InvalidConfig(format!("gentx amount: {e}")))?;

    let config = ProjectionConfig {
        prefixes,
        bond_denom: amount.denom.clone(),
        ..Default::default()
    };
    let consensus: ConsensusValidators = staking_vals
        .iter()
        .enumerate()
        .map(|(i, v)| {
            ConsensusValidator::new(Arc::clone(&v.keys), DEFAULT_VOTING_POWER, format!("val-{i}"))
        })
        .collect();
    let records = consensus.records();

    let staking_params = StakingParams {
        bond_denom: amount.denom.clone(),
        ..Default::default()
    };
    let mut mint = MintGenesis::default();
    mint.params.mint_denom = amount.denom.clone();

    let accounts = staking_vals.base_accounts(&config.prefixes)?;
    let balances = staking_vals.balances(&config)?;

    let mut plan = GenesisPlan::new()
        .with_prefixes(config.prefixes.clone())
        .then(GenesisStep::chain_id(chain_id))
        .then(GenesisStep::default_auth_params())
        .then(GenesisStep::consensus(None, consensus))
        .then(GenesisStep::base_accounts(accounts, balances))
        .then(GenesisStep::staking(staking_params, staking_vals, vec![]))
        .then(GenesisStep::default_distribution())
        .then(GenesisStep::Mint(mint))
        .then(GenesisStep::slashing(Default::default(), vec![], vec![]));

    for (v, record) in staking_vals.iter().zip(records) {
        plan.push(GenesisStep::gen_tx(&v.keys.account, record, amount.clone()));
    }
    Ok(plan)
}
