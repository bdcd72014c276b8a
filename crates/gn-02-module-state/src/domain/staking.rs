//! Staking module state.

use super::state_map::ModuleGenesis;
use gn_01_validator_keys::StakingValidatorRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{Dec, Int, DEFAULT_BOND_DENOM};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// Protobuf duration, e.g. `"1814400s"`.
    pub unbonding_time: String,
    pub max_validators: u32,
    pub max_entries: u32,
    pub historical_entries: u32,
    pub bond_denom: String,
    pub min_commission_rate: Dec,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            unbonding_time: "1814400s".to_string(),
            max_validators: 100,
            max_entries: 7,
            historical_entries: 10_000,
            bond_denom: DEFAULT_BOND_DENOM.to_string(),
            min_commission_rate: Dec::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator_address: String,
    pub validator_address: String,
    pub shares: Dec,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingGenesis {
    pub params: StakingParams,
    #[serde(default)]
    pub last_total_power: Int,
    #[serde(default)]
    pub last_validator_powers: Vec<Value>,
    #[serde(default)]
    pub validators: Vec<StakingValidatorRecord>,
    #[serde(default)]
    pub delegations: Vec<Delegation>,
    #[serde(default)]
    pub unbonding_delegations: Vec<Value>,
    #[serde(default)]
    pub redelegations: Vec<Value>,
    #[serde(default)]
    pub exported: bool,
}

impl StakingGenesis {
    pub fn new(
        params: StakingParams,
        validators: Vec<StakingValidatorRecord>,
        delegations: Vec<Delegation>,
    ) -> Self {
        Self {
            params,
            validators,
            delegations,
            ..Default::default()
        }
    }
}

impl ModuleGenesis for StakingGenesis {
    const MODULE_NAME: &'static str = "staking";
}
