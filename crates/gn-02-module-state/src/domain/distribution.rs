//! Distribution module state.
//!
//! Only parameters and the community pool carry values at genesis; the
//! per-validator reward lists start empty and are kept opaque.

use super::state_map::ModuleGenesis;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::Dec;

/// Coin with a decimal amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionParams {
    pub community_tax: Dec,
    pub base_proposer_reward: Dec,
    pub bonus_proposer_reward: Dec,
    pub withdraw_addr_enabled: bool,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            // 2%
            community_tax: Dec::from_atomics(20_000_000_000_000_000),
            base_proposer_reward: Dec::ZERO,
            bonus_proposer_reward: Dec::ZERO,
            withdraw_addr_enabled: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePool {
    pub community_pool: Vec<DecCoin>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionGenesis {
    pub params: DistributionParams,
    pub fee_pool: FeePool,
    pub delegator_withdraw_infos: Vec<Value>,
    pub previous_proposer: String,
    pub outstanding_rewards: Vec<Value>,
    pub validator_accumulated_commissions: Vec<Value>,
    pub validator_historical_rewards: Vec<Value>,
    pub validator_current_rewards: Vec<Value>,
    pub delegator_starting_infos: Vec<Value>,
    pub validator_slash_events: Vec<Value>,
}

impl ModuleGenesis for DistributionGenesis {
    const MODULE_NAME: &'static str = "distribution";
}
