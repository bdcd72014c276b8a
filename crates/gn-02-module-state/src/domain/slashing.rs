//! Slashing module state.

use super::state_map::ModuleGenesis;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{Dec, ZERO_TIMESTAMP};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashingParams {
    #[serde_as(as = "DisplayFromStr")]
    pub signed_blocks_window: i64,
    pub min_signed_per_window: Dec,
    pub downtime_jail_duration: String,
    pub slash_fraction_double_sign: Dec,
    pub slash_fraction_downtime: Dec,
}

impl Default for SlashingParams {
    fn default() -> Self {
        Self {
            signed_blocks_window: 100,
            min_signed_per_window: Dec::from_atomics(500_000_000_000_000_000),
            downtime_jail_duration: "600s".to_string(),
            slash_fraction_double_sign: Dec::from_atomics(50_000_000_000_000_000),
            slash_fraction_downtime: Dec::from_atomics(10_000_000_000_000_000),
        }
    }
}

/// Liveness record of one validator, keyed by its consensus address.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSigningInfo {
    pub address: String,
    #[serde_as(as = "DisplayFromStr")]
    pub start_height: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub index_offset: i64,
    pub jailed_until: String,
    pub tombstoned: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub missed_blocks_counter: i64,
}

impl ValidatorSigningInfo {
    /// Fresh signing info starting at `start_height`.
    pub fn new(address: String, start_height: i64) -> Self {
        Self {
            address,
            start_height,
            index_offset: 0,
            jailed_until: ZERO_TIMESTAMP.to_string(),
            tombstoned: false,
            missed_blocks_counter: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningInfo {
    pub address: String,
    pub validator_signing_info: ValidatorSigningInfo,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedBlock {
    #[serde_as(as = "DisplayFromStr")]
    pub index: i64,
    pub missed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorMissedBlocks {
    pub address: String,
    pub missed_blocks: Vec<MissedBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashingGenesis {
    pub params: SlashingParams,
    #[serde(default)]
    pub signing_infos: Vec<SigningInfo>,
    #[serde(default)]
    pub missed_blocks: Vec<ValidatorMissedBlocks>,
}

impl SlashingGenesis {
    pub fn new(
        params: SlashingParams,
        signing_infos: Vec<SigningInfo>,
        missed_blocks: Vec<ValidatorMissedBlocks>,
    ) -> Self {
        Self {
            params,
            signing_infos,
            missed_blocks,
        }
    }
}

impl ModuleGenesis for SlashingGenesis {
    const MODULE_NAME: &'static str = "slashing";
}
