//! Consensus section of the genesis document.
//!
//! Unlike the other modules this lives at the top level of the document,
//! next to `chain_id`, rather than under `app_state`. Integers are rendered
//! as strings, following the consensus engine's JSON conventions.

use gn_01_validator_keys::{ConsensusValidatorRecord, ConsensusValidators};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockParams {
    #[serde_as(as = "DisplayFromStr")]
    pub max_bytes: i64,
    /// `-1` means unlimited.
    #[serde_as(as = "DisplayFromStr")]
    pub max_gas: i64,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceParams {
    #[serde_as(as = "DisplayFromStr")]
    pub max_age_num_blocks: i64,
    /// Nanoseconds.
    #[serde_as(as = "DisplayFromStr")]
    pub max_age_duration: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub max_bytes: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorParams {
    pub pub_key_types: Vec<String>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionParams {
    #[serde_as(as = "DisplayFromStr")]
    pub app: u64,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbciParams {
    #[serde_as(as = "DisplayFromStr")]
    pub vote_extensions_enable_height: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub block: BlockParams,
    pub evidence: EvidenceParams,
    pub validator: ValidatorParams,
    pub version: VersionParams,
    pub abci: AbciParams,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            block: BlockParams {
                max_bytes: 22_020_096,
                max_gas: -1,
            },
            evidence: EvidenceParams {
                max_age_num_blocks: 100_000,
                max_age_duration: 172_800_000_000_000,
                max_bytes: 1_048_576,
            },
            validator: ValidatorParams {
                pub_key_types: vec!["ed25519".to_string()],
            },
            version: VersionParams { app: 0 },
            abci: AbciParams {
                vote_extensions_enable_height: 0,
            },
        }
    }
}

/// The `consensus` object: parameters plus the initial validator set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsensusGenesis {
    pub params: ConsensusParams,
    pub validators: Vec<ConsensusValidatorRecord>,
}

impl ConsensusGenesis {
    /// Missing params fall back to [`ConsensusParams::default`].
    pub fn new(params: Option<ConsensusParams>, validators: &ConsensusValidators) -> Self {
        Self {
            params: params.unwrap_or_default(),
            validators: validators.records(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_01_validator_keys::ValidatorKeyPairs;

    #[test]
    fn test_default_params_json() {
        let json = serde_json::to_value(ConsensusParams::default()).unwrap();
        assert_eq!(json["block"]["max_bytes"], "22020096");
        assert_eq!(json["block"]["max_gas"], "-1");
        assert_eq!(json["evidence"]["max_age_duration"], "172800000000000");
        assert_eq!(json["validator"]["pub_key_types"][0], "ed25519");
    }

    #[test]
    fn test_validators_in_set_order() {
        let vals = ValidatorKeyPairs::generate(2).consensus_validators();
        let genesis = ConsensusGenesis::new(None, &vals);

        assert_eq!(genesis.validators.len(), 2);
        assert_eq!(genesis.validators[1].name, "val-1");
    }
}
