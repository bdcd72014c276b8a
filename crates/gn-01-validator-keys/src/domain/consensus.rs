//! Consensus-layer view of the validator set.

use super::errors::ProjectionResult;
use super::keys::ValidatorKeyPair;
use super::staking::{ProjectionConfig, StakingValidator, StakingValidatorRecord, StakingValidators};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};
use serde_with::{serde_as, DisplayFromStr};
use shared_crypto::{Address, Ed25519PublicKey};
use shared_types::{Coin, Coins};
use std::sync::Arc;
use tracing::debug;

/// Voting power of every genesis validator under the equal-weight policy.
pub const DEFAULT_VOTING_POWER: i64 = 1;

/// Amino type name of an ed25519 key in the consensus section.
const ED25519_AMINO_NAME: &str = "tendermint/PubKeyEd25519";

/// A validator as the consensus engine sees it at genesis.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsensusValidatorRecord {
    /// `SHA-256(pub_key)[..20]`, rendered as upper-case hex.
    #[serde_as(as = "DisplayFromStr")]
    pub address: Address,
    #[serde(serialize_with = "serialize_amino_pubkey")]
    pub pub_key: Ed25519PublicKey,
    #[serde_as(as = "DisplayFromStr")]
    pub power: i64,
    pub name: String,
}

#[derive(Serialize)]
struct AminoPubKey {
    #[serde(rename = "type")]
    type_name: &'static str,
    value: String,
}

fn serialize_amino_pubkey<S: Serializer>(
    key: &Ed25519PublicKey,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    AminoPubKey {
        type_name: ED25519_AMINO_NAME,
        value: STANDARD.encode(key.as_bytes()),
    }
    .serialize(serializer)
}

/// Consensus record linked to the key pair it was derived from.
#[derive(Clone, Debug)]
pub struct ConsensusValidator {
    pub record: ConsensusValidatorRecord,
    pub keys: Arc<ValidatorKeyPair>,
}

impl ConsensusValidator {
    pub fn new(keys: Arc<ValidatorKeyPair>, power: i64, name: impl Into<String>) -> Self {
        let pub_key = keys.consensus.public_key();
        Self {
            record: ConsensusValidatorRecord {
                address: Address::from(pub_key.address()),
                pub_key,
                power,
                name: name.into(),
            },
            keys,
        }
    }
}

/// Ordered consensus validator set.
#[derive(Clone, Debug, Default)]
pub struct ConsensusValidators(Vec<ConsensusValidator>);

impl ConsensusValidators {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConsensusValidator> {
        self.0.iter()
    }

    /// Records without key links, in set order.
    pub fn records(&self) -> Vec<ConsensusValidatorRecord> {
        self.0.iter().map(|v| v.record.clone()).collect()
    }

    /// Project into bonded staking validators.
    ///
    /// Each validator bonds `config.power_reduction` tokens. Returns the
    /// records together with the total supply those tokens represent.
    pub fn staking_validators(
        &self,
        config: &ProjectionConfig,
    ) -> ProjectionResult<(StakingValidators, Coins)> {
        let mut supply = Coins::new();
        let mut vals = Vec::with_capacity(self.0.len());

        for v in &self.0 {
            let operator_address = config.prefixes.validator_address(&v.record.address)?;
            let record = StakingValidatorRecord::bonded(
                operator_address,
                &v.record.pub_key,
                config.power_reduction,
            );
            supply.add(Coin::new(config.bond_denom.clone(), record.tokens)?)?;
            vals.push(StakingValidator {
                record,
                keys: Arc::clone(&v.keys),
            });
        }

        debug!(validators = vals.len(), "projected staking validators");
        Ok((StakingValidators::from(vals), supply))
    }
}

impl FromIterator<ConsensusValidator> for ConsensusValidators {
    fn from_iter<I: IntoIterator<Item = ConsensusValidator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConsensusValidators {
    type Item = &'a ConsensusValidator;
    type IntoIter = std::slice::Iter<'a, ConsensusValidator>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
