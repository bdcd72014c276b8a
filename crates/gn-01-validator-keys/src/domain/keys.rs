//! Validator key material.
//!
//! A validator holds one consensus key and one account key. The two are
//! generated independently; nothing links them except the owning pair.

use super::consensus::{ConsensusValidator, ConsensusValidators, DEFAULT_VOTING_POWER};
use super::errors::{ProjectionError, ProjectionResult};
use shared_crypto::{Ed25519KeyPair, Secp256k1KeyPair};
use std::sync::Arc;
use tracing::debug;

/// Consensus identity plus delegator account for one validator.
#[derive(Debug)]
pub struct ValidatorKeyPair {
    pub consensus: Ed25519KeyPair,
    pub account: Secp256k1KeyPair,
}

impl ValidatorKeyPair {
    /// Generate both keys from the OS random source.
    pub fn generate() -> Self {
        Self {
            consensus: Ed25519KeyPair::generate(),
            account: Secp256k1KeyPair::generate(),
        }
    }

    /// Derive both keys deterministically from two secrets.
    pub fn from_secrets(consensus_secret: &[u8], account_secret: &[u8]) -> ProjectionResult<Self> {
        let account = Secp256k1KeyPair::from_secret(account_secret)?;
        Ok(Self {
            consensus: Ed25519KeyPair::from_secret(consensus_secret),
            account,
        })
    }
}

/// Ordered list of validator key pairs.
///
/// Pairs are shared by `Arc` so both projections can point back at the
/// keys they came from without copying secrets.
#[derive(Debug, Clone, Default)]
pub struct ValidatorKeyPairs(Vec<Arc<ValidatorKeyPair>>);

impl ValidatorKeyPairs {
    /// Generate `n` independent key pairs.
    pub fn generate(n: usize) -> Self {
        let pairs = (0..n)
            .map(|_| Arc::new(ValidatorKeyPair::generate()))
            .collect();
        debug!(validators = n, "generated validator key pairs");
        Self(pairs)
    }

    /// Derive one pair per `(consensus_secret, account_secret)` entry.
    pub fn from_secrets<C, A>(secrets: &[(C, A)]) -> ProjectionResult<Self>
    where
        C: AsRef<[u8]>,
        A: AsRef<[u8]>,
    {
        secrets
            .iter()
            .enumerate()
            .map(|(index, (consensus, account))| {
                ValidatorKeyPair::from_secrets(consensus.as_ref(), account.as_ref())
                    .map(Arc::new)
                    .map_err(|e| match e {
                        ProjectionError::Address(source) => {
                            ProjectionError::KeyGeneration { index, source }
                        }
                        other => other,
                    })
            })
            .collect::<ProjectionResult<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ValidatorKeyPair>> {
        self.0.iter()
    }

    /// Key pair at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Arc<ValidatorKeyPair>> {
        self.0.get(index)
    }

    /// Project every pair into a consensus record with equal voting power.
    ///
    /// Validators are named `val-<index>`.
    pub fn consensus_validators(&self) -> ConsensusValidators {
        self.0
            .iter()
            .enumerate()
            .map(|(index, keys)| {
                ConsensusValidator::new(
                    Arc::clone(keys),
                    DEFAULT_VOTING_POWER,
                    format!("val-{index}"),
                )
            })
            .collect()
    }
}

impl From<Vec<ValidatorKeyPair>> for ValidatorKeyPairs {
    fn from(pairs: Vec<ValidatorKeyPair>) -> Self {
        Self(pairs.into_iter().map(Arc::new).collect())
    }
}
