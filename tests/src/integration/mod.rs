//! # Integration Tests
//!
//! Each file builds genesis documents through the public crate APIs only.

pub mod e2e_genesis;
pub mod network;
pub mod properties;

use gn_01_validator_keys::{ProjectionConfig, StakingValidators, ValidatorKeyPairs};
use gn_04_genesis_assembly::{default_genesis_only_validators, GenesisDocument};
use shared_types::{Coin, POWER_REDUCTION};

/// Keys for `n` validators seeded with `val-secret-{i}` / `del-secret-{i}`.
pub fn seeded_keys(n: usize) -> ValidatorKeyPairs {
    let secrets: Vec<(String, String)> = (0..n)
        .map(|i| (format!("val-secret-{i}"), format!("del-secret-{i}")))
        .collect();
    ValidatorKeyPairs::from_secrets(&secrets).expect("seeded keys")
}

/// Staking projection of `keys` with default prefixes and denom.
pub fn staking(keys: &ValidatorKeyPairs) -> StakingValidators {
    keys.consensus_validators()
        .staking_validators(&ProjectionConfig::default())
        .expect("projection")
        .0
}

/// One power unit of the default bond denom.
pub fn one_power() -> Coin {
    Coin::new("stake", POWER_REDUCTION).expect("stake coin")
}

/// Sealed validators-only genesis for `keys`.
pub fn sealed(chain_id: &str, keys: &ValidatorKeyPairs) -> GenesisDocument {
    let vals = staking(keys);
    default_genesis_only_validators(chain_id, &vals, one_power())
        .and_then(|plan| plan.build())
        .and_then(|snapshot| snapshot.seal())
        .expect("sealed genesis")
}
