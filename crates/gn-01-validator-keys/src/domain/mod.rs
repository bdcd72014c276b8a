//! Domain layer for validator key material.

pub mod accounts;
pub mod consensus;
pub mod errors;
pub mod keys;
pub mod staking;

pub use accounts::{Balance, BaseAccount, BASE_ACCOUNT_TYPE_URL};
pub use consensus::{
    ConsensusValidator, ConsensusValidatorRecord, ConsensusValidators, DEFAULT_VOTING_POWER,
};
pub use errors::{ProjectionError, ProjectionResult};
pub use keys::{ValidatorKeyPair, ValidatorKeyPairs};
pub use staking::{
    bonded_pool_balance, BondStatus, Commission, CommissionRates, Description, ProjectionConfig,
    StakingValidator, StakingValidatorRecord, StakingValidators, BONDED_POOL_NAME,
};
