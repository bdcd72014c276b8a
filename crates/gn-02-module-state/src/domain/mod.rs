//! Module genesis states.

pub mod auth;
pub mod bank;
pub mod compose;
pub mod consensus;
pub mod distribution;
pub mod errors;
pub mod genutil;
pub mod mint;
pub mod sanitize;
pub mod slashing;
pub mod staking;
pub mod state_map;

pub use auth::{AuthGenesis, AuthParams};
pub use bank::{BankGenesis, BankParams, DenomUnit, Metadata, SendEnabled};
pub use compose::{configure_staking, register_accounts};
pub use consensus::{
    AbciParams, BlockParams, ConsensusGenesis, ConsensusParams, EvidenceParams, ValidatorParams,
    VersionParams,
};
pub use distribution::{DecCoin, DistributionGenesis, DistributionParams, FeePool};
pub use errors::{ModuleStateError, ModuleStateResult};
pub use genutil::GenutilGenesis;
pub use mint::{MintGenesis, MintParams, Minter};
pub use sanitize::{sanitize_accounts, sanitize_balances};
pub use slashing::{
    MissedBlock, SigningInfo, SlashingGenesis, SlashingParams, ValidatorMissedBlocks,
    ValidatorSigningInfo,
};
pub use staking::{Delegation, StakingGenesis, StakingParams};
pub use state_map::{ModuleGenesis, ModuleStateMap};
