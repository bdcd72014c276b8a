//! # gn-04-genesis-assembly
//!
//! Turns an ordered list of construction steps into the canonical genesis
//! document every node of a network starts from.
//!
//! ## Pipeline
//!
//! ```text
//! GenesisPlan { steps } ──validate──→ fold(apply) ──→ GenesisSnapshot
//!                                                          │ seal()
//!                                                          ↓
//!                              GenesisDocument { chain_id, canonical bytes }
//! ```
//!
//! ## Ordering rules
//!
//! - A gentx step needs a chain id step earlier in the list. This is checked
//!   for the whole plan before the first step runs.
//! - Staking rewrites the bank module with a recomputed bonded pool balance.
//!   A later `Banking` step overwrites bank state entirely.
//!
//! ## Canonical form
//!
//! Sealing folds the signed transactions into `genutil.gen_txs` and writes
//! compact JSON with object keys sorted at every level. Sealing the same
//! snapshot twice gives identical bytes.

pub mod domain;
pub mod pipeline;
pub mod presets;

pub use domain::*;
pub use pipeline::GenesisPlan;
pub use presets::{default_genesis_only_validators, genesis_only_validators};
