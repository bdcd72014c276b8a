//! # gn-01-validator-keys
//!
//! Key material and validator projections for genesis construction.
//!
//! ## Role in System
//!
//! Every validator owns two independent key pairs:
//!
//! - an **ed25519 consensus key**, identifying the node to the consensus engine
//! - a **secp256k1 account key**, owning the delegator account and signing the gentx
//!
//! From these, two views are projected:
//!
//! ```text
//! ValidatorKeyPair ──consensus_validators()──→ ConsensusValidator
//!                                                   │ address = SHA-256(pubkey)[..20]
//!                                                   │ power   = 1
//!                                                   ↓
//!                                  staking_validators() ──→ StakingValidator
//!                                                              operator = valoper(address)
//!                                                              tokens   = power reduction
//! ```
//!
//! The operator address is always derived from the same consensus key used
//! by the consensus record, which keeps the two modules from diverging.

pub mod domain;

pub use domain::*;
