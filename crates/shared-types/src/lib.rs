//! # Shared Types Crate
//!
//! Value types shared by every genesis module state and by the gentx signer.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: amounts, coins and key envelopes are defined
//!   once, so auth, bank and staking serialize them identically.
//! - **String Amounts**: integers and decimals cross the JSON boundary as
//!   strings, never as JSON numbers, so large values survive unchanged.
//! - **Non-negative**: amounts are unsigned; a negative amount in input JSON
//!   is a parse error, not a value.

pub mod coin;
pub mod errors;
pub mod math;
pub mod pubkey;

pub use coin::{validate_denom, Coin, Coins};
pub use errors::TypesError;
pub use math::{Dec, Int, POWER_REDUCTION};
pub use pubkey::{AnyPubKey, ED25519_PUBKEY_TYPE_URL, SECP256K1_PUBKEY_TYPE_URL};

/// The zero protobuf timestamp as rendered in genesis JSON.
pub const ZERO_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// Default staking denomination.
pub const DEFAULT_BOND_DENOM: &str = "stake";
