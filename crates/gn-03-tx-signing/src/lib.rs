//! # gn-03-tx-signing
//!
//! Builds and signs the self-delegation transaction ("gentx") that bonds a
//! validator's stake at genesis.
//!
//! ## Signing convention
//!
//! Genesis transactions use `SIGN_MODE_DIRECT`. The sign bytes are a
//! protobuf `SignDoc` over the body bytes, the auth info bytes (which carry
//! the signer's public key), the chain id and an account number of zero.
//! No sequence number exists yet, so the signer info carries zero too.
//!
//! ## Key domains
//!
//! The message's `pubkey` is the validator's ed25519 consensus key. The
//! transaction is signed by the secp256k1 account key, which also supplies
//! the delegator address. The two never mix.
//!
//! ## Outputs
//!
//! - [`tx_to_json`] renders a signed transaction as protobuf JSON for
//!   `genutil.gen_txs`.
//! - [`Tx::encode`] gives the `TxRaw` bytes.

pub mod builder;
pub mod domain;
pub mod gentx;
pub mod json;
pub mod proto;
pub mod sign_bytes;

pub use builder::TxBuilder;
pub use domain::*;
pub use gentx::{sign_genesis_tx, verify_genesis_tx, GENTX_SIGN_MODE};
pub use json::{encode_tx_json, tx_to_json};
pub use sign_bytes::sign_bytes;
