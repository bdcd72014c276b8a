//! Module state error types.

use gn_01_validator_keys::ProjectionError;
use shared_crypto::CryptoError;
use shared_types::TypesError;

/// Errors raised while reading, writing or sanitizing module state.
#[derive(Debug, thiserror::Error)]
pub enum ModuleStateError {
    #[error("Malformed {module} genesis state: {source}")]
    Malformed {
        module: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode {module} genesis state: {source}")]
    Encode {
        module: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate account {address} with conflicting content")]
    DuplicateAccount { address: String },

    #[error("Invalid address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: CryptoError,
    },

    #[error("Invalid coins: {0}")]
    InvalidCoins(#[from] TypesError),

    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),
}

pub type ModuleStateResult<T> = Result<T, ModuleStateError>;
