//! Error types for key material and projections.

use shared_crypto::CryptoError;
use shared_types::TypesError;

/// Projection error types
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("Key generation failed for validator {index}: {source}")]
    KeyGeneration {
        index: usize,
        #[source]
        source: CryptoError,
    },

    #[error("Address encoding failed: {0}")]
    Address(#[from] CryptoError),

    #[error("Invalid value: {0}")]
    Types(#[from] TypesError),

    #[error(
        "Operator address {operator} does not match consensus key address {expected}"
    )]
    AddressDivergence { operator: String, expected: String },
}

/// Result type for projection operations
pub type ProjectionResult<T> = Result<T, ProjectionError>;
