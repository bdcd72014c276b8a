//! Signing error types.

use shared_crypto::CryptoError;
use shared_types::{Int, TypesError};

/// Errors raised while building, validating, signing or verifying a transaction.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("Chain id is required to sign")]
    MissingChainId,

    #[error("Transaction has no messages")]
    NoMessages,

    #[error("Invalid {field} {address}: {source}")]
    InvalidAddress {
        field: &'static str,
        address: String,
        #[source]
        source: CryptoError,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] TypesError),

    #[error("Validator description must have a moniker")]
    EmptyMoniker,

    #[error("Invalid commission: {0}")]
    InvalidCommission(&'static str),

    #[error("Minimum self delegation must be positive")]
    NonPositiveMinSelfDelegation,

    #[error("Self delegation {value} is below the minimum {min}")]
    SelfDelegationBelowMinimum { value: Int, min: Int },

    #[error("Unsupported consensus key type {0}")]
    UnsupportedConsensusKey(String),

    #[error("Expected {expected} signatures, got {actual}")]
    SignatureCount { expected: usize, actual: usize },

    #[error("Signer key is not a secp256k1 key: {0}")]
    UnsupportedSignerKey(String),

    #[error("Signature invalid: {0}")]
    Signature(#[from] CryptoError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Account number and sequence must both be set or both unset \
         (account_number: {account_number:?}, sequence: {sequence:?})"
    )]
    IncompleteSigner {
        account_number: Option<u64>,
        sequence: Option<u64>,
    },
}

pub type SigningResult<T> = Result<T, SigningError>;
