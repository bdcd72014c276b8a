//! # Error Types
//!
//! Errors raised while parsing or combining shared value types.

use thiserror::Error;

/// Errors from amount, coin and key-envelope handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Integer amount string could not be parsed (includes negative values).
    #[error("Invalid integer amount: {0:?}")]
    InvalidInt(String),

    /// Decimal string could not be parsed.
    #[error("Invalid decimal: {0:?}")]
    InvalidDec(String),

    /// Arithmetic overflowed the amount range.
    #[error("Amount overflow")]
    Overflow,

    /// Denomination failed validation.
    #[error("Invalid denom: {0:?}")]
    InvalidDenom(String),

    /// Public key envelope carried an unknown type URL.
    #[error("Unsupported public key type: {0}")]
    UnsupportedKeyType(String),

    /// Public key bytes were not valid for the declared type.
    #[error("Invalid public key for {type_url}: {reason}")]
    InvalidKey {
        /// Declared type URL.
        type_url: String,
        /// Underlying failure.
        reason: String,
    },
}
