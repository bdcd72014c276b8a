//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Invalid signature
    #[error("Invalid signature")]
    InvalidSignature,

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Bech32 encoding or decoding failed
    #[error("Bech32 error: {0}")]
    Bech32(String),

    /// Bech32 human readable part did not match the expected prefix
    #[error("Invalid address prefix: expected {expected}, got {actual}")]
    PrefixMismatch {
        /// Expected human readable part
        expected: String,
        /// Human readable part found in the address
        actual: String,
    },

    /// Address had the wrong number of bytes
    #[error("Invalid address length: expected {expected}, got {actual}")]
    InvalidAddressLength {
        /// Expected address length in bytes
        expected: usize,
        /// Actual address length in bytes
        actual: usize,
    },
}
