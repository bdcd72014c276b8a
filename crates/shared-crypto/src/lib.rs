//! # Shared Crypto - Genesis Key Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | Ed25519 | Consensus identity (validator keys) |
//! | `ecdsa` | secp256k1 | Account signing (delegator keys, gentxs) |
//! | `hashing` | SHA-256, RIPEMD-160 | Address derivation |
//! | `address` | Bech32 | Human readable account/operator addresses |
//!
//! ## Key-Domain Separation
//!
//! The two algorithms never share key material. A consensus key derives a
//! 20-byte address as `SHA-256(pubkey)[..20]`; an account key derives it as
//! `RIPEMD-160(SHA-256(pubkey))`. Both are deterministic, so the same key
//! always maps to the same address in every module that references it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use address::{bech32_decode, bech32_encode, Address, Bech32Prefixes};
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use hashing::{module_address, ripemd160_sha256, sha256, sha256_truncated, Hash, ADDRESS_LEN};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
