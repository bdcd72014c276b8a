//! # Address Hashing
//!
//! SHA-256 and RIPEMD-160 helpers used to turn public keys and module names
//! into 20-byte addresses.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Length of every address derived in this crate.
pub const ADDRESS_LEN: usize = 20;

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// First 20 bytes of `SHA-256(data)`.
///
/// Used for ed25519 consensus addresses and module accounts.
pub fn sha256_truncated(data: &[u8]) -> [u8; ADDRESS_LEN] {
    let hash = sha256(data);
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(&hash[..ADDRESS_LEN]);
    out
}

/// `RIPEMD-160(SHA-256(data))`, the secp256k1 account address hash.
pub fn ripemd160_sha256(data: &[u8]) -> [u8; ADDRESS_LEN] {
    let inner = Sha256::digest(data);
    Ripemd160::digest(inner).into()
}

/// Address of a module-owned account (e.g. the bonded pool).
pub fn module_address(module_name: &str) -> [u8; ADDRESS_LEN] {
    sha256_truncated(module_name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_truncated_is_prefix() {
        let full = sha256(b"bonded_tokens_pool");
        let short = sha256_truncated(b"bonded_tokens_pool");
        assert_eq!(&full[..20], &short[..]);
    }

    #[test]
    fn test_ripemd_differs_from_truncation() {
        assert_ne!(ripemd160_sha256(b"key"), sha256_truncated(b"key"));
    }

    #[test]
    fn test_module_address_deterministic() {
        assert_eq!(
            module_address("bonded_tokens_pool"),
            module_address("bonded_tokens_pool")
        );
        assert_ne!(
            module_address("bonded_tokens_pool"),
            module_address("not_bonded_tokens_pool")
        );
    }
}
