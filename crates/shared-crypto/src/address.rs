//! # Bech32 Addresses
//!
//! 20-byte addresses and their human readable encodings.
//!
//! The same bytes render differently per role: `cosmos1...` for accounts,
//! `cosmosvaloper1...` for validator operators, `cosmosvalcons1...` for
//! consensus identities. Prefixes are passed explicitly through
//! [`Bech32Prefixes`]; nothing here reads process-wide configuration.

use crate::hashing::ADDRESS_LEN;
use crate::CryptoError;
use bech32::{FromBase32, ToBase32, Variant};
use std::fmt;

/// Raw 20-byte address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; ADDRESS_LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidAddressLength {
                    expected: ADDRESS_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Encode with the given human readable part.
    pub fn to_bech32(&self, hrp: &str) -> Result<String, CryptoError> {
        bech32_encode(hrp, &self.0)
    }

    /// Decode a bech32 string, requiring the given human readable part.
    pub fn from_bech32(encoded: &str, expected_hrp: &str) -> Result<Self, CryptoError> {
        let (hrp, bytes) = bech32_decode(encoded)?;
        if hrp != expected_hrp {
            return Err(CryptoError::PrefixMismatch {
                expected: expected_hrp.to_string(),
                actual: hrp,
            });
        }
        Self::from_slice(&bytes)
    }

    /// Upper-case hex, the consensus engine's address rendering.
    pub fn to_hex_upper(&self) -> String {
        self.0.iter().map(|b| format!("{:02X}", b)).collect()
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_upper())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_upper())
    }
}

/// Human readable parts for the three address roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bech32Prefixes {
    /// Account addresses (delegators, module accounts).
    pub account: String,
    /// Validator operator addresses.
    pub validator: String,
    /// Consensus node addresses.
    pub consensus: String,
}

impl Bech32Prefixes {
    /// Derive all three prefixes from a main prefix (`cosmos` -> `cosmosvaloper`, `cosmosvalcons`).
    pub fn from_main(main: &str) -> Self {
        Self {
            account: main.to_string(),
            validator: format!("{main}valoper"),
            consensus: format!("{main}valcons"),
        }
    }

    /// Encode an account address.
    pub fn account_address(&self, addr: &Address) -> Result<String, CryptoError> {
        addr.to_bech32(&self.account)
    }

    /// Encode a validator operator address.
    pub fn validator_address(&self, addr: &Address) -> Result<String, CryptoError> {
        addr.to_bech32(&self.validator)
    }

    /// Encode a consensus address.
    pub fn consensus_address(&self, addr: &Address) -> Result<String, CryptoError> {
        addr.to_bech32(&self.consensus)
    }
}

impl Default for Bech32Prefixes {
    fn default() -> Self {
        Self::from_main("cosmos")
    }
}

/// Encode arbitrary bytes as bech32 (BIP-173 variant).
pub fn bech32_encode(hrp: &str, bytes: &[u8]) -> Result<String, CryptoError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| CryptoError::Bech32(e.to_string()))
}

/// Decode a bech32 string into its human readable part and bytes.
pub fn bech32_decode(encoded: &str) -> Result<(String, Vec<u8>), CryptoError> {
    let (hrp, data, variant) =
        bech32::decode(encoded).map_err(|e| CryptoError::Bech32(e.to_string()))?;
    if variant != Variant::Bech32 {
        return Err(CryptoError::Bech32("bech32m is not accepted".to_string()));
    }
    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| CryptoError::Bech32(e.to_string()))?;
    Ok((hrp, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::module_address;

    fn address_from_hex(s: &str) -> Address {
        Address::from_slice(&hex::decode(s).unwrap()).unwrap()
    }

    #[test]
    fn test_account_encoding() {
        let addr = address_from_hex("30D7E04DA313C31B59A46408494B4272F0A9A256");
        let prefixes = Bech32Prefixes::default();
        assert_eq!(
            prefixes.account_address(&addr).unwrap(),
            "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe"
        );
    }

    #[test]
    fn test_operator_and_consensus_encoding() {
        let addr = address_from_hex("3F3B076353767F046477A6E0982F808C24D1870A");
        let prefixes = Bech32Prefixes::default();
        assert_eq!(
            prefixes.validator_address(&addr).unwrap(),
            "cosmosvaloper18uaswc6nwelsgerh5msfstuq3sjdrpc2k6ly5u"
        );
        assert_eq!(
            prefixes.consensus_address(&addr).unwrap(),
            "cosmosvalcons18uaswc6nwelsgerh5msfstuq3sjdrpc2zfvcca"
        );
    }

    #[test]
    fn test_bonded_pool_address() {
        let addr = Address::new(module_address("bonded_tokens_pool"));
        assert_eq!(
            addr.to_bech32("cosmos").unwrap(),
            "cosmos1fl48vsnmsdzcv85q5d2q4z5ajdha8yu34mf0eh"
        );
    }

    #[test]
    fn test_decode_checks_prefix() {
        let err = Address::from_bech32(
            "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe",
            "cosmosvaloper",
        )
        .unwrap_err();
        assert!(matches!(err, CryptoError::PrefixMismatch { .. }));
    }

    #[test]
    fn test_decode_roundtrip_bytes() {
        let addr = Address::from_bech32(
            "cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpe",
            "cosmos",
        )
        .unwrap();
        assert_eq!(addr.to_hex_upper(), "30D7E04DA313C31B59A46408494B4272F0A9A256");
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        assert!(bech32_decode("cosmos1xrt7qndrz0p3kkdyvsyyjj6zwtc2ngjky8dcpq").is_err());
    }

    #[test]
    fn test_custom_prefixes() {
        let prefixes = Bech32Prefixes::from_main("osmo");
        assert_eq!(prefixes.validator, "osmovaloper");
        assert_eq!(prefixes.consensus, "osmovalcons");
    }
}
