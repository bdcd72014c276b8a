//! Sign modes and signer context.

use super::errors::{SigningError, SigningResult};
use crate::proto::sign_mode;
use serde::{Deserialize, Serialize};
use shared_types::AnyPubKey;

/// How sign bytes are derived from a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignMode {
    /// Protobuf `SignDoc` over body and auth info bytes.
    #[serde(rename = "SIGN_MODE_DIRECT")]
    Direct,
    /// Sorted JSON `StdSignDoc`, for signers that cannot produce protobuf.
    #[serde(rename = "SIGN_MODE_LEGACY_AMINO_JSON")]
    LegacyAminoJson,
}

impl SignMode {
    pub fn as_i32(self) -> i32 {
        match self {
            SignMode::Direct => sign_mode::DIRECT,
            SignMode::LegacyAminoJson => sign_mode::LEGACY_AMINO_JSON,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            sign_mode::DIRECT => Some(SignMode::Direct),
            sign_mode::LEGACY_AMINO_JSON => Some(SignMode::LegacyAminoJson),
            _ => None,
        }
    }
}

/// Everything about the signer that goes into sign bytes.
///
/// Account and sequence numbers are `None` only for genesis transactions,
/// where no on-chain account exists yet. Both then sign as zero. Setting
/// just one of them is rejected when sign bytes are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerData {
    pub chain_id: String,
    pub pub_key: AnyPubKey,
    pub address: String,
    pub account_number: Option<u64>,
    pub sequence: Option<u64>,
}

impl SignerData {
    /// Signer of a genesis transaction.
    pub fn genesis(chain_id: impl Into<String>, pub_key: AnyPubKey, address: String) -> Self {
        Self {
            chain_id: chain_id.into(),
            pub_key,
            address,
            account_number: None,
            sequence: None,
        }
    }

    /// Signer of a transaction against an existing account.
    pub fn for_account(
        chain_id: impl Into<String>,
        pub_key: AnyPubKey,
        address: String,
        account_number: u64,
        sequence: u64,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            pub_key,
            address,
            account_number: Some(account_number),
            sequence: Some(sequence),
        }
    }

    pub fn is_genesis(&self) -> bool {
        self.account_number.is_none() && self.sequence.is_none()
    }

    /// `(account_number, sequence)` to sign with.
    pub(crate) fn numbers(&self) -> SigningResult<(u64, u64)> {
        match (self.account_number, self.sequence) {
            (None, None) => Ok((0, 0)),
            (Some(account_number), Some(sequence)) => Ok((account_number, sequence)),
            (account_number, sequence) => Err(SigningError::IncompleteSigner {
                account_number,
                sequence,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(SignMode::Direct.as_i32(), 1);
        assert_eq!(SignMode::from_i32(127), Some(SignMode::LegacyAminoJson));
        assert_eq!(SignMode::from_i32(2), None);
    }

    fn signer() -> SignerData {
        let key = shared_crypto::Secp256k1KeyPair::from_secret(b"del-secret-0")
            .unwrap()
            .public_key();
        SignerData::genesis("c", AnyPubKey::secp256k1(&key), "addr".into())
    }

    #[test]
    fn test_genesis_signs_with_zero_numbers() {
        let signer = signer();
        assert!(signer.is_genesis());
        assert_eq!(signer.numbers().unwrap(), (0, 0));
    }

    #[test]
    fn test_account_signer_keeps_numbers() {
        let genesis = signer();
        let signer = SignerData::for_account("c", genesis.pub_key, genesis.address, 7, 3);
        assert!(!signer.is_genesis());
        assert_eq!(signer.numbers().unwrap(), (7, 3));
    }

    #[test]
    fn test_half_set_numbers_rejected() {
        let mut signer = signer();
        signer.account_number = Some(7);
        assert!(!signer.is_genesis());
        assert!(matches!(
            signer.numbers(),
            Err(SigningError::IncompleteSigner {
                account_number: Some(7),
                sequence: None
            })
        ));

        signer.account_number = None;
        signer.sequence = Some(2);
        assert!(signer.numbers().is_err());
    }

    #[test]
    fn test_json_names() {
        assert_eq!(
            serde_json::to_value(SignMode::Direct).unwrap(),
            "SIGN_MODE_DIRECT"
        );
    }
}
