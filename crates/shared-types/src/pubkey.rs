//! # Public Key Envelope
//!
//! Self-describing public key, serialized as
//! `{"@type": "/cosmos.crypto.ed25519.PubKey", "key": "<base64>"}`.
//! The type URL tells readers which algorithm the bytes belong to, which
//! keeps consensus keys and account keys from being confused.

use crate::TypesError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shared_crypto::{Ed25519PublicKey, Secp256k1PublicKey};

/// Type URL of an ed25519 (consensus) public key.
pub const ED25519_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.ed25519.PubKey";

/// Type URL of a secp256k1 (account) public key.
pub const SECP256K1_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";

/// Public key tagged with its algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnyPubKey {
    type_url: String,
    key: Vec<u8>,
}

impl AnyPubKey {
    /// Wrap a consensus key.
    pub fn ed25519(key: &Ed25519PublicKey) -> Self {
        Self {
            type_url: ED25519_PUBKEY_TYPE_URL.to_string(),
            key: key.as_bytes().to_vec(),
        }
    }

    /// Wrap an account key.
    pub fn secp256k1(key: &Secp256k1PublicKey) -> Self {
        Self {
            type_url: SECP256K1_PUBKEY_TYPE_URL.to_string(),
            key: key.as_bytes().to_vec(),
        }
    }

    /// Rebuild from parts, checking the bytes against the declared type.
    pub fn from_parts(type_url: &str, key: Vec<u8>) -> Result<Self, TypesError> {
        let invalid = |e: shared_crypto::CryptoError| TypesError::InvalidKey {
            type_url: type_url.to_string(),
            reason: e.to_string(),
        };
        match type_url {
            ED25519_PUBKEY_TYPE_URL => {
                Ed25519PublicKey::from_slice(&key).map_err(invalid)?;
            }
            SECP256K1_PUBKEY_TYPE_URL => {
                Secp256k1PublicKey::from_slice(&key).map_err(invalid)?;
            }
            other => return Err(TypesError::UnsupportedKeyType(other.to_string())),
        }
        Ok(Self {
            type_url: type_url.to_string(),
            key,
        })
    }

    /// Algorithm type URL.
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Raw key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Base64 of the raw key bytes.
    pub fn key_base64(&self) -> String {
        STANDARD.encode(&self.key)
    }

    /// 20-byte address for this key under its algorithm's derivation rule.
    pub fn address(&self) -> Result<shared_crypto::Address, TypesError> {
        let invalid = |e: shared_crypto::CryptoError| TypesError::InvalidKey {
            type_url: self.type_url.clone(),
            reason: e.to_string(),
        };
        match self.type_url.as_str() {
            ED25519_PUBKEY_TYPE_URL => Ed25519PublicKey::from_slice(&self.key)
                .map(|k| k.address().into())
                .map_err(invalid),
            SECP256K1_PUBKEY_TYPE_URL => Secp256k1PublicKey::from_slice(&self.key)
                .map(|k| k.address().into())
                .map_err(invalid),
            other => Err(TypesError::UnsupportedKeyType(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct AnyPubKeyJson {
    #[serde(rename = "@type")]
    type_url: String,
    key: String,
}

impl Serialize for AnyPubKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnyPubKeyJson {
            type_url: self.type_url.clone(),
            key: self.key_base64(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnyPubKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = AnyPubKeyJson::deserialize(deserializer)?;
        let key = STANDARD.decode(raw.key.as_bytes()).map_err(de::Error::custom)?;
        AnyPubKey::from_parts(&raw.type_url, key).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_crypto::{Ed25519KeyPair, Secp256k1KeyPair};

    #[test]
    fn test_ed25519_json_shape() {
        let key = Ed25519KeyPair::from_secret(b"val-secret-0").public_key();
        let json = serde_json::to_value(AnyPubKey::ed25519(&key)).unwrap();

        assert_eq!(json["@type"], ED25519_PUBKEY_TYPE_URL);
        assert_eq!(json["key"], "ZhVhrOUHnUwYw/GlBSBrw/0X6A261gchCRYkAxGF2jk=");
    }

    #[test]
    fn test_secp256k1_json_shape() {
        let key = Secp256k1KeyPair::from_secret(b"del-secret-0")
            .unwrap()
            .public_key();
        let any = AnyPubKey::secp256k1(&key);

        assert_eq!(any.key_base64(), "Aol+ZF9xBuZmYJrT1QFLpZBvSfr/zEKifWyg0Xi1tsFV");
        assert_eq!(
            any.address().unwrap().to_hex_upper(),
            "30D7E04DA313C31B59A46408494B4272F0A9A256"
        );
    }

    #[test]
    fn test_deserialize_rejects_mismatched_length() {
        // 33-byte secp256k1 key declared as ed25519.
        let json = r#"{"@type":"/cosmos.crypto.ed25519.PubKey","key":"Aol+ZF9xBuZmYJrT1QFLpZBvSfr/zEKifWyg0Xi1tsFV"}"#;
        assert!(serde_json::from_str::<AnyPubKey>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let json = r#"{"@type":"/cosmos.crypto.sr25519.PubKey","key":"AA=="}"#;
        assert!(serde_json::from_str::<AnyPubKey>(json).is_err());
    }
}
