//! Transaction messages.

use super::errors::{SigningError, SigningResult};
use crate::proto;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gn_01_validator_keys::{CommissionRates, Description};
use prost::Message;
use serde::Serialize;
use serde_json::{json, Map, Value};
use shared_crypto::{Address, Bech32Prefixes};
use shared_types::{AnyPubKey, Coin, Dec, Int, ED25519_PUBKEY_TYPE_URL};

/// A message that can be placed in a transaction body.
pub trait TxMessage {
    /// Protobuf type URL, e.g. `/cosmos.staking.v1beta1.MsgCreateValidator`.
    const TYPE_URL: &'static str;
    /// Legacy amino route name used by `SIGN_MODE_LEGACY_AMINO_JSON`.
    const AMINO_NAME: &'static str;

    /// Stateless checks. A message failing these must never be signed.
    fn validate_basic(&self, prefixes: &Bech32Prefixes) -> SigningResult<()>;

    /// Protobuf encoding of the message value.
    fn encode_proto(&self) -> Vec<u8>;

    /// Protobuf JSON object, without the `@type` field.
    fn to_json(&self) -> SigningResult<Value>;

    /// Legacy amino JSON value.
    fn to_amino_json(&self) -> SigningResult<Value>;
}

/// A message already encoded for the body, kept in both renderings.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedMsg {
    pub type_url: String,
    pub value: Vec<u8>,
    pub json: Value,
    pub amino: Value,
}

impl EncodedMsg {
    pub fn encode<M: TxMessage>(msg: &M) -> SigningResult<Self> {
        let mut json = match msg.to_json()? {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        json.insert("@type".to_string(), Value::String(M::TYPE_URL.to_string()));

        Ok(Self {
            type_url: M::TYPE_URL.to_string(),
            value: msg.encode_proto(),
            json: Value::Object(json),
            amino: json!({ "type": M::AMINO_NAME, "value": msg.to_amino_json()? }),
        })
    }

    pub fn to_any(&self) -> prost_types::Any {
        prost_types::Any {
            type_url: self.type_url.clone(),
            value: self.value.clone(),
        }
    }
}

/// Register a validator and bond its own stake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MsgCreateValidator {
    pub description: Description,
    pub commission: CommissionRates,
    pub min_self_delegation: Int,
    pub delegator_address: String,
    pub validator_address: String,
    pub pubkey: AnyPubKey,
    pub value: Coin,
}

fn check_address(
    field: &'static str,
    address: &str,
    hrp: &str,
) -> SigningResult<Address> {
    Address::from_bech32(address, hrp).map_err(|source| SigningError::InvalidAddress {
        field,
        address: address.to_string(),
        source,
    })
}

impl TxMessage for MsgCreateValidator {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgCreateValidator";
    const AMINO_NAME: &'static str = "cosmos-sdk/MsgCreateValidator";

    fn validate_basic(&self, prefixes: &Bech32Prefixes) -> SigningResult<()> {
        check_address("delegator_address", &self.delegator_address, &prefixes.account)?;
        check_address("validator_address", &self.validator_address, &prefixes.validator)?;

        if self.pubkey.type_url() != ED25519_PUBKEY_TYPE_URL {
            return Err(SigningError::UnsupportedConsensusKey(
                self.pubkey.type_url().to_string(),
            ));
        }

        self.value.validate_positive()?;

        if self.description.moniker.is_empty() {
            return Err(SigningError::EmptyMoniker);
        }

        let rates = &self.commission;
        if rates.max_rate > Dec::ONE {
            return Err(SigningError::InvalidCommission("max rate cannot exceed 1"));
        }
        if rates.rate > rates.max_rate {
            return Err(SigningError::InvalidCommission("rate cannot exceed max rate"));
        }
        if rates.max_change_rate > rates.max_rate {
            return Err(SigningError::InvalidCommission(
                "max change rate cannot exceed max rate",
            ));
        }

        if self.min_self_delegation.is_zero() {
            return Err(SigningError::NonPositiveMinSelfDelegation);
        }
        if self.value.amount < self.min_self_delegation {
            return Err(SigningError::SelfDelegationBelowMinimum {
                value: self.value.amount,
                min: self.min_self_delegation,
            });
        }
        Ok(())
    }

    fn encode_proto(&self) -> Vec<u8> {
        let d = &self.description;
        let c = &self.commission;
        proto::MsgCreateValidator {
            description: Some(proto::Description {
                moniker: d.moniker.clone(),
                identity: d.identity.clone(),
                website: d.website.clone(),
                security_contact: d.security_contact.clone(),
                details: d.details.clone(),
            }),
            commission: Some(proto::CommissionRates {
                rate: c.rate.atomics().to_string(),
                max_rate: c.max_rate.atomics().to_string(),
                max_change_rate: c.max_change_rate.atomics().to_string(),
            }),
            min_self_delegation: self.min_self_delegation.to_string(),
            delegator_address: self.delegator_address.clone(),
            validator_address: self.validator_address.clone(),
            pubkey: Some(pubkey_any(&self.pubkey)),
            value: Some(coin_proto(&self.value)),
        }
        .encode_to_vec()
    }

    fn to_json(&self) -> SigningResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn to_amino_json(&self) -> SigningResult<Value> {
        // Amino drops empty description fields and uses the legacy key envelope.
        let description: Map<String, Value> = serde_json::to_value(&self.description)?
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(_, v)| v.as_str().is_some_and(|s| !s.is_empty()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(json!({
            "description": description,
            "commission": self.commission,
            "min_self_delegation": self.min_self_delegation,
            "delegator_address": self.delegator_address,
            "validator_address": self.validator_address,
            "pubkey": {
                "type": "tendermint/PubKeyEd25519",
                "value": STANDARD.encode(self.pubkey.key()),
            },
            "value": self.value,
        }))
    }
}

/// Wrap a public key as a protobuf `Any`.
pub(crate) fn pubkey_any(key: &AnyPubKey) -> prost_types::Any {
    prost_types::Any {
        type_url: key.type_url().to_string(),
        value: proto::PubKey {
            key: key.key().to_vec(),
        }
        .encode_to_vec(),
    }
}

pub(crate) fn coin_proto(coin: &Coin) -> proto::Coin {
    proto::Coin {
        denom: coin.denom.clone(),
        amount: coin.amount.to_string(),
    }
}
