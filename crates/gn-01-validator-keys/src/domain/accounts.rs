//! Genesis accounts and balances.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{AnyPubKey, Coins};

/// Type URL of a base account inside auth state.
pub const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

/// An account with no history: number and sequence start at zero at genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BaseAccountJson", into = "BaseAccountJson")]
pub struct BaseAccount {
    pub address: String,
    pub pub_key: Option<AnyPubKey>,
    pub account_number: u64,
    pub sequence: u64,
}

impl BaseAccount {
    pub fn genesis(address: String, pub_key: AnyPubKey) -> Self {
        Self {
            address,
            pub_key: Some(pub_key),
            account_number: 0,
            sequence: 0,
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize)]
struct BaseAccountJson {
    #[serde(rename = "@type")]
    type_url: String,
    address: String,
    pub_key: Option<AnyPubKey>,
    #[serde_as(as = "DisplayFromStr")]
    account_number: u64,
    #[serde_as(as = "DisplayFromStr")]
    sequence: u64,
}

impl TryFrom<BaseAccountJson> for BaseAccount {
    type Error = String;

    fn try_from(raw: BaseAccountJson) -> Result<Self, Self::Error> {
        if raw.type_url != BASE_ACCOUNT_TYPE_URL {
            return Err(format!("unsupported account type {}", raw.type_url));
        }
        Ok(Self {
            address: raw.address,
            pub_key: raw.pub_key,
            account_number: raw.account_number,
            sequence: raw.sequence,
        })
    }
}

impl From<BaseAccount> for BaseAccountJson {
    fn from(account: BaseAccount) -> Self {
        Self {
            type_url: BASE_ACCOUNT_TYPE_URL.to_string(),
            address: account.address,
            pub_key: account.pub_key,
            account_number: account.account_number,
            sequence: account.sequence,
        }
    }
}

/// Coins held by one address in bank state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub address: String,
    pub coins: Coins,
}
