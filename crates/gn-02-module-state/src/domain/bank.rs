//! Bank module state.

use super::state_map::ModuleGenesis;
use gn_01_validator_keys::Balance;
use serde::{Deserialize, Serialize};
use shared_types::Coins;

/// Per-denom send switch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEnabled {
    pub denom: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankParams {
    #[serde(default)]
    pub send_enabled: Vec<SendEnabled>,
    pub default_send_enabled: bool,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            send_enabled: Vec::new(),
            default_send_enabled: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Display metadata of a denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    pub base: String,
    pub display: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub uri_hash: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankGenesis {
    pub params: BankParams,
    #[serde(default)]
    pub balances: Vec<Balance>,
    #[serde(default)]
    pub supply: Coins,
    #[serde(default)]
    pub denom_metadata: Vec<Metadata>,
    #[serde(default)]
    pub send_enabled: Vec<SendEnabled>,
}

impl BankGenesis {
    pub fn new(
        params: BankParams,
        balances: Vec<Balance>,
        supply: Coins,
        denom_metadata: Vec<Metadata>,
        send_enabled: Vec<SendEnabled>,
    ) -> Self {
        Self {
            params,
            balances,
            supply,
            denom_metadata,
            send_enabled,
        }
    }
}

impl ModuleGenesis for BankGenesis {
    const MODULE_NAME: &'static str = "bank";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_json() {
        let json = serde_json::to_string(&BankGenesis::default()).unwrap();
        assert_eq!(
            json,
            r#"{"params":{"send_enabled":[],"default_send_enabled":true},"balances":[],"supply":[],"denom_metadata":[],"send_enabled":[]}"#
        );
    }
}
