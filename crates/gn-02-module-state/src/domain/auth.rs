//! Auth module state.

use super::state_map::ModuleGenesis;
use gn_01_validator_keys::BaseAccount;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthParams {
    #[serde_as(as = "DisplayFromStr")]
    pub max_memo_characters: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub tx_sig_limit: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub tx_size_cost_per_byte: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub sig_verify_cost_ed25519: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub sig_verify_cost_secp256k1: u64,
}

impl Default for AuthParams {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            tx_sig_limit: 7,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: 1000,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGenesis {
    pub params: AuthParams,
    #[serde(default)]
    pub accounts: Vec<BaseAccount>,
}

impl AuthGenesis {
    pub fn new(params: AuthParams, accounts: Vec<BaseAccount>) -> Self {
        Self { params, accounts }
    }
}

impl ModuleGenesis for AuthGenesis {
    const MODULE_NAME: &'static str = "auth";
}
