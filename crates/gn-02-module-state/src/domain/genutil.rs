//! Genutil module state: the signed genesis transactions.

use super::state_map::ModuleGenesis;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenutilGenesis {
    /// Each entry is one JSON-encoded signed transaction.
    #[serde(default)]
    pub gen_txs: Vec<Value>,
}

impl GenutilGenesis {
    pub fn new(gen_txs: Vec<Value>) -> Self {
        Self { gen_txs }
    }
}

impl ModuleGenesis for GenutilGenesis {
    const MODULE_NAME: &'static str = "genutil";
}
