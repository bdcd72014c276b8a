//! Accumulated genesis state and the sealed document.

use super::errors::{GenesisError, GenesisResult};
use gn_02_module_state::{ConsensusGenesis, GenutilGenesis, ModuleStateMap};
use gn_03_tx_signing::{tx_to_json, Tx};
use serde::Serialize;
use serde_json::Value;
use shared_crypto::{sha256, Hash};
use tracing::info;

/// Genesis state between steps.
#[derive(Clone, Debug, Default)]
pub struct GenesisSnapshot {
    pub(crate) chain_id: Option<String>,
    pub(crate) consensus: Option<ConsensusGenesis>,
    pub(crate) app_state: ModuleStateMap,
    pub(crate) gen_txs: Vec<Tx>,
}

#[derive(Serialize)]
struct OuterDocument<'a> {
    chain_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    consensus: Option<&'a ConsensusGenesis>,
    app_state: &'a ModuleStateMap,
}

impl GenesisSnapshot {
    pub fn chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref()
    }

    pub fn consensus(&self) -> Option<&ConsensusGenesis> {
        self.consensus.as_ref()
    }

    pub fn app_state(&self) -> &ModuleStateMap {
        &self.app_state
    }

    pub fn gen_txs(&self) -> &[Tx] {
        &self.gen_txs
    }

    /// Fold the signed transactions into `genutil` and encode the document.
    ///
    /// The snapshot is left untouched, so sealing twice yields the same bytes.
    /// Keys are sorted at every level and the output is compact.
    pub fn seal(&self) -> GenesisResult<GenesisDocument> {
        let chain_id = self.chain_id.as_deref().ok_or(GenesisError::MissingChainId)?;

        let gen_txs = self
            .gen_txs
            .iter()
            .map(tx_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map_err(GenesisError::TxEncode)?;
        let app_state = self
            .app_state
            .clone()
            .with(&GenutilGenesis::new(gen_txs))?;

        // Round-trip through `Value` so every object is re-keyed in sorted order.
        let value = serde_json::to_value(OuterDocument {
            chain_id,
            consensus: self.consensus.as_ref(),
            app_state: &app_state,
        })?;
        let bytes = serde_json::to_vec(&value)?;

        let document = GenesisDocument {
            chain_id: chain_id.to_string(),
            bytes,
        };
        info!(
            chain_id,
            bytes = document.bytes.len(),
            gen_txs = self.gen_txs.len(),
            hash = %hex::encode(document.hash()),
            "genesis sealed"
        );
        Ok(document)
    }
}

/// A sealed genesis document: the canonical bytes every node starts from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisDocument {
    chain_id: String,
    bytes: Vec<u8>,
}

impl GenesisDocument {
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// SHA-256 of the canonical bytes.
    pub fn hash(&self) -> Hash {
        sha256(&self.bytes)
    }

    /// Parsed view of the document.
    pub fn to_value(&self) -> GenesisResult<Value> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}
