//! Network starter and store errors.

use crate::network::Network;
use std::path::PathBuf;
use thiserror::Error;

/// Commit multi-store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write named a store that was never mounted.
    #[error("Store not mounted: {0}")]
    UnmountedStore(String),

    /// Store names are non-empty and contain no `/`.
    #[error("Invalid store name {0:?}")]
    InvalidStoreName(String),

    /// A persisted record could not be decoded.
    #[error("Corrupt store record at {key}")]
    Corrupt { key: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a single node failed to come up.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid listen address {0:?}")]
    InvalidAddress(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Genesis chain id {found:?} does not match node chain id {expected:?}")]
    ChainIdMismatch { expected: String, found: String },

    #[error("Genesis file has no app_state object")]
    MissingAppState,

    #[error("Database backend {0} is not available in-process")]
    UnsupportedBackend(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while starting one node.
#[derive(Debug, Error)]
pub enum StarterError {
    /// Another node of the same network already holds the RPC listener.
    #[error("Node {node} requested the RPC listener but node {holder} already holds it")]
    RpcInUse { node: usize, holder: usize },

    /// Every address offered by the chooser was taken.
    #[error("Node {node} found no free address after {attempts} attempts (last tried {last})")]
    AddressExhausted {
        node: usize,
        attempts: usize,
        last: String,
    },

    /// Any other startup failure, with its cause.
    #[error("Node {node} failed to start: {source}")]
    Startup {
        node: usize,
        #[source]
        source: NodeError,
    },
}

impl StarterError {
    pub fn startup(node: usize, source: impl Into<NodeError>) -> Self {
        StarterError::Startup {
            node,
            source: source.into(),
        }
    }

    pub fn is_rpc_in_use(&self) -> bool {
        matches!(self, StarterError::RpcInUse { .. })
    }
}

pub type StarterResult<T> = Result<T, StarterError>;

/// Some nodes of a network failed to start.
///
/// The nodes that did start keep running and are handed back in `network`;
/// the caller owns stopping them.
#[derive(Debug, Error)]
#[error("{} of {} nodes failed to start", .failures.len(), .failures.len() + .network.len())]
pub struct NetworkStartError {
    pub network: Network,
    pub failures: Vec<StarterError>,
}

impl NetworkStartError {
    /// Whether any failure was an RPC listener conflict.
    pub fn rpc_in_use(&self) -> bool {
        self.failures.iter().any(StarterError::is_rpc_in_use)
    }
}
