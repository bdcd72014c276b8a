//! # Node Configuration
//!
//! Per-node settings handed to a starter. Listen addresses left unset are
//! picked by the starter's address chooser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Database backend selector, named as the node expects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbBackend {
    #[default]
    MemDb,
    GoLevelDb,
}

impl fmt::Display for DbBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbBackend::MemDb => f.write_str("memdb"),
            DbBackend::GoLevelDb => f.write_str("goleveldb"),
        }
    }
}

/// Configuration of one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Chain id the node expects to find in its genesis file.
    pub chain_id: String,
    /// Home directory; genesis goes to `<root>/config/genesis.json`.
    pub root_dir: PathBuf,
    /// P2P listen address, `host:port` with an optional `tcp://` scheme.
    pub p2p_listen: Option<String>,
    /// RPC listen address. Only used when `rpc_enabled` is set.
    pub rpc_listen: Option<String>,
    /// Whether this node serves the status RPC.
    pub rpc_enabled: bool,
    /// P2P addresses of peers to dial at start.
    pub persistent_peers: Vec<String>,
    pub db_backend: DbBackend,
}

impl NodeConfig {
    pub fn new(chain_id: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            chain_id: chain_id.into(),
            root_dir: root_dir.into(),
            p2p_listen: None,
            rpc_listen: None,
            rpc_enabled: false,
            persistent_peers: Vec::new(),
            db_backend: DbBackend::default(),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root_dir.join("config")
    }

    pub fn genesis_file(&self) -> PathBuf {
        self.config_dir().join("genesis.json")
    }

    pub fn node_config_file(&self) -> PathBuf {
        self.config_dir().join("node.json")
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }
}

/// Starter behaviour shared by every node of a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarterConfig {
    /// Attempts per listener before giving up with `AddressExhausted`.
    pub max_addr_retries: usize,
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            max_addr_retries: 10,
        }
    }
}

/// Strip an optional `tcp://` scheme.
pub(crate) fn strip_scheme(addr: &str) -> &str {
    addr.strip_prefix("tcp://").unwrap_or(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_path() {
        let config = NodeConfig::new("c", "/tmp/node0");
        assert_eq!(
            config.genesis_file(),
            PathBuf::from("/tmp/node0/config/genesis.json")
        );
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(DbBackend::MemDb.to_string(), "memdb");
        assert_eq!(
            serde_json::to_value(DbBackend::GoLevelDb).unwrap(),
            "goleveldb"
        );
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("tcp://127.0.0.1:26656"), "127.0.0.1:26656");
        assert_eq!(strip_scheme("127.0.0.1:0"), "127.0.0.1:0");
    }
}
