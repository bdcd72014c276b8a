//! Handle to a started node.

use crate::domain::{NodeConfig, RpcSlot};
use crate::store::{CommitId, CommitMultiStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A node whose listeners are bound and whose store holds the genesis state.
#[derive(Debug)]
pub struct RunningNode {
    pub(crate) index: usize,
    pub(crate) config: NodeConfig,
    pub(crate) p2p_addr: SocketAddr,
    pub(crate) rpc_addr: Option<SocketAddr>,
    pub(crate) store: Arc<CommitMultiStore>,
    pub(crate) shutdown: watch::Sender<bool>,
    pub(crate) tasks: Vec<JoinHandle<()>>,
    pub(crate) rpc_slot: RpcSlot,
}

impl RunningNode {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Configuration with the listen addresses actually bound.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn p2p_addr(&self) -> SocketAddr {
        self.p2p_addr
    }

    pub fn rpc_addr(&self) -> Option<SocketAddr> {
        self.rpc_addr
    }

    pub fn store(&self) -> &Arc<CommitMultiStore> {
        &self.store
    }

    /// Commit id of the genesis state, or of the latest state on restart.
    pub fn app_hash(&self) -> CommitId {
        self.store.last_commit_id()
    }

    /// Signal every task of this node to stop and free the RPC slot.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
        self.rpc_slot.release(self.index);
        info!(node = self.index, "stop requested");
    }

    /// Wait for every task of this node to finish.
    pub async fn wait(self) {
        for task in self.tasks {
            if let Err(e) = task.await {
                warn!(node = self.index, error = %e, "node task ended abnormally");
            }
        }
    }
}
