//! # Network
//!
//! Starts `n` nodes in order. Each node is told the P2P addresses of the
//! nodes started before it, and all of them share one [`RpcSlot`].
//!
//! A node that fails does not stop the others. If any node failed, the
//! running ones come back inside [`NetworkStartError`].

use crate::domain::{NetworkStartError, RpcSlot};
use crate::node::RunningNode;
use crate::ports::NodeStarter;
use crate::store::CommitId;
use tracing::{info, warn};

/// Running nodes of one network.
#[derive(Debug, Default)]
pub struct Network {
    nodes: Vec<RunningNode>,
}

impl Network {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[RunningNode] {
        &self.nodes
    }

    /// Node with the given start index, if it is running.
    pub fn node(&self, index: usize) -> Option<&RunningNode> {
        self.nodes.iter().find(|n| n.index() == index)
    }

    /// The node serving RPC, if any.
    pub fn rpc_node(&self) -> Option<&RunningNode> {
        self.nodes.iter().find(|n| n.rpc_addr().is_some())
    }

    /// Genesis commit of every node, in start order.
    pub fn app_hashes(&self) -> Vec<CommitId> {
        self.nodes.iter().map(RunningNode::app_hash).collect()
    }

    pub fn stop(&self) {
        for node in &self.nodes {
            node.stop();
        }
        info!(nodes = self.nodes.len(), "network stop requested");
    }

    pub async fn wait(self) {
        for node in self.nodes {
            node.wait().await;
        }
    }
}

/// Start `n` nodes built by `factory`.
pub async fn start_network<F>(n: usize, mut factory: F) -> Result<Network, NetworkStartError>
where
    F: FnMut(usize) -> Box<dyn NodeStarter>,
{
    let rpc = RpcSlot::new();
    let mut nodes: Vec<RunningNode> = Vec::with_capacity(n);
    let mut failures = Vec::new();

    for index in 0..n {
        let mut starter = factory(index);
        let peers: Vec<String> = nodes
            .iter()
            .filter_map(|node| node.config().p2p_listen.clone())
            .collect();
        starter.add_peers(&peers);

        match starter.start(index, rpc.clone()).await {
            Ok(node) => nodes.push(node),
            Err(e) => {
                warn!(node = index, error = %e, "node failed to start");
                failures.push(e);
            }
        }
    }

    let network = Network { nodes };
    if failures.is_empty() {
        info!(nodes = network.len(), "network started");
        Ok(network)
    } else {
        Err(NetworkStartError { network, failures })
    }
}
