use crate::domain::{NodeConfig, RpcSlot, StarterResult};
use crate::node::RunningNode;
use async_trait::async_trait;

/// Starts one node of a network.
///
/// `index` is the node's position in the network. `rpc` is shared by every
/// node of the network; a starter that serves RPC must claim it first.
#[async_trait]
pub trait NodeStarter: Send {
    fn config(&self) -> &NodeConfig;

    /// Add peers to dial at start, on top of the configured ones.
    fn add_peers(&mut self, peers: &[String]);

    async fn start(self: Box<Self>, index: usize, rpc: RpcSlot) -> StarterResult<RunningNode>;
}

/// Source of candidate listen addresses (`host:port`, optionally `tcp://`).
///
/// Called again after every failed bind, so a chooser that can return a
/// taken address is fine as long as it eventually offers a free one.
pub trait TcpAddrChooser: Send + Sync {
    fn choose(&self) -> String;
}

impl<F> TcpAddrChooser for F
where
    F: Fn() -> String + Send + Sync,
{
    fn choose(&self) -> String {
        self()
    }
}
