//! # gn-05-testnet
//!
//! Starts a small in-process network from a sealed genesis document.
//!
//! ## Architecture
//!
//! ```text
//! start_network(n, factory)
//!        │  shared RpcSlot, peers of earlier nodes
//!        ↓
//! NodeStarter::start ──→ <root>/config/genesis.json ──→ CommitMultiStore
//!        │                                              (app_state loaded)
//!        ↓
//! P2P listener ── RPC listener (one node per network) ──→ RunningNode
//! ```
//!
//! ## Failure classes
//!
//! - [`StarterError::RpcInUse`]: a second node asked for the RPC listener.
//! - [`StarterError::AddressExhausted`]: the address chooser never offered
//!   a free address within `StarterConfig::max_addr_retries` attempts.
//! - [`StarterError::Startup`]: anything else, with the cause attached.
//!
//! Nodes only bind listeners, answer `/status` on the RPC listener and hold
//! their store. They do not produce blocks.

pub mod adapters;
pub mod domain;
pub mod network;
pub mod node;
pub mod ports;
pub mod store;

pub use adapters::{LocalNodeStarter, LoopbackChooser, MemDb, GENESIS_STORE_KEY};
pub use domain::*;
pub use network::{start_network, Network};
pub use node::RunningNode;
pub use ports::{KvDatabase, NodeStarter, TcpAddrChooser};
pub use store::{
    new_commit_multi_store, new_commit_multi_store_with_span, CommitId, CommitMultiStore,
};
