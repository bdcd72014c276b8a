//! Network starter domain types.

pub mod config;
pub mod errors;
pub mod rpc_slot;

pub use config::{DbBackend, NodeConfig, StarterConfig};
pub use errors::{
    NetworkStartError, NodeError, StarterError, StarterResult, StoreError, StoreResult,
};
pub use rpc_slot::RpcSlot;
