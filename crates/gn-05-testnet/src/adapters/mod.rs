//! Adapters: in-process implementations of the ports.

pub mod listener;
pub mod local_starter;
pub mod memory_db;
mod status_rpc;

pub use listener::LoopbackChooser;
pub use local_starter::{LocalNodeStarter, GENESIS_STORE_KEY};
pub use memory_db::MemDb;
