//! Ports: what the starter needs from storage and what callers implement to
//! start nodes.

pub mod database;
pub mod starter;

pub use database::KvDatabase;
pub use starter::{NodeStarter, TcpAddrChooser};
