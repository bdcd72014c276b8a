//! Single RPC listener per network.

use super::errors::{StarterError, StarterResult};
use parking_lot::Mutex;
use std::sync::Arc;

/// Network-wide claim on the RPC listener.
///
/// At most one node of a network may serve RPC. The first node to claim
/// the slot holds it until it releases it; every later claim fails with
/// [`StarterError::RpcInUse`].
#[derive(Clone, Debug, Default)]
pub struct RpcSlot {
    holder: Arc<Mutex<Option<usize>>>,
}

impl RpcSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self, node: usize) -> StarterResult<()> {
        let mut holder = self.holder.lock();
        match *holder {
            Some(current) if current != node => Err(StarterError::RpcInUse {
                node,
                holder: current,
            }),
            _ => {
                *holder = Some(node);
                Ok(())
            }
        }
    }

    /// Release the slot if `node` holds it.
    pub fn release(&self, node: usize) {
        let mut holder = self.holder.lock();
        if *holder == Some(node) {
            *holder = None;
        }
    }

    pub fn holder(&self) -> Option<usize> {
        *self.holder.lock()
    }
}
