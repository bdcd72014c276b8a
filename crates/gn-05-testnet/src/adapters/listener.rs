//! TCP listener binding with bounded retry.

use crate::domain::config::strip_scheme;
use crate::domain::{NodeError, StarterError, StarterResult};
use crate::ports::TcpAddrChooser;
use std::io::ErrorKind;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Chooser that lets the OS pick a free loopback port.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoopbackChooser;

impl TcpAddrChooser for LoopbackChooser {
    fn choose(&self) -> String {
        "127.0.0.1:0".to_string()
    }
}

/// Bind `explicit` once, or up to `max_attempts` addresses from `chooser`.
///
/// Only "address in use" is retried. Any other bind failure aborts.
pub(crate) async fn bind_with_retry(
    node: usize,
    explicit: Option<&str>,
    chooser: &dyn TcpAddrChooser,
    max_attempts: usize,
) -> StarterResult<TcpListener> {
    let attempts = if explicit.is_some() {
        1
    } else {
        max_attempts.max(1)
    };

    let mut last = String::new();
    for attempt in 1..=attempts {
        let candidate = match explicit {
            Some(addr) => addr.to_string(),
            None => chooser.choose(),
        };
        let addr: SocketAddr = strip_scheme(&candidate)
            .parse()
            .map_err(|_| StarterError::startup(node, NodeError::InvalidAddress(candidate.clone())))?;

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                debug!(node, attempt, addr = %candidate, "listener bound");
                return Ok(listener);
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                warn!(node, attempt, addr = %candidate, "listen address in use, retrying");
                last = candidate;
            }
            Err(source) => {
                return Err(StarterError::startup(
                    node,
                    NodeError::Bind {
                        addr: candidate,
                        source,
                    },
                ));
            }
        }
    }

    Err(StarterError::AddressExhausted {
        node,
        attempts,
        last,
    })
}

/// Resolves once `true` is sent on `rx` or the sender is dropped.
pub(crate) async fn stopped(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}
