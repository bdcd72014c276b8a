//! Status endpoint served by the node holding the RPC listener.

use super::listener::stopped;
use crate::store::CommitMultiStore;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use shared_crypto::Ed25519PublicKey;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn, Instrument, Span};

#[derive(Debug)]
pub(crate) struct StatusState {
    pub node: usize,
    pub chain_id: String,
    pub p2p_listen: String,
    pub validator: Ed25519PublicKey,
    pub store: Arc<CommitMultiStore>,
}

pub(crate) fn router(state: Arc<StatusState>) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/health", get(health))
        .with_state(state)
}

async fn status(State(state): State<Arc<StatusState>>) -> Json<Value> {
    let commit = state.store.last_commit_id();
    Json(json!({
        "node_info": {
            "network": state.chain_id,
            "moniker": format!("node-{}", state.node),
            "listen_addr": state.p2p_listen,
        },
        "sync_info": {
            "latest_block_height": "0",
            "latest_app_hash": hex::encode_upper(commit.hash),
            "catching_up": false,
        },
        "validator_info": {
            "address": hex::encode_upper(state.validator.address()),
        },
    }))
}

async fn health() -> Json<Value> {
    Json(json!({}))
}

/// Serve `router` on `listener` until `shutdown` fires.
pub(crate) fn spawn(
    listener: TcpListener,
    router: Router,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let span = Span::current();
    tokio::spawn(
        async move {
            if let Ok(addr) = listener.local_addr() {
                info!(%addr, "status RPC listening");
            }
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(stopped(shutdown))
                .await
            {
                warn!(error = %e, "status RPC stopped with error");
            }
        }
        .instrument(span),
    )
}
