//! # Local Node Starter
//!
//! Starts a node inside the current process.
//!
//! ## Start sequence
//!
//! 1. Claim the network's RPC slot if this node serves RPC
//! 2. Write `<root>/config/genesis.json` and `<root>/config/node.json`
//! 3. Read the genesis back and check its `chain_id`
//! 4. Open the commit multi-store and load `app_state` into it
//! 5. Bind the P2P listener, then the RPC listener, with bounded retry
//! 6. Spawn the listener tasks and dial persistent peers
//!
//! A failure after step 1 releases the RPC slot again.

use super::listener::{bind_with_retry, stopped, LoopbackChooser};
use super::memory_db::MemDb;
use super::status_rpc::{self, StatusState};
use crate::domain::{
    DbBackend, NodeConfig, NodeError, RpcSlot, StarterConfig, StarterError, StarterResult,
};
use crate::node::RunningNode;
use crate::ports::{KvDatabase, NodeStarter, TcpAddrChooser};
use crate::store::{new_commit_multi_store_with_span, CommitMultiStore};
use async_trait::async_trait;
use serde_json::Value;
use shared_crypto::Ed25519PublicKey;
use std::path::Path;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument, Span};

/// Store key under which each module's genesis blob is loaded.
pub const GENESIS_STORE_KEY: &[u8] = b"genesis";

/// Starts a node in-process from genesis bytes.
pub struct LocalNodeStarter {
    config: NodeConfig,
    validator: Ed25519PublicKey,
    genesis: Arc<[u8]>,
    chooser: Arc<dyn TcpAddrChooser>,
    starter_config: StarterConfig,
    db: Option<Arc<dyn KvDatabase>>,
}

impl LocalNodeStarter {
    pub fn new(
        config: NodeConfig,
        validator: Ed25519PublicKey,
        genesis: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            config,
            validator,
            genesis: genesis.into(),
            chooser: Arc::new(LoopbackChooser),
            starter_config: StarterConfig::default(),
            db: None,
        }
    }

    /// Serve the status RPC from this node.
    pub fn rpc_listen(mut self) -> Self {
        self.config.rpc_enabled = true;
        self
    }

    pub fn tcp_addr_chooser(mut self, chooser: impl TcpAddrChooser + 'static) -> Self {
        self.chooser = Arc::new(chooser);
        self
    }

    pub fn starter_config(mut self, starter_config: StarterConfig) -> Self {
        self.starter_config = starter_config;
        self
    }

    /// Use `db` instead of a fresh in-memory database.
    ///
    /// Required for backends other than `memdb`.
    pub fn database(mut self, db: Arc<dyn KvDatabase>) -> Self {
        self.db = Some(db);
        self
    }

    async fn boot(self, index: usize, rpc: RpcSlot) -> StarterResult<RunningNode> {
        let startup = |e: NodeError| StarterError::startup(index, e);

        write_node_files(&self.config, &self.genesis)
            .await
            .map_err(startup)?;
        let app_state = read_genesis(&self.config).await.map_err(startup)?;

        let db = match (&self.db, self.config.db_backend) {
            (Some(db), _) => Arc::clone(db),
            (None, DbBackend::MemDb) => Arc::new(MemDb::new()) as Arc<dyn KvDatabase>,
            (None, backend) => {
                return Err(startup(NodeError::UnsupportedBackend(backend.to_string())));
            }
        };
        let store = Arc::new(new_commit_multi_store_with_span(db, Span::current()));
        init_store(&store, &app_state).map_err(startup)?;

        let max_attempts = self.starter_config.max_addr_retries;
        let p2p = bind_with_retry(
            index,
            self.config.p2p_listen.as_deref(),
            self.chooser.as_ref(),
            max_attempts,
        )
        .await?;
        let rpc_listener = if self.config.rpc_enabled {
            Some(
                bind_with_retry(
                    index,
                    self.config.rpc_listen.as_deref(),
                    self.chooser.as_ref(),
                    max_attempts,
                )
                .await?,
            )
        } else {
            None
        };

        let p2p_addr = p2p.local_addr().map_err(|source| {
            startup(NodeError::Bind {
                addr: "p2p".to_string(),
                source,
            })
        })?;
        let rpc_addr = match &rpc_listener {
            Some(listener) => Some(listener.local_addr().map_err(|source| {
                startup(NodeError::Bind {
                    addr: "rpc".to_string(),
                    source,
                })
            })?),
            None => None,
        };

        let mut config = self.config;
        config.p2p_listen = Some(format!("tcp://{p2p_addr}"));
        config.rpc_listen = rpc_addr.map(|addr| format!("tcp://{addr}"));

        let (shutdown, shutdown_rx) = watch::channel(false);
        let mut tasks = vec![spawn_p2p(p2p, shutdown_rx.clone())];
        if let Some(listener) = rpc_listener {
            let state = Arc::new(StatusState {
                node: index,
                chain_id: config.chain_id.clone(),
                p2p_listen: p2p_addr.to_string(),
                validator: self.validator,
                store: Arc::clone(&store),
            });
            tasks.push(status_rpc::spawn(
                listener,
                status_rpc::router(state),
                shutdown_rx,
            ));
        }
        dial_peers(&config.persistent_peers).await;

        info!(
            chain_id = %config.chain_id,
            p2p = %p2p_addr,
            rpc = ?rpc_addr,
            app_hash = %hex::encode_upper(store.last_commit_id().hash),
            "node started"
        );
        Ok(RunningNode {
            index,
            config,
            p2p_addr,
            rpc_addr,
            store,
            shutdown,
            tasks,
            rpc_slot: rpc,
        })
    }
}

#[async_trait]
impl NodeStarter for LocalNodeStarter {
    fn config(&self) -> &NodeConfig {
        &self.config
    }

    fn add_peers(&mut self, peers: &[String]) {
        self.config.persistent_peers.extend_from_slice(peers);
    }

    async fn start(self: Box<Self>, index: usize, rpc: RpcSlot) -> StarterResult<RunningNode> {
        let span = info_span!("node", index);
        async move {
            let serves_rpc = self.config.rpc_enabled;
            if serves_rpc {
                rpc.claim(index)?;
            }
            let result = self.boot(index, rpc.clone()).await;
            if result.is_err() && serves_rpc {
                rpc.release(index);
            }
            result
        }
        .instrument(span)
        .await
    }
}

async fn write_node_files(config: &NodeConfig, genesis: &[u8]) -> Result<(), NodeError> {
    let dir = config.config_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| io_error(&dir, source))?;

    let genesis_file = config.genesis_file();
    tokio::fs::write(&genesis_file, genesis)
        .await
        .map_err(|source| io_error(&genesis_file, source))?;

    let node_file = config.node_config_file();
    let node_json = serde_json::to_vec_pretty(config)?;
    tokio::fs::write(&node_file, node_json)
        .await
        .map_err(|source| io_error(&node_file, source))?;

    debug!(path = %genesis_file.display(), bytes = genesis.len(), "genesis written");
    Ok(())
}

/// Parse the genesis file on disk and return its `app_state`.
async fn read_genesis(config: &NodeConfig) -> Result<serde_json::Map<String, Value>, NodeError> {
    let path = config.genesis_file();
    let raw = tokio::fs::read(&path)
        .await
        .map_err(|source| io_error(&path, source))?;
    let doc: Value = serde_json::from_slice(&raw)?;

    let found = doc
        .get("chain_id")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if found != config.chain_id {
        return Err(NodeError::ChainIdMismatch {
            expected: config.chain_id.clone(),
            found: found.to_string(),
        });
    }

    match doc.get("app_state") {
        Some(Value::Object(app_state)) => Ok(app_state.clone()),
        _ => Err(NodeError::MissingAppState),
    }
}

/// Load each module's genesis blob into its own store, unless a committed
/// version already exists.
fn init_store(
    store: &CommitMultiStore,
    app_state: &serde_json::Map<String, Value>,
) -> Result<(), NodeError> {
    let loaded = store.load_latest_version()?;
    if loaded.version > 0 {
        info!(version = loaded.version, "resuming from committed state");
        return Ok(());
    }

    for (module, state) in app_state {
        store.mount_store(module)?;
        store.set(module, GENESIS_STORE_KEY, &serde_json::to_vec(state)?)?;
    }
    let commit = store.commit()?;
    debug!(modules = app_state.len(), version = commit.version, "genesis state loaded");
    Ok(())
}

fn spawn_p2p(listener: TcpListener, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    let span = Span::current();
    tokio::spawn(
        async move {
            let stop = stopped(shutdown);
            tokio::pin!(stop);
            loop {
                tokio::select! {
                    _ = &mut stop => break,
                    accepted = listener.accept() => match accepted {
                        Ok((_stream, peer)) => debug!(%peer, "peer connected"),
                        Err(e) => warn!(error = %e, "p2p accept failed"),
                    },
                }
            }
            debug!("p2p listener closed");
        }
        .instrument(span),
    )
}

/// Dial each peer once. Unreachable peers are logged, not fatal.
async fn dial_peers(peers: &[String]) {
    for peer in peers {
        let addr = crate::domain::config::strip_scheme(peer);
        match TcpStream::connect(addr).await {
            Ok(_) => debug!(peer = %addr, "dialed peer"),
            Err(e) => warn!(peer = %addr, error = %e, "peer unreachable"),
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> NodeError {
    NodeError::Io {
        path: path.to_path_buf(),
        source,
    }
}
