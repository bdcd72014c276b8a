//! # Commit Multi-Store
//!
//! Named key-value stores over one [`KvDatabase`], committed together under
//! a single root hash.
//!
//! ## Layout in the database
//!
//! ```text
//! k:<store>/<key>  → value          (committed data)
//! s/<version>      → root hash hex  (commit info)
//! s/latest         → version
//! ```
//!
//! ## Root hash
//!
//! Each store hashes its length-prefixed `(key, value)` pairs in key order;
//! the root hashes the length-prefixed `(name, store hash)` pairs in name
//! order. Two nodes holding the same data report the same root.

use crate::domain::{StoreError, StoreResult};
use crate::ports::KvDatabase;
use parking_lot::RwLock;
use serde::Serialize;
use shared_crypto::{sha256, Hash};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, Span};

const LATEST_KEY: &[u8] = b"s/latest";
const DATA_PREFIX: &str = "k:";

type KvMap = BTreeMap<Vec<u8>, Vec<u8>>;

/// Version and root hash of a commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommitId {
    pub version: u64,
    #[serde(with = "hex_hash")]
    pub hash: Hash,
}

mod hex_hash {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(hash: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode_upper(hash))
    }
}

#[derive(Debug, Default)]
struct Working {
    stores: BTreeMap<String, KvMap>,
    last_commit: CommitId,
}

/// Multi-store committed as one unit.
pub struct CommitMultiStore {
    db: Arc<dyn KvDatabase>,
    span: Span,
    working: RwLock<Working>,
}

/// Multi-store over `db` that logs in the current span.
pub fn new_commit_multi_store(db: Arc<dyn KvDatabase>) -> CommitMultiStore {
    new_commit_multi_store_with_span(db, Span::current())
}

/// Multi-store over `db` that logs in `span`.
pub fn new_commit_multi_store_with_span(db: Arc<dyn KvDatabase>, span: Span) -> CommitMultiStore {
    CommitMultiStore {
        db,
        span,
        working: RwLock::new(Working::default()),
    }
}

impl CommitMultiStore {
    /// Register a store. Mounting an existing store is a no-op.
    pub fn mount_store(&self, name: &str) -> StoreResult<()> {
        if name.is_empty() || name.contains('/') {
            return Err(StoreError::InvalidStoreName(name.to_string()));
        }
        self.working.write().stores.entry(name.to_string()).or_default();
        Ok(())
    }

    pub fn stores(&self) -> Vec<String> {
        self.working.read().stores.keys().cloned().collect()
    }

    pub fn get(&self, store: &str, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        let working = self.working.read();
        let kv = working
            .stores
            .get(store)
            .ok_or_else(|| StoreError::UnmountedStore(store.to_string()))?;
        Ok(kv.get(key).cloned())
    }

    pub fn set(&self, store: &str, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut working = self.working.write();
        let kv = working
            .stores
            .get_mut(store)
            .ok_or_else(|| StoreError::UnmountedStore(store.to_string()))?;
        kv.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    pub fn delete(&self, store: &str, key: &[u8]) -> StoreResult<()> {
        let mut working = self.working.write();
        let kv = working
            .stores
            .get_mut(store)
            .ok_or_else(|| StoreError::UnmountedStore(store.to_string()))?;
        kv.remove(key);
        Ok(())
    }

    /// Root hash of the uncommitted working state.
    pub fn working_hash(&self) -> Hash {
        root_hash(&self.working.read().stores)
    }

    pub fn last_commit_id(&self) -> CommitId {
        self.working.read().last_commit
    }

    /// Write every store to the database and advance the version.
    pub fn commit(&self) -> StoreResult<CommitId> {
        let _entered = self.span.enter();
        let mut working = self.working.write();

        let mut batch = Vec::new();
        for (name, kv) in &working.stores {
            let prefix = data_prefix(name);
            let live: BTreeSet<Vec<u8>> = kv.keys().map(|k| data_key(&prefix, k)).collect();
            for (stale, _) in self.db.prefix_scan(&prefix)? {
                if !live.contains(&stale) {
                    batch.push((stale, None));
                }
            }
            for (key, value) in kv {
                batch.push((data_key(&prefix, key), Some(value.clone())));
            }
        }

        let commit = CommitId {
            version: working.last_commit.version + 1,
            hash: root_hash(&working.stores),
        };
        batch.push((
            commit_info_key(commit.version),
            Some(hex::encode(commit.hash).into_bytes()),
        ));
        batch.push((
            LATEST_KEY.to_vec(),
            Some(commit.version.to_string().into_bytes()),
        ));
        let writes = batch.len();
        self.db.write_batch(batch)?;

        working.last_commit = commit;
        debug!(
            version = commit.version,
            writes,
            hash = %hex::encode_upper(commit.hash),
            "store committed"
        );
        Ok(commit)
    }

    /// Load the latest committed version from the database.
    ///
    /// An empty database loads as version 0 with no stores.
    pub fn load_latest_version(&self) -> StoreResult<CommitId> {
        let _entered = self.span.enter();
        let Some(raw) = self.db.get(LATEST_KEY)? else {
            return Ok(CommitId::default());
        };
        let version: u64 = std::str::from_utf8(&raw)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| corrupt(LATEST_KEY))?;

        let info_key = commit_info_key(version);
        let expected = self
            .db
            .get(&info_key)?
            .and_then(|raw| hex::decode(raw).ok())
            .and_then(|bytes| Hash::try_from(bytes.as_slice()).ok())
            .ok_or_else(|| corrupt(&info_key))?;

        let mut stores: BTreeMap<String, KvMap> = BTreeMap::new();
        for (key, value) in self.db.prefix_scan(DATA_PREFIX.as_bytes())? {
            let (name, inner) = split_data_key(&key).ok_or_else(|| corrupt(&key))?;
            stores.entry(name).or_default().insert(inner, value);
        }

        if root_hash(&stores) != expected {
            return Err(corrupt(&info_key));
        }

        let commit = CommitId {
            version,
            hash: expected,
        };
        let mut working = self.working.write();
        for name in working.stores.keys() {
            stores.entry(name.clone()).or_default();
        }
        working.stores = stores;
        working.last_commit = commit;
        info!(version, stores = working.stores.len(), "store loaded");
        Ok(commit)
    }
}

impl fmt::Debug for CommitMultiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let working = self.working.read();
        f.debug_struct("CommitMultiStore")
            .field("stores", &working.stores.keys().collect::<Vec<_>>())
            .field("last_commit", &working.last_commit)
            .finish_non_exhaustive()
    }
}

fn data_prefix(store: &str) -> Vec<u8> {
    format!("{DATA_PREFIX}{store}/").into_bytes()
}

fn data_key(prefix: &[u8], key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + key.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(key);
    out
}

fn split_data_key(key: &[u8]) -> Option<(String, Vec<u8>)> {
    let rest = key.strip_prefix(DATA_PREFIX.as_bytes())?;
    let slash = rest.iter().position(|b| *b == b'/')?;
    let name = std::str::from_utf8(&rest[..slash]).ok()?.to_string();
    Some((name, rest[slash + 1..].to_vec()))
}

fn commit_info_key(version: u64) -> Vec<u8> {
    format!("s/{version}").into_bytes()
}

fn corrupt(key: &[u8]) -> StoreError {
    StoreError::Corrupt {
        key: String::from_utf8_lossy(key).into_owned(),
    }
}

fn push_prefixed(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    buf.extend_from_slice(bytes);
}

fn store_hash(kv: &KvMap) -> Hash {
    let mut buf = Vec::new();
    for (key, value) in kv {
        push_prefixed(&mut buf, key);
        push_prefixed(&mut buf, value);
    }
    sha256(&buf)
}

fn root_hash(stores: &BTreeMap<String, KvMap>) -> Hash {
    let mut buf = Vec::new();
    for (name, kv) in stores {
        push_prefixed(&mut buf, name.as_bytes());
        buf.extend_from_slice(&store_hash(kv));
    }
    sha256(&buf)
}
