use crate::domain::StoreResult;

/// Ordered key-value database underneath a commit multi-store.
pub trait KvDatabase: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;
    fn set(&self, key: &[u8], value: &[u8]) -> StoreResult<()>;
    fn delete(&self, key: &[u8]) -> StoreResult<()>;
    /// Apply all writes atomically. `None` deletes the key.
    fn write_batch(&self, batch: Vec<(Vec<u8>, Option<Vec<u8>>)>) -> StoreResult<()>;
    /// All pairs whose key starts with `prefix`, in key order.
    fn prefix_scan(&self, prefix: &[u8]) -> StoreResult<Vec<(Vec<u8>, Vec<u8>)>>;
}
