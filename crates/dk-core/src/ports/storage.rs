use anyhow::Result;

/// Durable string key-value storage, the equivalent of a browser's local
/// storage.
///
/// Reads and writes are treated as atomic and immediately consistent. There
/// are no guarantees across keys.
pub trait KeyValueStoragePort: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
