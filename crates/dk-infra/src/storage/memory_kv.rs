use anyhow::{anyhow, Result};
use dk_core::ports::KeyValueStoragePort;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local storage, used by tests and `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `key = value`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.into(), value.into());
        }
        storage
    }
}

impl KeyValueStoragePort for InMemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow!("in-memory storage lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("in-memory storage lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("in-memory storage lock poisoned"))?;
        values.remove(key);
        Ok(())
    }
}
