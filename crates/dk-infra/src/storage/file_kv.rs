use anyhow::{ensure, Context, Result};
use dk_core::ports::KeyValueStoragePort;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value storage that keeps each key in its own `<dir>/<key>.json` file.
///
/// Writes go through a temporary sibling file and a rename, so a reader sees
/// either the previous value or the new one, never a partial write.
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Creates a storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are plain names: anything that could escape the storage
    /// directory is rejected.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        ensure!(!key.is_empty(), "storage key must not be empty");
        ensure!(
            key.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
                && !key.starts_with('.'),
            "invalid storage key: {key:?}"
        );
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create storage dir failed: {}", self.dir.display()))
    }

    fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // Unique per write so concurrent writers never share a temp file.
        let tmp_path = path.with_extension(format!(
            "json.{}-{}.tmp",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp_path, content)
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        if let Err(err) = fs::rename(&tmp_path, path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                debug!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp value");
            }
            return Err(err).with_context(|| {
                format!(
                    "rename temp value to target failed: {} -> {}",
                    tmp_path.display(),
                    path.display()
                )
            });
        }

        Ok(())
    }
}

impl KeyValueStoragePort for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("read value failed: {}", path.display()))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.atomic_write(&path, value)?;
        debug!(key, bytes = value.len(), path = %path.display(), "value stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove value failed: {}", path.display()))
            }
        }
    }
}
