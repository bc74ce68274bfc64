//! # Dependency wiring
//!
//! The only place that knows about `dk-infra` and `dk-platform` at once.
//! It builds the concrete adapters and hands them out as port trait objects;
//! it makes no decisions beyond "file-backed or ephemeral storage".

use std::sync::Arc;

use tracing::debug;

use dk_core::ports::{
    ClipboardWriterPort, ClockPort, ImageFilePort, KeyValueStoragePort, QrImagePort,
};
use dk_infra::{FileKeyValueStorage, ImageFileReader, InMemoryKeyValueStorage, SystemClock};
use dk_platform::{ReqwestQrImageClient, SystemClipboardWriter};

use super::config::Settings;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while building adapters.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Storage initialization failed: {0}")]
    StorageInit(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Every port the use cases need.
#[derive(Clone)]
pub struct AppDeps {
    pub storage: Arc<dyn KeyValueStoragePort>,
    pub clock: Arc<dyn ClockPort>,
    pub clipboard: Arc<dyn ClipboardWriterPort>,
    pub qr_client: Arc<dyn QrImagePort>,
    pub image_reader: Arc<dyn ImageFilePort>,
}

/// Builds the adapters for `settings`.
///
/// With `ephemeral` the history lives in memory and nothing is written to the
/// data directory.
pub fn wire_dependencies(settings: &Settings, ephemeral: bool) -> WiringResult<AppDeps> {
    let storage: Arc<dyn KeyValueStoragePort> = if ephemeral {
        debug!("Using in-memory storage");
        Arc::new(InMemoryKeyValueStorage::new())
    } else {
        let dir = &settings.paths.storage_dir;
        std::fs::create_dir_all(dir).map_err(|e| {
            WiringError::StorageInit(format!(
                "Failed to create storage directory {}: {e}",
                dir.display()
            ))
        })?;
        debug!(dir = %dir.display(), "Using file storage");
        Arc::new(FileKeyValueStorage::new(dir.clone()))
    };

    let qr_client = ReqwestQrImageClient::new()
        .map_err(|e| WiringError::HttpClientInit(format!("{e:#}")))?;

    Ok(AppDeps {
        storage,
        clock: Arc::new(SystemClock),
        clipboard: Arc::new(SystemClipboardWriter::new()),
        qr_client: Arc::new(qr_client),
        image_reader: Arc::new(ImageFileReader),
    })
}
