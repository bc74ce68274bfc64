//! Port fakes for command tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dk_app::AppPaths;
use dk_core::error::ToolResult;
use dk_core::ports::{ClipboardWriterPort, ClockPort, QrImagePort};
use dk_core::qr::{ErrorCorrection, DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE};
use dk_core::ToolError;
use dk_infra::{ImageFileReader, InMemoryKeyValueStorage};
use std::path::PathBuf;
use url::Url;

use super::AppContext;
use crate::bootstrap::{AppDeps, Settings};

/// 2023-11-14T22:13:20Z
pub const TEST_NOW_MS: i64 = 1_700_000_000_000;

struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        TEST_NOW_MS
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    written: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl ClipboardWriterPort for FakeClipboard {
    fn write_text(&self, text: &str) -> ToolResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ToolError::external("clipboard unavailable"));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeQrClient {
    fail: AtomicBool,
}

#[async_trait]
impl QrImagePort for FakeQrClient {
    async fn fetch(&self, _url: &Url) -> ToolResult<Vec<u8>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ToolError::external("503 Service Unavailable"));
        }
        Ok(b"\x89PNG\r\n\x1a\n".to_vec())
    }
}

/// Handles on the fakes behind a test context.
pub struct Fakes {
    clipboard: Arc<FakeClipboard>,
    qr: Arc<FakeQrClient>,
}

impl Fakes {
    pub fn clipboard_contents(&self) -> Vec<String> {
        self.clipboard.written.lock().unwrap().clone()
    }

    pub fn fail_clipboard(&self) {
        self.clipboard.fail.store(true, Ordering::SeqCst);
    }

    pub fn fail_qr(&self) {
        self.qr.fail.store(true, Ordering::SeqCst);
    }
}

pub fn context() -> (AppContext, Fakes) {
    let clipboard = Arc::new(FakeClipboard::default());
    let qr = Arc::new(FakeQrClient::default());

    let settings = Settings {
        paths: AppPaths {
            storage_dir: PathBuf::from("/nonexistent/storage"),
            logs_dir: PathBuf::from("/nonexistent/logs"),
            config_path: PathBuf::from("/nonexistent/config.toml"),
        },
        qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
        qr_size: DEFAULT_QR_SIZE,
        qr_error_correction: ErrorCorrection::M,
        file_logging: false,
    };
    let deps = AppDeps {
        storage: Arc::new(InMemoryKeyValueStorage::new()),
        clock: Arc::new(FixedClock),
        clipboard: clipboard.clone(),
        qr_client: qr.clone(),
        image_reader: Arc::new(ImageFileReader),
    };

    (AppContext { settings, deps }, Fakes { clipboard, qr })
}
