//! Use cases.
//!
//! The clipboard history store is the only stateful one; the rest are thin
//! orchestrations over a single port each.

pub mod clipboard_history;
pub mod convert_image;
pub mod copy_text;
pub mod download_qr;

pub use clipboard_history::{ClipboardHistoryStore, HISTORY_STORAGE_KEY};
pub use convert_image::ConvertImageFile;
pub use copy_text::{CopyHistoryEntry, CopyText};
pub use download_qr::{DownloadQrCode, QrDownload};
