//! devkit application layer
//!
//! Use cases that combine the pure tools in `dk-core` with the ports
//! implemented by infrastructure and platform crates, plus the notices shown
//! to the user after each action.

pub mod app_paths;
pub mod notice;
pub mod usecases;

pub use app_paths::AppPaths;
pub use notice::{Notice, NoticeLevel};
pub use usecases::{
    ClipboardHistoryStore, ConvertImageFile, CopyHistoryEntry, CopyText, DownloadQrCode,
};
