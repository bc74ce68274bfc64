//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure or
//! platform implementations, so the tools stay independent of where data is
//! stored, which clipboard is used, or how HTTP is done.

mod app_dirs;
mod clipboard;
mod clock;
pub mod errors;
mod image_file;
mod qr;
mod storage;

pub use app_dirs::AppDirsPort;
pub use clipboard::ClipboardWriterPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use image_file::ImageFilePort;
pub use qr::QrImagePort;
pub use storage::KeyValueStoragePort;
