//! # dk-core
//!
//! Core domain models and pure transforms for devkit.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Everything that touches the outside world (storage, the system clipboard,
//! HTTP) is reached through the traits in [`ports`].

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod json;
pub mod ports;
pub mod qr;
pub mod text_case;
pub mod timezone;
pub mod tools;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardEntry, EntryKind};
pub use color::{ColorFormats, Hsl, Rgb};
pub use config::AppConfig;
pub use error::ToolError;
pub use ids::EntryId;
pub use text_case::{CaseResults, TextCase};
pub use tools::ToolKind;
