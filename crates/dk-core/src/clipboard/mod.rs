//! Clipboard history domain models.
//!
//! [`ClipboardHistory`] owns the list policy (newest first, bounded, exact
//! deduplication). Persistence lives in the application layer, which drives
//! this model and flushes it through a storage port.
mod age;
mod entry;
mod history;
mod kind;

pub use age::relative_age;
pub use entry::ClipboardEntry;
pub use history::{ClipboardHistory, HISTORY_CAPACITY};
pub use kind::{classify, EntryKind};
