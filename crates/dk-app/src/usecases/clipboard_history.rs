use std::sync::Arc;

use dk_core::clipboard::{relative_age, ClipboardEntry, ClipboardHistory};
use dk_core::error::ToolResult;
use dk_core::ports::{ClockPort, KeyValueStoragePort};
use dk_core::{EntryId, ToolError};
use tracing::{debug, info, warn};

/// Storage key of the serialized history.
pub const HISTORY_STORAGE_KEY: &str = "clipboardHistory";

/// The clipboard history as an explicit context object.
///
/// Loaded once from storage, then mutated through `&mut self`. Every mutation
/// is applied to a copy, written to storage in full, and only then committed,
/// so the in-memory state never runs ahead of what is persisted.
pub struct ClipboardHistoryStore {
    storage: Arc<dyn KeyValueStoragePort>,
    clock: Arc<dyn ClockPort>,
    history: ClipboardHistory,
}

impl ClipboardHistoryStore {
    /// Loads the stored history.
    ///
    /// A missing key, unreadable storage or malformed JSON all start an empty
    /// history; nothing is written until the first mutation.
    #[tracing::instrument(name = "usecase.clipboard_history.init", skip_all)]
    pub fn init(storage: Arc<dyn KeyValueStoragePort>, clock: Arc<dyn ClockPort>) -> Self {
        let history = load_history(storage.as_ref());
        info!(entries = history.len(), "Clipboard history loaded");
        Self {
            storage,
            clock,
            history,
        }
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        self.history.entries()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.history.get(id)
    }

    /// Finds an entry by its 1-based position in the newest-first list, or
    /// by its id. A number that is not a valid position is tried as an id, so
    /// numeric ids from older stores stay reachable.
    pub fn resolve(&self, selector: &str) -> Option<&ClipboardEntry> {
        let selector = selector.trim();
        selector
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| self.history.entries().get(index))
            .or_else(|| self.history.get(&EntryId::from(selector)))
    }

    /// Saves `content` as the newest entry.
    ///
    /// Blank content fails with `EmptyInput`, content already in the history
    /// with `DuplicateContent`. The oldest entry is dropped once the history
    /// is full.
    #[tracing::instrument(
        name = "usecase.clipboard_history.add",
        skip(self, content),
        fields(bytes = content.len())
    )]
    pub fn add(&mut self, content: &str) -> ToolResult<ClipboardEntry> {
        self.history.check_insert(content)?;

        let entry = ClipboardEntry::new(content, self.clock.now());
        let mut next = self.history.clone();
        let dropped = next.insert(entry.clone())?;
        self.commit(next)?;

        info!(
            entry_id = %entry.id,
            kind = entry.kind.as_str(),
            dropped = dropped.len(),
            "Added to clipboard history"
        );
        Ok(entry)
    }

    /// Removes the entry with `id`. Returns whether anything was removed; an
    /// unknown id is not an error and writes nothing.
    #[tracing::instrument(
        name = "usecase.clipboard_history.remove",
        skip(self),
        fields(entry_id = %id)
    )]
    pub fn remove(&mut self, id: &EntryId) -> ToolResult<bool> {
        let mut next = self.history.clone();
        if next.remove(id).is_none() {
            debug!("No entry with this id, nothing to remove");
            return Ok(false);
        }
        self.commit(next)?;

        info!(entry_id = %id, "Removed clipboard history entry");
        Ok(true)
    }

    /// Deletes every entry. Returns how many there were.
    #[tracing::instrument(name = "usecase.clipboard_history.clear", skip(self))]
    pub fn clear(&mut self) -> ToolResult<usize> {
        let mut next = self.history.clone();
        let removed = next.clear();
        self.commit(next)?;

        info!(removed, "Clipboard history cleared");
        Ok(removed)
    }

    /// Entries whose content contains `term`, ignoring case, newest first.
    pub fn search(&self, term: &str) -> Vec<&ClipboardEntry> {
        self.history.search(term)
    }

    /// Age label of `entry` against the store's clock.
    pub fn relative_age(&self, entry: &ClipboardEntry) -> String {
        relative_age(entry.created_at, self.clock.now())
    }

    fn commit(&mut self, next: ClipboardHistory) -> ToolResult<()> {
        let json = serde_json::to_string(&next).map_err(ToolError::storage)?;
        self.storage
            .set(HISTORY_STORAGE_KEY, &json)
            .map_err(|err| {
                warn!(error = %format!("{err:#}"), "Failed to persist clipboard history");
                ToolError::storage(format!("{err:#}"))
            })?;
        self.history = next;
        Ok(())
    }
}

fn load_history(storage: &dyn KeyValueStoragePort) -> ClipboardHistory {
    let raw = match storage.get(HISTORY_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ClipboardHistory::new(),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Failed to read clipboard history, starting empty");
            return ClipboardHistory::new();
        }
    };

    match serde_json::from_str::<Vec<ClipboardEntry>>(&raw) {
        Ok(entries) => ClipboardHistory::from_entries(entries),
        Err(err) => {
            warn!(error = %err, "Stored clipboard history is malformed, starting empty");
            ClipboardHistory::new()
        }
    }
}
