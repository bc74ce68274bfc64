use serde::{Deserialize, Serialize};

use super::entry::ClipboardEntry;
use crate::error::{ToolError, ToolResult};
use crate::ids::EntryId;

/// Maximum number of entries kept; older ones are dropped on insert.
pub const HISTORY_CAPACITY: usize = 50;

/// Newest-first clipboard history with exact-content deduplication.
///
/// This is the in-memory model only. Every method that changes it returns
/// enough information for the caller to decide whether to flush.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipboardHistory {
    entries: Vec<ClipboardEntry>,
}

impl ClipboardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from stored entries, keeping at most
    /// [`HISTORY_CAPACITY`] of them in their stored order.
    pub fn from_entries(mut entries: Vec<ClipboardEntry>) -> Self {
        if entries.len() > HISTORY_CAPACITY {
            tracing::debug!(
                stored = entries.len(),
                kept = HISTORY_CAPACITY,
                "truncating oversize clipboard history"
            );
        }
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Checks the insert policy without changing anything.
    ///
    /// Blank content (after trimming) is rejected with `EmptyInput`; content
    /// equal to an existing entry, compared exactly, with `DuplicateContent`.
    pub fn check_insert(&self, content: &str) -> ToolResult<()> {
        if content.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }
        if self.contains_content(content) {
            return Err(ToolError::DuplicateContent);
        }
        Ok(())
    }

    /// Prepends `entry` after the policy check and drops anything beyond
    /// capacity. Returns the dropped entries.
    pub fn insert(&mut self, entry: ClipboardEntry) -> ToolResult<Vec<ClipboardEntry>> {
        self.check_insert(&entry.content)?;
        self.entries.insert(0, entry);
        let dropped = if self.entries.len() > HISTORY_CAPACITY {
            self.entries.split_off(HISTORY_CAPACITY)
        } else {
            Vec::new()
        };
        Ok(dropped)
    }

    /// Removes the entry with `id`; returns it if it existed.
    pub fn remove(&mut self, id: &EntryId) -> Option<ClipboardEntry> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Removes every entry; returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Case-insensitive substring filter, newest first.
    pub fn search(&self, term: &str) -> Vec<&ClipboardEntry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.content.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains_content(&self, content: &str) -> bool {
        self.entries.iter().any(|e| e.content == content)
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(content: &str) -> ClipboardEntry {
        ClipboardEntry::new(content, Utc::now())
    }

    #[test]
    fn inserts_newest_first() {
        let mut history = ClipboardHistory::new();
        history.insert(entry("one")).unwrap();
        history.insert(entry("two")).unwrap();

        let contents: Vec<&str> = history.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["two", "one"]);
    }

    #[test]
    fn rejects_blank_content() {
        let mut history = ClipboardHistory::new();
        assert_eq!(history.insert(entry("")), Err(ToolError::EmptyInput));
        assert_eq!(history.insert(entry("  \n\t")), Err(ToolError::EmptyInput));
        assert!(history.is_empty());
    }

    #[test]
    fn rejects_exact_duplicates_only() {
        let mut history = ClipboardHistory::new();
        history.insert(entry("hello")).unwrap();

        assert_eq!(history.insert(entry("hello")), Err(ToolError::DuplicateContent));
        assert!(history.insert(entry("hello ")).is_ok());
        assert!(history.insert(entry("Hello")).is_ok());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn drops_oldest_beyond_capacity() {
        let mut history = ClipboardHistory::new();
        for i in 0..HISTORY_CAPACITY {
            assert!(history.insert(entry(&format!("item {i}"))).unwrap().is_empty());
        }

        let dropped = history.insert(entry("overflow")).unwrap();
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].content, "item 0");
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].content, "overflow");
        assert_eq!(history.entries()[HISTORY_CAPACITY - 1].content, "item 1");
    }

    #[test]
    fn remove_is_noop_for_unknown_id() {
        let mut history = ClipboardHistory::new();
        history.insert(entry("keep")).unwrap();
        assert!(history.remove(&EntryId::from("missing")).is_none());
        assert_eq!(history.len(), 1);

        let id = history.entries()[0].id.clone();
        assert_eq!(history.remove(&id).unwrap().content, "keep");
        assert!(history.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let mut history = ClipboardHistory::new();
        history.insert(entry("Rust book")).unwrap();
        history.insert(entry("python notes")).unwrap();
        history.insert(entry("TRUSTED source")).unwrap();

        let hits: Vec<&str> = history.search("rust").iter().map(|e| e.content.as_str()).collect();
        assert_eq!(hits, vec!["TRUSTED source", "Rust book"]);
        assert_eq!(history.search("").len(), 3);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn from_entries_truncates_oversize_lists() {
        let entries = (0..60).map(|i| entry(&i.to_string())).collect();
        let history = ClipboardHistory::from_entries(entries);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0].content, "0");
    }

    #[test]
    fn clear_reports_count() {
        let mut history = ClipboardHistory::new();
        history.insert(entry("a")).unwrap();
        history.insert(entry("b")).unwrap();
        assert_eq!(history.clear(), 2);
        assert_eq!(history.clear(), 0);
    }
}
