use std::sync::Arc;

use dk_core::error::ToolResult;
use dk_core::ports::ClipboardWriterPort;
use dk_core::{ClipboardEntry, EntryId, ToolError};
use tracing::info;

use super::ClipboardHistoryStore;

/// Copies a tool's output to the system clipboard.
pub struct CopyText {
    writer: Arc<dyn ClipboardWriterPort>,
}

impl CopyText {
    pub fn from_port(writer: Arc<dyn ClipboardWriterPort>) -> Self {
        Self { writer }
    }

    /// Empty output has nothing to copy and fails with `EmptyInput`.
    #[tracing::instrument(name = "usecase.copy_text.execute", skip(self, text), fields(bytes = text.len()))]
    pub fn execute(&self, text: &str) -> ToolResult<()> {
        if text.is_empty() {
            return Err(ToolError::EmptyInput);
        }
        self.writer.write_text(text)?;
        info!("Copied text to system clipboard");
        Ok(())
    }
}

/// Writes a saved history entry back to the system clipboard.
pub struct CopyHistoryEntry {
    writer: Arc<dyn ClipboardWriterPort>,
}

impl CopyHistoryEntry {
    pub fn from_port(writer: Arc<dyn ClipboardWriterPort>) -> Self {
        Self { writer }
    }

    /// Returns the copied entry, or `None` when no entry has `entry_id`.
    #[tracing::instrument(
        name = "usecase.copy_history_entry.execute",
        skip(self, store),
        fields(entry_id = %entry_id)
    )]
    pub fn execute(
        &self,
        store: &ClipboardHistoryStore,
        entry_id: &EntryId,
    ) -> ToolResult<Option<ClipboardEntry>> {
        let Some(entry) = store.get(entry_id) else {
            return Ok(None);
        };
        self.writer.write_text(&entry.content)?;

        info!(entry_id = %entry_id, "Copied history entry to system clipboard");
        Ok(Some(entry.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dk_core::ports::ClockPort;
    use dk_infra::InMemoryKeyValueStorage;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardWriterPort for RecordingWriter {
        fn write_text(&self, text: &str) -> ToolResult<()> {
            if self.fail {
                return Err(ToolError::external("no display"));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct EpochClock;

    impl ClockPort for EpochClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    #[test]
    fn copy_text_writes_to_clipboard() {
        let writer = Arc::new(RecordingWriter::default());
        CopyText::from_port(writer.clone()).execute("SGVsbG8=").unwrap();
        assert_eq!(*writer.written.lock().unwrap(), vec!["SGVsbG8=".to_string()]);
    }

    #[test]
    fn copy_text_rejects_empty_output() {
        let writer = Arc::new(RecordingWriter::default());
        assert_eq!(
            CopyText::from_port(writer.clone()).execute(""),
            Err(ToolError::EmptyInput)
        );
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[test]
    fn clipboard_failure_is_surfaced() {
        let writer = Arc::new(RecordingWriter {
            fail: true,
            ..Default::default()
        });
        assert!(matches!(
            CopyText::from_port(writer).execute("x"),
            Err(ToolError::ExternalService(_))
        ));
    }

    #[test]
    fn copies_history_entry_content() {
        let mut store = ClipboardHistoryStore::init(
            Arc::new(InMemoryKeyValueStorage::new()),
            Arc::new(EpochClock),
        );
        let entry = store.add("saved text").unwrap();
        let id = entry.id.clone();
        let writer = Arc::new(RecordingWriter::default());
        let use_case = CopyHistoryEntry::from_port(writer.clone());

        assert_eq!(use_case.execute(&store, &id).unwrap(), Some(entry));
        assert_eq!(
            use_case.execute(&store, &EntryId::from("missing")).unwrap(),
            None
        );
        assert_eq!(*writer.written.lock().unwrap(), vec!["saved text".to_string()]);
    }
}
