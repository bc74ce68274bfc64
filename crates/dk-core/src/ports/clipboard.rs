use crate::error::ToolResult;

/// Write access to the system clipboard, used by every "copy" action.
pub trait ClipboardWriterPort: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// Failures are reported as `ToolError::ExternalService`.
    fn write_text(&self, text: &str) -> ToolResult<()>;
}
