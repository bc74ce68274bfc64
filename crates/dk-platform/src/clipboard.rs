use clipboard_rs::{Clipboard, ClipboardContext};
use dk_core::error::ToolResult;
use dk_core::ports::ClipboardWriterPort;
use dk_core::ToolError;
use tracing::{debug, debug_span};

/// Writes text to the system clipboard through clipboard-rs.
///
/// A fresh context is opened per write, so constructing the writer never
/// fails on a headless machine; only an actual copy does.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboardWriter;

impl SystemClipboardWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriterPort for SystemClipboardWriter {
    fn write_text(&self, text: &str) -> ToolResult<()> {
        let span = debug_span!("platform.clipboard.write_text", bytes = text.len());
        span.in_scope(|| {
            let ctx = ClipboardContext::new().map_err(|e| {
                ToolError::external(format!("Failed to create clipboard context: {e}"))
            })?;
            ctx.set_text(text.to_string())
                .map_err(|e| ToolError::external(format!("Failed to write clipboard: {e}")))?;

            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}
