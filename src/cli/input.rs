//! Helpers shared by the tool commands.

use std::io::Read;

use dk_app::usecases::CopyText;
use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::{ToolError, ToolKind};

use super::{AppContext, Report};

/// The argument itself, or stdin when it is absent or `-`.
///
/// A single trailing newline from stdin is dropped.
pub fn read_input(arg: Option<String>) -> ToolResult<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ToolError::invalid_format(format!("failed to read stdin: {e}")))?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

/// Attaches the notice for a finished action, copying `text` first when
/// asked.
///
/// A failed copy replaces the success notice but keeps the printed output.
pub fn finish(
    report: Report,
    ctx: &AppContext,
    tool: ToolKind,
    copy: Option<(&str, &str)>,
    success: Notice,
) -> Report {
    let Some((text, what)) = copy else {
        return report.with_notice(success);
    };

    match CopyText::from_port(ctx.deps.clipboard.clone()).execute(text) {
        Ok(()) => report.with_notice(Notice::copied(what)),
        Err(err) => report.with_notice(Notice::from_error(tool, &err)),
    }
}
