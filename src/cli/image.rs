//! Image to Base64 command.

use std::path::Path;

use dk_app::usecases::ConvertImageFile;
use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::ToolKind;

use super::input::finish;
use super::{AppContext, Report};

pub fn run(path: &Path, base64_only: bool, copy: bool, ctx: &AppContext) -> ToolResult<Report> {
    let conversion = ConvertImageFile::from_port(ctx.deps.image_reader.clone()).execute(path)?;

    let (output, what) = if base64_only {
        (conversion.base64().to_string(), "Base64 data (without prefix)")
    } else {
        (conversion.data_url.clone(), "Data URL")
    };

    let summary = format!("{} ({})", conversion.file_name, conversion.size_label);
    let copy = copy.then_some((output.as_str(), what));
    Ok(finish(
        Report::line(output.clone()),
        ctx,
        ToolKind::ImageBase64,
        copy,
        Notice::success("Image converted successfully", summary),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::context;
    use dk_core::ToolError;
    use tempfile::TempDir;

    #[test]
    fn prints_data_url_or_payload() {
        let (ctx, _fakes) = context();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dot.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let full = run(&path, false, false, &ctx).unwrap();
        assert_eq!(full.lines, vec!["data:image/gif;base64,R0lGODlh".to_string()]);
        assert_eq!(full.notice.unwrap().description, "dot.gif (6 Bytes)");

        let payload = run(&path, true, false, &ctx).unwrap();
        assert_eq!(payload.lines, vec!["R0lGODlh".to_string()]);
    }

    #[test]
    fn non_image_is_rejected() {
        let (ctx, _fakes) = context();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").unwrap();

        assert!(matches!(
            run(&path, false, false, &ctx),
            Err(ToolError::InvalidFormat(_))
        ));
    }
}
