//! Base64, JSON and text case commands.

use dk_app::Notice;
use dk_core::error::ToolResult;
use dk_core::text_case::{convert_all, TextStats};
use dk_core::{codec, json, TextCase, ToolError, ToolKind};

use super::input::{finish, read_input};
use super::{AppContext, Base64Action, JsonAction, Report};

pub fn base64(action: Base64Action, ctx: &AppContext) -> ToolResult<Report> {
    let tool = ToolKind::Base64;
    match action {
        Base64Action::Encode { text, copy } => {
            let text = read_input(text)?;
            let encoded = codec::encode(&text)?;
            let copy = copy.then_some((encoded.as_str(), "Output"));
            Ok(finish(
                Report::line(encoded.clone()),
                ctx,
                tool,
                copy,
                Notice::success("Encoded successfully", "Text has been encoded to Base64"),
            ))
        }
        Base64Action::Decode { input, copy } => {
            let input = read_input(input)?;
            let decoded = codec::decode(&input)?;
            let copy = copy.then_some((decoded.as_str(), "Output"));
            Ok(finish(
                Report::line(decoded.clone()),
                ctx,
                tool,
                copy,
                Notice::success("Decoded successfully", "Base64 has been decoded to text"),
            ))
        }
        Base64Action::Check { input } => {
            let input = read_input(input)?;
            if codec::is_valid_base64(&input) {
                Ok(Report::line("valid").with_notice(Notice::success(
                    "Valid Base64",
                    "Input matches the Base64 alphabet and padding",
                )))
            } else {
                Err(ToolError::invalid_format("Invalid Base64 format"))
            }
        }
    }
}

pub fn json(action: JsonAction, ctx: &AppContext) -> ToolResult<Report> {
    let tool = ToolKind::Json;
    match action {
        JsonAction::Format { input, copy } => {
            let formatted = json::format(&read_input(input)?)?;
            let copy = copy.then_some((formatted.as_str(), "JSON"));
            Ok(finish(
                Report::line(formatted.clone()),
                ctx,
                tool,
                copy,
                Notice::success(
                    "JSON formatted successfully",
                    "Your JSON is valid and has been formatted",
                ),
            ))
        }
        JsonAction::Minify { input, copy } => {
            let minified = json::minify(&read_input(input)?)?;
            let copy = copy.then_some((minified.as_str(), "JSON"));
            Ok(finish(
                Report::line(minified.clone()),
                ctx,
                tool,
                copy,
                Notice::success("JSON minified successfully", "Your JSON has been compressed"),
            ))
        }
        JsonAction::Validate { input } => {
            json::validate(&read_input(input)?)?;
            Ok(Report::notice_only(Notice::success(
                "Valid JSON",
                "Your JSON syntax is correct",
            )))
        }
    }
}

pub fn case(
    text: Option<String>,
    to: Option<TextCase>,
    copy: bool,
    ctx: &AppContext,
) -> ToolResult<Report> {
    let text = read_input(text)?;
    if text.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let stats = TextStats::of(&text);
    let stats_line = format!("{} characters, {} words", stats.characters, stats.words);

    match to {
        Some(case) => {
            let converted = case.apply(&text);
            let what = format!("{} text", case.label());
            let copy = copy.then_some((converted.as_str(), what.as_str()));
            Ok(finish(
                Report::line(converted.clone()),
                ctx,
                ToolKind::TextCase,
                copy,
                Notice::success("Converted", stats_line),
            ))
        }
        None => {
            let mut lines: Vec<String> = convert_all(&text)
                .iter()
                .map(|(case, output)| format!("{:<14} {output}", case.label()))
                .collect();
            lines.push(String::new());
            lines.push(stats_line);
            Ok(Report::new(lines))
        }
    }
}
