//! JSON formatter: pretty-print, minify and validate.
//!
//! Object keys keep their input order.

use serde_json::Value;

use crate::error::{ToolError, ToolResult};

fn parse(input: &str) -> ToolResult<Value> {
    if input.trim().is_empty() {
        return Err(ToolError::EmptyInput);
    }
    serde_json::from_str(input).map_err(|e| ToolError::InvalidFormat(e.to_string()))
}

/// Pretty-prints `input` with two-space indentation.
pub fn format(input: &str) -> ToolResult<String> {
    let value = parse(input)?;
    serde_json::to_string_pretty(&value).map_err(|e| ToolError::Encoding(e.to_string()))
}

/// Re-serializes `input` without insignificant whitespace.
pub fn minify(input: &str) -> ToolResult<String> {
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::Encoding(e.to_string()))
}

pub fn validate(input: &str) -> ToolResult<()> {
    parse(input).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_space_indent_and_key_order() {
        let pretty = format(r#"{"b":1,"a":[1,2]}"#).unwrap();
        assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn minify_undoes_format() {
        let compact = r#"{"name":"devkit","tags":["a","b"],"nested":{"x":null}}"#;
        let pretty = format(compact).unwrap();
        assert_eq!(minify(&pretty).unwrap(), compact);
    }

    #[test]
    fn scalars_are_valid_documents() {
        assert_eq!(format("42").unwrap(), "42");
        assert_eq!(minify(" \"text\" ").unwrap(), "\"text\"");
    }

    #[test]
    fn invalid_json_reports_parser_message() {
        let err = validate("{\"a\": }").unwrap_err();
        match err {
            ToolError::InvalidFormat(msg) => assert!(msg.contains("line 1"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(format("{'single': 1}"), Err(ToolError::InvalidFormat(_))));
    }

    #[test]
    fn blank_input_is_empty_error() {
        assert_eq!(validate("   "), Err(ToolError::EmptyInput));
        assert_eq!(minify(""), Err(ToolError::EmptyInput));
    }
}
