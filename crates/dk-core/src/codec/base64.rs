//! Base64 text codec.
//!
//! Encoding always goes through UTF-8. Decoding follows browsers' `atob`:
//! padding may be left out entirely (`"YQ"` decodes like `"YQ=="`), but when
//! present it must complete the last quantum (`"YQ="` is rejected). The
//! alphabet is strict: anything outside `A-Z a-z 0-9 + /` and at most two
//! trailing `=` is rejected before any decoding is attempted.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ToolError, ToolResult};

static BASE64_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("static base64 regex"));

/// Standard alphabet, padded output, padding-indifferent input. Partial
/// padding is rejected in [`decode`] before the engine sees it.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Encodes `text` as standard, padded Base64 of its UTF-8 bytes.
///
/// Returns a `Result` to keep the codec surface symmetric; a Rust `&str` is
/// always valid UTF-8, so `ToolError::Encoding` is never produced here.
pub fn encode(text: &str) -> ToolResult<String> {
    Ok(LENIENT_STANDARD.encode(text.as_bytes()))
}

/// Decodes Base64 text back into a UTF-8 string.
///
/// # Errors
///
/// - `InvalidFormat` if the whitespace-stripped input contains characters
///   outside the Base64 alphabet or misplaced padding.
/// - `Decoding` if the length is structurally impossible, the padding is
///   incomplete, or the decoded bytes are not valid UTF-8.
pub fn decode(input: &str) -> ToolResult<String> {
    let clean = strip_whitespace(input);
    if !BASE64_SHAPE.is_match(&clean) {
        return Err(ToolError::invalid_format("Invalid Base64 format"));
    }
    if clean.ends_with('=') && clean.len() % 4 != 0 {
        return Err(ToolError::Decoding("incomplete padding".to_string()));
    }

    let bytes = LENIENT_STANDARD
        .decode(clean.as_bytes())
        .map_err(|e| ToolError::Decoding(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ToolError::Decoding(e.to_string()))
}

/// Returns `true` when `input` (ignoring whitespace) uses only the Base64
/// alphabet with correct trailing padding and a length that is a multiple of 4.
pub fn is_valid_base64(input: &str) -> bool {
    let clean = strip_whitespace(input);
    BASE64_SHAPE.is_match(&clean) && clean.len() % 4 == 0
}

/// Rough size of the encoded form, in characters.
pub fn estimate_encoded_len(text: &str) -> usize {
    (text.chars().count() * 4).div_ceil(3)
}
