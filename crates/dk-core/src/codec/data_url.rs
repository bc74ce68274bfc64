//! `data:` URL helpers used by the image-to-Base64 tool.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Builds `data:<mime>;base64,<payload>` for raw bytes.
pub fn encode(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// An image file rendered as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageConversion {
    pub file_name: String,
    /// Original file size, formatted by [`format_file_size`].
    pub size_label: String,
    pub data_url: String,
}

impl ImageConversion {
    pub fn new(file_name: impl Into<String>, bytes: &[u8], mime: &str) -> Self {
        Self {
            file_name: file_name.into(),
            size_label: format_file_size(bytes.len() as u64),
            data_url: encode(bytes, mime),
        }
    }

    /// The payload without the `data:<mime>;base64,` header.
    pub fn base64(&self) -> &str {
        payload(&self.data_url)
    }
}

/// Returns the payload after the first comma, i.e. the "Base64 only" export.
///
/// Input without a comma is returned unchanged.
pub fn payload(data_url: &str) -> &str {
    match data_url.split_once(',') {
        Some((_, payload)) => payload,
        None => data_url,
    }
}

/// Returns the MIME type of a `data:` URL, if it has one.
pub fn mime_type(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix("data:")?.split_once(',')?.0;
    let mime = header.split(';').next()?;
    (!mime.is_empty()).then_some(mime)
}

/// Human readable file size with base-1024 units, e.g. `1.5 KB`.
///
/// Values are rounded to two decimals and trailing zeros are dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut threshold = 1024u64;
    while unit + 1 < SIZE_UNITS.len() && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_header() {
        let url = encode(&[0x89, b'P', b'N', b'G'], "image/png");
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn conversion_carries_size_and_payload() {
        let conversion = ImageConversion::new("dot.gif", b"GIF89a", "image/gif");
        assert_eq!(conversion.file_name, "dot.gif");
        assert_eq!(conversion.size_label, "6 Bytes");
        assert_eq!(conversion.data_url, "data:image/gif;base64,R0lGODlh");
        assert_eq!(conversion.base64(), "R0lGODlh");
    }

    #[test]
    fn payload_is_text_after_first_comma() {
        assert_eq!(payload("data:image/png;base64,iVBORw=="), "iVBORw==");
        assert_eq!(payload("data:text/plain,a,b"), "a,b");
        assert_eq!(payload("no-comma"), "no-comma");
    }

    #[test]
    fn extracts_mime_type() {
        assert_eq!(mime_type("data:image/gif;base64,R0lG"), Some("image/gif"));
        assert_eq!(mime_type("data:,hello"), None);
        assert_eq!(mime_type("image/gif;base64,R0lG"), None);
    }

    #[test]
    fn formats_file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_file_size(1234), "1.21 KB");
    }
}
