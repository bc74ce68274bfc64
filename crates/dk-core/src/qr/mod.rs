//! QR code requests for the third-party rendering endpoint.
//!
//! The endpoint returns a PNG; this module only builds the request. Fetching
//! goes through [`crate::ports::QrImagePort`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use url::{form_urlencoded, Url};

use crate::error::{ToolError, ToolResult};

pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Sizes offered by the generator, in pixels per side.
pub const QR_SIZES: [u32; 4] = [150, 200, 300, 400];
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Template texts for common QR payloads: `(label, value)`.
pub const QR_PRESETS: [(&str, &str); 5] = [
    ("WiFi Network", "WIFI:T:WPA;S:NetworkName;P:password;;"),
    ("Email", "mailto:example@email.com"),
    ("Phone", "tel:+1234567890"),
    ("SMS", "sms:+1234567890"),
    ("Website", "https://example.com"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl ErrorCorrection {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

impl Display for ErrorCorrection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            other => Err(ToolError::invalid_format(format!(
                "error correction must be one of L, M, Q, H (got {other})"
            ))),
        }
    }
}

/// A validated QR generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    text: String,
    size: u32,
    ecc: ErrorCorrection,
}

impl QrRequest {
    /// Rejects blank text and sizes the generator does not offer.
    pub fn new(text: impl Into<String>, size: u32, ecc: ErrorCorrection) -> ToolResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }
        if !QR_SIZES.contains(&size) {
            return Err(ToolError::invalid_format(format!(
                "QR size must be one of {QR_SIZES:?} (got {size})"
            )));
        }
        Ok(Self { text, size, ecc })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn ecc(&self) -> ErrorCorrection {
        self.ecc
    }

    /// `{base}?size=WxH&data=<encoded text>&ecc=<level>`.
    ///
    /// Spaces in the text are sent as `%20`, never `+`.
    pub fn url(&self, base: &str) -> ToolResult<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| ToolError::invalid_format(format!("bad QR endpoint {base}: {e}")))?;
        let query = format!(
            "size={0}x{0}&data={1}&ecc={2}",
            self.size,
            percent_encode(&self.text),
            self.ecc.as_str()
        );
        url.set_query(Some(&query));
        Ok(url)
    }
}

/// Form-encodes `text`, then swaps the `+` used for spaces for `%20`. A
/// literal `+` is already `%2B` at that point.
fn percent_encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
