//! User-facing notices: the short message shown after every action.
//!
//! Failures never abort the shell. Each `ToolError` is turned into an error
//! notice worded for the tool that produced it.

use std::fmt;

use dk_core::{ToolError, ToolKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
    /// Underlying error message, when there is one worth showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// `Copied!` with `<what> copied to clipboard`.
    pub fn copied(what: &str) -> Self {
        Self::success("Copied!", format!("{what} copied to clipboard"))
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Error notice for `err`, raised while using `tool`.
    pub fn from_error(tool: ToolKind, err: &ToolError) -> Self {
        match err {
            ToolError::EmptyInput => {
                let (title, description) = empty_input_wording(tool);
                Self::error(title, description)
            }
            ToolError::DuplicateContent => Self::error(
                "Duplicate content",
                "This content already exists in your clipboard history",
            ),
            ToolError::InvalidFormat(detail) => {
                let (title, description) = invalid_format_wording(tool);
                Self::error(title, description).with_detail(detail.clone())
            }
            ToolError::Decoding(detail) => {
                Self::error("Decode failed", "Please check your Base64 input")
                    .with_detail(detail.clone())
            }
            ToolError::Encoding(detail) => {
                Self::error("Encode failed", "The text could not be encoded")
                    .with_detail(detail.clone())
            }
            ToolError::ExternalService(detail) => {
                let notice = match tool {
                    ToolKind::QrCode => Self::error(
                        "Download failed",
                        "Unable to download the QR code. Please try again.",
                    ),
                    _ => Self::error("Copy failed", "Unable to access the system clipboard"),
                };
                notice.with_detail(detail.clone())
            }
            ToolError::Storage(detail) => {
                Self::error("Save failed", "Your changes could not be saved")
                    .with_detail(detail.clone())
            }
        }
    }
}

fn empty_input_wording(tool: ToolKind) -> (&'static str, &'static str) {
    match tool {
        ToolKind::Clipboard => (
            "Empty content",
            "Cannot add empty content to clipboard history",
        ),
        ToolKind::Json => ("No input provided", "Please enter JSON data"),
        ToolKind::QrCode => (
            "No text provided",
            "Please enter text or URL to generate QR code",
        ),
        ToolKind::TextCase => ("No input text", "Please enter some text to convert"),
        ToolKind::Timezone => (
            "No date/time selected",
            "Please select a date and time to convert",
        ),
        _ => ("No input provided", "Please enter some input"),
    }
}

fn invalid_format_wording(tool: ToolKind) -> (&'static str, &'static str) {
    match tool {
        ToolKind::Json => ("Invalid JSON", "Please check your JSON syntax"),
        ToolKind::Base64 => ("Decode failed", "Please check your Base64 input"),
        ToolKind::ImageBase64 => ("Invalid file type", "Please select an image file"),
        ToolKind::Timezone => ("Conversion failed", "Please check your date/time input"),
        ToolKind::ColorPicker => ("Invalid color", "Please enter a color as #RRGGBB"),
        _ => ("Invalid input", "Please check your input"),
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
