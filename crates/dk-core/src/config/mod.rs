//! # Configuration DTO
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No validation logic
//! - No default value calculation (the bootstrap layer resolves empties)
//!
//! Missing keys map to empty values. Empty is a fact, not an error.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding durable storage and logs; empty means "platform default".
    pub data_dir: PathBuf,

    /// Base URL of the QR rendering endpoint; empty means the built-in default.
    pub qr_endpoint: String,

    /// Default QR side length in pixels; 0 means the built-in default.
    pub qr_size: u32,

    /// Default QR error correction level (`L`, `M`, `Q`, `H`); may be empty.
    pub qr_error_correction: String,

    /// Write logs to `<data_dir>/logs` in addition to stderr.
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// This method must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            data_dir: PathBuf::from(section_str("storage", "data_dir")),
            qr_endpoint: section_str("qr", "endpoint"),
            qr_size: toml_value
                .get("qr")
                .and_then(|q| q.get("size"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
            qr_error_correction: section_str("qr", "error_correction"),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            qr_endpoint: String::new(),
            qr_size: 0,
            qr_error_correction: String::new(),
            file_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/devkit"

            [qr]
            endpoint = "https://qr.example/api"
            size = 300
            error_correction = "H"

            [logging]
            file = true
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/devkit"));
        assert_eq!(config.qr_endpoint, "https://qr.example/api");
        assert_eq!(config.qr_size, 300);
        assert_eq!(config.qr_error_correction, "H");
        assert!(config.file_logging);
    }

    #[test]
    fn missing_values_are_empty_not_errors() {
        let value: toml::Value = toml::from_str("[qr]\nsize = -1\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }
}
