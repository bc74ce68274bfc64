//! # Configuration loading
//!
//! `load_config` is pure data loading: read the file, parse TOML, map it to
//! [`AppConfig`]. Defaults for empty values are filled in by
//! [`resolve_settings`], which is the only place that knows them.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use dk_app::AppPaths;
use dk_core::config::AppConfig;
use dk_core::qr::{ErrorCorrection, DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE, QR_SIZES};

/// Load configuration from a TOML file.
///
/// No validation is performed: empty strings and out-of-range numbers are
/// accepted as they are.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file is an empty config.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

/// Effective runtime settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub paths: AppPaths,
    pub qr_endpoint: String,
    pub qr_size: u32,
    pub qr_error_correction: ErrorCorrection,
    pub file_logging: bool,
}

/// Fills every empty config value with its default.
///
/// Values that cannot be used (a QR size the generator does not offer, an
/// unknown error correction level) fall back to the default with a warning.
pub fn resolve_settings(config: &AppConfig, default_paths: AppPaths) -> Settings {
    let paths = if config.data_dir.as_os_str().is_empty() {
        default_paths
    } else {
        default_paths.with_data_root(&config.data_dir)
    };

    let qr_endpoint = if config.qr_endpoint.trim().is_empty() {
        DEFAULT_QR_ENDPOINT.to_string()
    } else {
        config.qr_endpoint.trim().to_string()
    };

    let qr_size = match config.qr_size {
        0 => DEFAULT_QR_SIZE,
        size if QR_SIZES.contains(&size) => size,
        size => {
            warn!(size, default = DEFAULT_QR_SIZE, "Unsupported QR size in config, using default");
            DEFAULT_QR_SIZE
        }
    };

    let qr_error_correction = if config.qr_error_correction.trim().is_empty() {
        ErrorCorrection::default()
    } else {
        config
            .qr_error_correction
            .parse()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Unsupported QR error correction in config, using default");
                ErrorCorrection::default()
            })
    };

    Settings {
        paths,
        qr_endpoint,
        qr_size,
        qr_error_correction,
        file_logging: config.file_logging,
    }
}

/// Config file to read: the explicit `--config` path, else the default.
pub fn config_path(explicit: Option<PathBuf>, paths: &AppPaths) -> PathBuf {
    explicit.unwrap_or_else(|| paths.config_path.clone())
}
