use std::path::PathBuf;

use dk_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "devkit";

/// Directory name, suffixed with `DEVKIT_PROFILE` when it is set so that
/// parallel profiles never share a history file.
fn resolved_app_dir_name() -> String {
    match std::env::var("DEVKIT_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Test-only adapter that resolves both roots under `base`.
    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    /// Base directory for application data; `dirs::data_local_dir()` unless
    /// overridden.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}
