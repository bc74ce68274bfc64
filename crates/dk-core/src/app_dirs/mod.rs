use std::path::PathBuf;

/// Resolved per-user application directories. Pure facts, no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}
