use std::path::{Path, PathBuf};

use dk_core::app_dirs::AppDirs;

/// Concrete file locations derived from the application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Directory of the key-value store.
    pub storage_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            storage_dir: dirs.app_data_root.join("storage"),
            logs_dir: dirs.app_data_root.join("logs"),
            config_path: dirs.app_config_root.join("config.toml"),
        }
    }

    /// Moves storage and logs under `data_root`; the config path is kept.
    pub fn with_data_root(self, data_root: &Path) -> Self {
        Self {
            storage_dir: data_root.join("storage"),
            logs_dir: data_root.join("logs"),
            config_path: self.config_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs() -> AppDirs {
        AppDirs {
            app_data_root: PathBuf::from("/tmp/devkit"),
            app_config_root: PathBuf::from("/tmp/config/devkit"),
        }
    }

    #[test]
    fn app_paths_derive_from_app_dirs() {
        let paths = AppPaths::from_app_dirs(&dirs());

        assert_eq!(paths.storage_dir, PathBuf::from("/tmp/devkit/storage"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/devkit/logs"));
        assert_eq!(
            paths.config_path,
            PathBuf::from("/tmp/config/devkit/config.toml")
        );
    }

    #[test]
    fn data_root_override_keeps_config_path() {
        let paths = AppPaths::from_app_dirs(&dirs()).with_data_root(Path::new("/srv/dk"));

        assert_eq!(paths.storage_dir, PathBuf::from("/srv/dk/storage"));
        assert_eq!(paths.logs_dir, PathBuf::from("/srv/dk/logs"));
        assert_eq!(
            paths.config_path,
            PathBuf::from("/tmp/config/devkit/config.toml")
        );
    }
}
