pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::{config_path, load_config, load_config_or_empty, resolve_settings, Settings};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{wire_dependencies, AppDeps, WiringError};
