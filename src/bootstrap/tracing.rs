//! Tracing setup for the devkit binary.
//!
//! Two outputs:
//!
//! - **stderr**: kept quiet (`warn`) so tool output on stdout stays clean,
//!   unless `RUST_LOG` asks for more.
//! - **file** (opt-in via `[logging] file = true`): `<data_dir>/logs/devkit.log`
//!   at `debug` in debug builds and `info` in release, again overridable with
//!   `RUST_LOG`.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "devkit.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives for the file log.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("dk_app={level}"),
        format!("dk_infra={level}"),
        format!("dk_platform={level}"),
        "reqwest=warn".to_string(),
        "hyper_util=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

fn filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Installs the global subscriber.
///
/// `logs_dir` enables the file layer. If the log file cannot be opened the
/// error is reported on stderr and logging continues without it.
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr))
        .with_filter(filter_or("warn"));

    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, continuing without it: {err:#}");
            None
        }
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter_or(&build_filter_directives(is_development()).join(",")))
    });

    registry().with(stderr_layer).with(file_layer).try_init()?;
    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
