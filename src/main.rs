use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use devkit_lib::bootstrap::{
    config_path, init_tracing_subscriber, load_config_or_empty, resolve_settings,
    wire_dependencies,
};
use devkit_lib::cli::{self, AppContext, Cli, Report};
use dk_app::{AppPaths, NoticeLevel};
use dk_core::ports::AppDirsPort;
use dk_platform::DirsAppDirsAdapter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match bootstrap(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("devkit: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("devkit: failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = runtime.block_on(cli::run(cli.command, &ctx));
    print_report(&report);

    if report.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Config, tracing and wiring, in that order: the config decides where the
/// log file goes.
fn bootstrap(cli: &Cli) -> anyhow::Result<AppContext> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let default_paths = AppPaths::from_app_dirs(&app_dirs);
    let config = load_config_or_empty(&config_path(cli.config.clone(), &default_paths))?;
    let settings = resolve_settings(&config, default_paths);

    let logs_dir = settings.file_logging.then_some(settings.paths.logs_dir.as_path());
    init_tracing_subscriber(logs_dir)?;
    info!(
        storage_dir = %settings.paths.storage_dir.display(),
        ephemeral = cli.ephemeral,
        "devkit starting"
    );

    let deps = wire_dependencies(&settings, cli.ephemeral).inspect_err(|err| {
        error!(error = %err, "Dependency wiring failed");
    })?;
    Ok(AppContext { settings, deps })
}

fn print_report(report: &Report) {
    for line in &report.lines {
        println!("{line}");
    }
    if let Some(notice) = &report.notice {
        match notice.level {
            NoticeLevel::Success => eprintln!("✓ {notice}"),
            NoticeLevel::Error => eprintln!("✗ {notice}"),
        }
    }
}
