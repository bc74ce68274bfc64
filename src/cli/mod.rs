//! The navigation shell as a command line: one subcommand per tool.
//!
//! Every action ends in a [`Report`]: what to print on stdout, plus the notice
//! the action raised. Failures are turned into error notices here and never
//! escape as Rust errors.

mod clipboard;
mod color;
mod image;
mod input;
mod qr;
mod report;
#[cfg(test)]
mod test_support;
mod text;
mod timezone;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dk_app::Notice;
use dk_core::qr::ErrorCorrection;
use dk_core::{TextCase, ToolKind};

use crate::bootstrap::{AppDeps, Settings};

pub use report::Report;

#[derive(Debug, Parser)]
#[command(name = "devkit")]
#[command(version, about = "A collection of developer utility tools", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/devkit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the clipboard history in memory for this run only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available tools
    Tools,
    /// Encode and decode Base64 strings
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },
    /// Format, minify and validate JSON
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },
    /// Transform text between cases
    Case {
        /// Text to convert; read from stdin when omitted or `-`
        text: Option<String>,
        /// Only print this case
        #[arg(short, long)]
        to: Option<TextCase>,
        /// Copy the result to the clipboard (requires --to)
        #[arg(long, requires = "to")]
        copy: bool,
    },
    /// Pick and convert colors
    Color {
        #[command(subcommand)]
        action: ColorAction,
    },
    /// Generate QR codes
    Qr {
        #[command(subcommand)]
        action: QrAction,
    },
    /// Convert an image file to Base64
    Image {
        /// Image file to convert
        path: PathBuf,
        /// Print only the Base64 payload, without the data URL prefix
        #[arg(long)]
        base64_only: bool,
        /// Copy the output to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Convert times between timezones
    Timezone {
        #[command(subcommand)]
        action: TimezoneAction,
    },
    /// Manage clipboard history
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum Base64Action {
    /// Encode text to Base64
    Encode {
        /// Text to encode; read from stdin when omitted or `-`
        text: Option<String>,
        #[arg(long)]
        copy: bool,
    },
    /// Decode Base64 to text
    Decode {
        /// Base64 to decode; read from stdin when omitted or `-`
        input: Option<String>,
        #[arg(long)]
        copy: bool,
    },
    /// Check whether input looks like Base64
    Check {
        input: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum JsonAction {
    /// Pretty-print with 2-space indentation
    Format {
        /// JSON to format; read from stdin when omitted or `-`
        input: Option<String>,
        #[arg(long)]
        copy: bool,
    },
    /// Remove all insignificant whitespace
    Minify {
        input: Option<String>,
        #[arg(long)]
        copy: bool,
    },
    /// Only check the syntax
    Validate {
        input: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

#[derive(Debug, Subcommand)]
pub enum ColorAction {
    /// Show a color in every format
    Show {
        /// Color as #RRGGBB or RRGGBB
        hex: String,
        /// Copy one format to the clipboard
        #[arg(long, value_enum)]
        copy: Option<ColorFormat>,
    },
    /// Generate random colors
    Random {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Select several colors in turn and show the recent-color history
    Pick {
        #[arg(required = true)]
        colors: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum QrAction {
    /// Print the image URL for a QR code
    Url {
        /// Text or URL to encode
        text: String,
        /// Side length in pixels (150, 200, 300 or 400)
        #[arg(short, long)]
        size: Option<u32>,
        /// Error correction level (L, M, Q or H)
        #[arg(short, long)]
        ecc: Option<ErrorCorrection>,
        #[arg(long)]
        copy: bool,
    },
    /// Download the QR code as a PNG
    Download {
        text: String,
        #[arg(short, long)]
        size: Option<u32>,
        #[arg(short, long)]
        ecc: Option<ErrorCorrection>,
        /// Output file (default: qrcode-<timestamp>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List template texts for common payloads
    Presets,
}

#[derive(Debug, Subcommand)]
pub enum TimezoneAction {
    /// Convert a date and time from one zone to another
    Convert {
        /// Local date-time, e.g. 2024-01-15T12:00 or "2024-01-15 12:00:30"
        datetime: String,
        #[arg(short, long, default_value = "UTC")]
        from: String,
        #[arg(short, long, default_value = "America/New_York")]
        to: String,
        #[arg(long)]
        copy: bool,
    },
    /// List the common timezones
    List,
    /// Show the current time in each zone (default: the common ones)
    Now {
        zones: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ClipboardAction {
    /// Save text to the history
    Add {
        /// Content to save; read from stdin when omitted or `-`
        content: Option<String>,
    },
    /// List saved entries, newest first
    List,
    /// Search saved entries (case-insensitive)
    Search {
        term: String,
    },
    /// Copy an entry back to the system clipboard
    Copy {
        /// Entry id, or 1-based position in the list
        entry: String,
    },
    /// Remove one entry
    Remove {
        /// Entry id, or 1-based position in the list
        entry: String,
    },
    /// Remove every entry
    Clear,
}

/// Everything a command needs.
pub struct AppContext {
    pub settings: Settings,
    pub deps: AppDeps,
}

impl Commands {
    fn tool(&self) -> ToolKind {
        match self {
            Commands::Tools => ToolKind::Home,
            Commands::Base64 { .. } => ToolKind::Base64,
            Commands::Json { .. } => ToolKind::Json,
            Commands::Case { .. } => ToolKind::TextCase,
            Commands::Color { .. } => ToolKind::ColorPicker,
            Commands::Qr { .. } => ToolKind::QrCode,
            Commands::Image { .. } => ToolKind::ImageBase64,
            Commands::Timezone { .. } => ToolKind::Timezone,
            Commands::Clipboard { .. } => ToolKind::Clipboard,
        }
    }
}

/// Runs one command to completion.
#[tracing::instrument(name = "cli.run", skip_all, fields(tool = ?command.tool()))]
pub async fn run(command: Commands, ctx: &AppContext) -> Report {
    let tool = command.tool();
    let result = match command {
        Commands::Tools => Ok(tools_report()),
        Commands::Base64 { action } => text::base64(action, ctx),
        Commands::Json { action } => text::json(action, ctx),
        Commands::Case { text, to, copy } => text::case(text, to, copy, ctx),
        Commands::Color { action } => color::run(action, ctx),
        Commands::Qr { action } => qr::run(action, ctx).await,
        Commands::Image {
            path,
            base64_only,
            copy,
        } => image::run(&path, base64_only, copy, ctx),
        Commands::Timezone { action } => timezone::run(action, ctx),
        Commands::Clipboard { action } => clipboard::run(action, ctx),
    };

    result.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Action failed");
        Report::notice_only(Notice::from_error(tool, &err))
    })
}

fn tools_report() -> Report {
    let lines = dk_core::tools::catalog()
        .into_iter()
        .map(|tool| format!("{:<20} {:<14} {}", tool.name, tool.route, tool.description))
        .collect();
    Report::new(lines)
}
