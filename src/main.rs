//! ph-upload - file customer documents into the Production History tree.

mod config;
mod logging;
mod prompt;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use config::AppConfig;
use logging::{init_logging, LogSettings};
use ph_core::config::NULL_SENTINEL;
use ph_core::{
    normalize_dropped_path, selection_summary, submit, Filer, OrderType, RawSubmission,
    SelectedFile, TOOL_CONFIRM_PROMPT, WORK_ORDER_CONFIRM_PROMPT,
};

/// Copy inside and outside files for a tool / work order into the shared
/// Production History folders.
#[derive(Parser, Debug)]
#[command(name = "ph-upload")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tool number (5 digits)
    #[arg(short, long, default_value = NULL_SENTINEL)]
    tool: String,

    /// Work order number (8 characters)
    #[arg(short, long, default_value = NULL_SENTINEL)]
    work_order: String,

    /// Order type: itar, non-itar or stock
    #[arg(long, default_value = "unspecified")]
    order_type: OrderType,

    /// File to place inside the work-order folder (repeatable)
    #[arg(short, long, value_name = "PATH")]
    inside: Vec<String>,

    /// File to place beside the work-order folders (repeatable)
    #[arg(short, long, value_name = "PATH")]
    outside: Vec<String>,

    /// Confirm that the required files are part of this upload
    #[arg(long)]
    required_files: bool,

    /// Root of the shared Production History tree
    #[arg(long, env = "PH_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (rotated at 1 MiB by default)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let app_config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    init_logging(&LogSettings {
        path: app_config.log_path(args.log_file.clone()),
        max_bytes: app_config.log_max_bytes,
        backups: app_config.log_backups,
        verbose: args.verbose,
    })?;

    let user = whoami::username();
    info!("App opened by {}", user);

    let filer_config = app_config.filer_config(args.base_dir.clone())?;
    info!("Filing into {}", filer_config.base_directory().display());
    let filer = Filer::new(filer_config);

    let files = selected_files(&args);
    println!("{}", selection_summary(&files));

    let raw = RawSubmission {
        tool: args.tool,
        work_order: args.work_order,
        order_type: args.order_type,
        required_files_acknowledged: args.required_files,
        files,
    };

    let status = match submit(
        &filer,
        raw,
        || prompt::confirm(TOOL_CONFIRM_PROMPT),
        || prompt::confirm(WORK_ORDER_CONFIRM_PROMPT),
    ) {
        Ok(report) => {
            for copied in &report.copied {
                println!("{}", copied.destination.display());
            }
            info!("Upload complete: {} file(s)", report.copied.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::from(u8::try_from(e.code_value()).unwrap_or(1))
        }
    };

    info!("App closed by {}", user);
    Ok(status)
}

/// Inside files first, then outside, each in command-line order.
fn selected_files(args: &Args) -> Vec<SelectedFile> {
    let inside = args
        .inside
        .iter()
        .map(|raw| SelectedFile::inside(normalize_dropped_path(raw)));
    let outside = args
        .outside
        .iter()
        .map(|raw| SelectedFile::outside(normalize_dropped_path(raw)));
    inside.chain(outside).collect()
}
