mod models;
mod service;
mod utils;

use crate::models::config::Config;
use crate::models::dry_run_mode::DryRunMode;
use crate::service::backup::BackupRotator;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(parse_log_level(&args.log_level))
        .format_timestamp_secs()
        .init();

    cli_main(args)
}

#[derive(Parser, Debug)]
#[command(name = "chrome-bookmarks-backup")]
#[command(about = "Backup Chrome bookmarks.", long_about = None)]
struct Cli {
    /// Absolute path to backup folder
    backup_folder: PathBuf,

    /// Absolute path to Chrome bookmarks folder (default: the Chrome profile
    /// folder under the home directory)
    #[arg(long = "chrome_bookmarks_folder")]
    chrome_bookmarks_folder: Option<PathBuf>,

    #[arg(
        short = 'l',
        long = "log-level",
        default_value = "info",
        env = "LOG_LEVEL"
    )]
    log_level: String,

    #[arg(short = 'v', long = "validate-only")]
    validate_only: bool,

    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,
}

fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

fn cli_main(args: Cli) -> Result<()> {
    let config = Config::from_args(args.backup_folder, args.chrome_bookmarks_folder)
        .context("Failed to resolve Chrome bookmarks folder")?;
    debug!("Loaded config: {:?}", &config);

    let dry_run_mode = DryRunMode::from_flag(args.dry_run);
    if dry_run_mode.is_dry_run() {
        warn!("Running in DRY RUN mode - no backup will be written or removed");
    }

    let rotator = BackupRotator::new(config, dry_run_mode);
    rotator.validate().context("Invalid paths")?;

    if args.validate_only {
        info!("Paths are valid. Exiting (--validate-only mode).");
        return Ok(());
    }

    let outcome = rotator.run().context("Backup operation failed")?;
    match outcome.created_backup() {
        Some(backup) => info!(
            "{}Backup completed: {}",
            dry_run_mode.log_prefix(),
            backup.display()
        ),
        None => info!("No new bookmarks since the last backup"),
    }
    if let Some(removed) = outcome.removed_backup() {
        debug!("Retention removed {}", removed.display());
    }
    Ok(())
}
