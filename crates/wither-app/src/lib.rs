//! Wiring for the `wither-room-finder` binary: config, logging, search and report.

pub mod report;

use std::io;
use std::path::PathBuf;

use tracing::{info, warn};
use wither_config::{CliArgs, Config, ConfigError};
use wither_coords::BlockPos;
use wither_rooms::{SearchArea, SearchError, SearchLimits, run_search};
use wither_terrain::Parallelism;

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Resolve the config directory: `--config` first, then the platform default.
fn config_dir(args: &CliArgs) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| Config::default_dir().ok())
}

/// Load settings, apply CLI overrides and start logging. Returns the settings
/// and the directory they were read from, if any.
pub fn load_config(args: &CliArgs) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let dir = config_dir(args);
    let mut config = match &dir {
        Some(dir) => Config::load(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);
    Ok((config, dir))
}

/// Run one search and print its report to stdout.
pub fn run(args: &CliArgs) -> Result<(), AppError> {
    let (config, dir) = load_config(args)?;
    wither_log::init_logging(Some(&config));

    if dir.is_none() {
        warn!("no config directory available, using default settings");
    }
    if args.save_config {
        let dir = dir.ok_or(ConfigError::NoConfigDir)?;
        let path = config.save(&dir)?;
        info!(path = %path.display(), "saved config");
    }

    let limits = SearchLimits {
        max_chunk_radius: config.search.max_chunk_radius,
    };
    let target = BlockPos::new(args.block_x, args.block_z);
    let area = SearchArea::new(target, args.chunk_radius, limits)?;
    let parallelism = Parallelism::from_worker_threads(config.generation.worker_threads);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_header(&mut out, &area)?;
    let search = run_search(area, parallelism);
    report::write_results(&mut out, &search, config.debug.print_grid)?;
    Ok(())
}
