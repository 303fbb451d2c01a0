//! Command-line argument parsing for the finder.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Find wither rooms: 3×3 patches of nether ceiling bedrock at one height,
/// suitable for fighting the wither safely.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "wither-room-finder", version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// The x axis coordinate for the block to start the scan from.
    pub block_x: i32,

    /// The z axis coordinate for the block to start the scan from.
    pub block_z: i32,

    /// The radius of chunks around the block coordinate to scan for a room.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_radius: u32,

    /// Worker threads for generation (0 = one per core, 1 = no workers).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print the generated bedrock heights.
    #[arg(long)]
    pub print_grid: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to `config.ron`.
    #[arg(long)]
    pub save_config: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(threads) = args.threads {
            self.generation.worker_threads = threads;
        }
        if args.print_grid {
            self.debug.print_grid = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("wither-room-finder").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let args = parse(&["-8", "8", "1"]).unwrap();
        assert_eq!(args.block_x, -8);
        assert_eq!(args.block_z, 8);
        assert_eq!(args.chunk_radius, 1);
        assert!(!args.print_grid);
        assert!(args.threads.is_none());
    }

    #[test]
    fn test_options_after_positionals() {
        let args = parse(&["100", "-200", "4", "--threads", "0", "--print-grid"]).unwrap();
        assert_eq!(args.block_z, -200);
        assert_eq!(args.threads, Some(0));
        assert!(args.print_grid);
    }

    #[test]
    fn test_missing_argument_rejected() {
        let err = parse(&["1", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_integer_rejected() {
        let err = parse(&["one", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let err = parse(&["0", "0", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = parse(&["0", "0", "2", "--threads", "4", "--log-level", "debug"]).unwrap();
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.worker_threads, 4);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert!(!config.debug.print_grid);
        assert_eq!(config.search.max_chunk_radius, 64);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        let args = parse(&["0", "0", "2"]).unwrap();
        config.apply_cli_overrides(&args);
        assert_eq!(config, original);
    }

    #[test]
    fn test_print_grid_flag_does_not_clear_config() {
        let mut config = Config::default();
        config.debug.print_grid = true;
        let args = parse(&["0", "0", "2"]).unwrap();
        config.apply_cli_overrides(&args);
        assert!(config.debug.print_grid);
    }
}
