//! Structured logging for the wither room finder.
//!
//! Console output goes to stderr so it never interleaves with the report on
//! stdout. When the config names a log directory, a JSON copy of every event
//! is written to `wither.log` there.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wither_config::Config;

/// Filter used when neither `RUST_LOG` nor the config specifies one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file inside the configured log directory.
pub const LOG_FILE_NAME: &str = "wither.log";

/// Initialize the global tracing subscriber.
///
/// - `RUST_LOG` wins over the configured level.
/// - Console layer on stderr with uptime timestamps and module paths.
/// - JSON file layer when `config.debug.log_dir` is set and writable.
///
/// Must be called at most once per process.
///
/// ```no_run
/// use wither_config::Config;
///
/// wither_log::init_logging(Some(&Config::default()));
/// ```
pub fn init_logging(config: Option<&Config>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_env_filter(config));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true) // worker threads are named bedrock-gen-N
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let log_dir = config.and_then(|c| c.debug.log_dir.as_deref());
    if let Some(log_dir) = log_dir
        && let Some(log_file) = create_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Build the filter named by the config, falling back to [`DEFAULT_FILTER`].
pub fn config_env_filter(config: Option<&Config>) -> EnvFilter {
    let filter_str = config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(filter_str).unwrap_or_else(|_| default_env_filter())
}

/// The filter used when nothing else is configured.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Path of the JSON log file for a log directory.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn create_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_file_path(log_dir)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_level_used() {
        let mut config = Config::default();
        config.debug.log_level = "warn,wither_terrain=trace".to_string();
        let filter_str = format!("{}", config_env_filter(Some(&config)));
        assert!(filter_str.contains("wither_terrain=trace"));
        assert!(filter_str.contains("warn"));
    }

    #[test]
    fn test_empty_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        let filter_str = format!("{}", config_env_filter(Some(&config)));
        assert!(filter_str.contains("info"));

        let filter_str = format!("{}", config_env_filter(None));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,wither_rooms=trace",
            "warn,wither_terrain=debug,wither_config=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_new(filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_created_in_nested_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let file = create_log_file(&log_dir);
        assert!(file.is_some());
        assert!(log_file_path(&log_dir).exists());
        assert_eq!(log_file_path(&log_dir).file_name().unwrap(), LOG_FILE_NAME);
    }
}
