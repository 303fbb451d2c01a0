//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while locating, reading or writing `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No `--config` directory was given and the platform reports none.
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for [`crate::Config`].
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
