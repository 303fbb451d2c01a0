//! Configuration for the wither room finder.
//!
//! Settings persist as a RON file in the platform config directory and can be
//! overridden per run from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    APP_DIR_NAME, CONFIG_FILE_NAME, Config, DebugConfig, GenerationConfig, SearchConfig,
};
pub use error::ConfigError;
