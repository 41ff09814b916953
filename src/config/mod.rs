mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `path`, or from `CONFIG_PATH`, or from
/// `config.yaml`. Only the implicit default location may be absent.
pub async fn load(path: Option<&Path>) -> Result<Config> {
    match path
        .map(Path::to_path_buf)
        .or_else(|| env::var_os("CONFIG_PATH").map(Into::into))
    {
        Some(explicit) => load_file(&explicit, true).await,
        None => load_file(Path::new(DEFAULT_CONFIG_PATH), false).await,
    }
}

/// Reads `config_path`; a missing file yields the defaults unless `required`.
pub async fn load_file(config_path: &Path, required: bool) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!("No {} found, using defaults", config_path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;
    validate_log_level(&config.logs.level)?;
    Ok(config)
}

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}
