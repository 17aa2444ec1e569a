use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::{BoardConfig, CONFIG_VERSION};
use crate::error::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Default config location: `<config dir>/jobboard/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jobboard").join("config.json"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BoardConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<BoardConfig, ConfigError> {
    let config: BoardConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads `path`, or the default location when `None`.
///
/// A missing file yields the defaults. A file that exists but does not
/// parse or validate is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<BoardConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => return Ok(BoardConfig::default()),
    };

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(BoardConfig::default());
    }

    let config = load_config(&path)?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

fn validate_config(config: &BoardConfig) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.storage_key.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "storage_key must not be empty".to_string(),
        });
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation {
            message: format!(
                "Unknown log level '{}' (expected one of: {})",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    Ok(())
}
