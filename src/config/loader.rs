use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "NSSH_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `$NSSH_CONFIG` if set, otherwise `~/.config/nssh/config.toml` on
    /// Unix (or equivalent via `dirs::config_dir()`). Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("nssh").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The launch program is set
    /// - The hostname variable is a usable env var name
    /// - Generated windows start after the hand-written ones
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.launch.program.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "launch.program must not be empty".to_string(),
            });
        }

        let var = &self.launch.hostname_env;
        if var.is_empty() || var.contains('=') || var.contains('\0') {
            return Err(ConfigError::ValidationError {
                message: format!("launch.hostname_env '{}' is not a valid variable name", var),
            });
        }

        if self.screen.start_offset == 0 {
            return Err(ConfigError::ValidationError {
                message: "screen.start_offset must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Directory holding the host lists.
    pub fn list_dir(&self) -> PathBuf {
        expand_home(&self.paths.list_dir)
    }

    /// Cursor file used by `next` / `reset`.
    pub fn cursor_file(&self) -> PathBuf {
        expand_home(&self.paths.cursor_file)
    }

    /// screen config rewritten by `nssh-screenrc`.
    pub fn screenrc(&self) -> PathBuf {
        expand_home(&self.paths.screenrc)
    }
}

/// Expand a leading `~` / `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    if path == "~" {
        home()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest)
    } else {
        PathBuf::from(path)
    }
}
