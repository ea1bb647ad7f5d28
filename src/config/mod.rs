//! Configuration: optional TOML file with defaults for every field.

mod loader;
mod types;

pub use loader::{expand_home, ConfigError, CONFIG_ENV_VAR};
pub use types::{Config, LaunchConfig, PathsConfig, ScreenConfig, WalkConfig};
