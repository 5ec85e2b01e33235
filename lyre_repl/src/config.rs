//! REPL configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User preferences for the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Whether to print the version banner on startup.
    pub show_banner: bool,
    /// Whether to print unit values, such as the result of `define`.
    pub print_unit: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            show_banner: true,
            print_unit: false,
        }
    }
}

impl ReplConfig {
    /// Config file name looked up in the working directory when no
    /// explicit path is given.
    pub const DEFAULT_PATH: &'static str = "lyre.toml";

    /// Load configuration. An explicit `path` must exist and parse; with
    /// no explicit path, a missing `lyre.toml` falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(Self::DEFAULT_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
