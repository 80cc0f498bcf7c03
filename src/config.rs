use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

static COMPILED_DEFAULT: LazyLock<Config> = LazyLock::new(Config::compiled_default);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub status: StatusConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Strip the `\r` of `\r\n` line endings before classifying lines.
    pub normalize_line_endings: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatusConfig {
    /// Inline CSS for the `<p>` wrapping a status line.
    pub style: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            style: "color:#888;font-style:italic;".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::warn!("Bundled default_config.toml does not match Config, using built-in defaults: {e}");
            Self::default()
        })
    }

    /// Shared copy of [`Config::compiled_default`], parsed once per process.
    pub fn compiled() -> &'static Config {
        &COMPILED_DEFAULT
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::compiled().clone())
        }
    }
}
