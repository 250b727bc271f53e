//! Configuration handling for docshelf
//!
//! Configuration is read from the file given with `--config`, or from
//! `~/.config/docshelf/config.toml` (platform equivalent) when it exists.
//! Every field is optional. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::Seed;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Prompt printed before each command in text mode
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Output format when `--format` is not given
    pub default_format: OutputFormat,

    /// Command prompt text
    pub prompt: String,

    /// Shelves and documents loaded at startup
    pub seed: Seed,

    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            prompt: DEFAULT_PROMPT.to_string(),
            seed: Seed::default(),
            source: None,
        }
    }
}

impl Config {
    /// Loads configuration from `explicit`, or from the default location
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "docshelf", "docshelf").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Reads and parses a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses config from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Registry;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(config.seed.documents.is_empty());
        assert!(config.source.is_none());
    }

    #[test]
    fn parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
default_format = "json"
prompt = "> "

[[seed.shelves]]
id = "1"
documents = ["2207 876234", "11-2"]

[[seed.shelves]]
id = "3"

[[seed.documents]]
type = "passport"
number = "2207 876234"
holder = "Vasily Gupkin"

[[seed.documents]]
type = "invoice"
number = "11-2"
holder = "Gennady Pokemonov"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.seed.shelves.len(), 2);
        assert!(config.seed.shelves[1].documents.is_empty());
        assert_eq!(config.seed.documents[0].doc_type, "passport");

        let registry = Registry::from_seed(&config.seed).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.shelf_of("11-2").unwrap().as_str(), "1");
    }

    #[test]
    fn parse_invalid_config() {
        let err = Config::parse("default_format = \"yaml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "prompt = \"? \"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.prompt, "? ");
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
