//! TUI configuration loaded from TOML and overridden by CLI flags.

use crate::app::Focus;
use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Configuration for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show cell numbers on empty squares.
    #[serde(default)]
    show_indices: bool,

    /// Pane that has keyboard focus at startup.
    #[serde(default)]
    first_focus: Focus,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_indices: false,
            first_focus: Focus::default(),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file if one is given, else [`DEFAULT_CONFIG_PATH`]
    /// when it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(log_filter) = &cli.log_filter {
            self.log_filter = log_filter.clone();
        }
        if cli.show_indices {
            self.show_indices = true;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_parse_all_fields() {
        let config = TuiConfig::from_toml(
            r#"
            log_file = "/tmp/rewind-test.log"
            log_filter = "rewind_tictactoe=debug"
            show_indices = true
            first_focus = "history"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
        assert_eq!(config.log_filter(), "rewind_tictactoe=debug");
        assert!(*config.show_indices());
        assert_eq!(*config.first_focus(), Focus::History);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TuiConfig::from_toml("show_index = true").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"warn\"").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = TuiConfig::load(Some(&missing)).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli {
            log_filter: Some("trace".to_string()),
            show_indices: true,
            ..Cli::default()
        };
        let config = TuiConfig::from_toml("log_filter = \"warn\"")
            .unwrap()
            .with_cli(&cli);
        assert_eq!(config.log_filter(), "trace");
        assert!(*config.show_indices());
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
    }
}
