//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{AuditSink, JsonLinesSink, NullSink, Player, TracingSink};
use tracing::{debug, info, instrument};

/// Where audit entries are forwarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// INFO events on the `audit` tracing target.
    #[default]
    Tracing,
    /// One JSON object per line on stderr.
    Stderr,
    /// Nowhere; the engine's in-memory log still keeps them.
    None,
}

/// Configuration for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Player who opens the first round.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Audit sink selection.
    #[serde(default)]
    audit_sink: SinkKind,

    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_player() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            first_player: default_first_player(),
            audit_sink: SinkKind::default(),
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = %config.first_player, sink = ?config.audit_sink, "Config loaded");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Builds the configured audit sink.
    #[instrument(skip(self), fields(sink = ?self.audit_sink))]
    pub fn build_sink(&self) -> Box<dyn AuditSink> {
        match self.audit_sink {
            SinkKind::Tracing => Box::new(TracingSink),
            SinkKind::Stderr => Box::new(JsonLinesSink::new(std::io::stderr())),
            SinkKind::None => Box::new(NullSink),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
