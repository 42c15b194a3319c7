//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use natsmon_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    /// Input data was malformed (sysexits `EX_DATAERR`).
    pub const DATA: i32 = 65;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Snapshots ────────────────────────────────────────────────────
    #[error("Snapshot file not found: {path}")]
    #[diagnostic(
        code(natsmon::snapshot_not_found),
        help(
            "Save a snapshot first, e.g.\n\
             curl -s http://localhost:8222/varz > varz.json"
        )
    )]
    SnapshotNotFound { path: String },

    #[error("Could not decode snapshot {path}")]
    #[diagnostic(
        code(natsmon::invalid_snapshot),
        help("Check that the file holds the JSON body of the matching monitoring endpoint.")
    )]
    InvalidSnapshot {
        path: String,
        #[source]
        source: natsmon_core::CoreError,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(natsmon::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(natsmon::config))]
    Config(Box<figment::Error>),

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(
        code(natsmon::config_exists),
        help("Use --force to overwrite it with defaults.")
    )]
    ConfigExists { path: String },

    #[error("Failed to write configuration: {0}")]
    #[diagnostic(code(natsmon::config_write))]
    ConfigWrite(String),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Figment(inner) => Self::Config(inner),
            ConfigError::AlreadyExists { path } => Self::ConfigExists {
                path: path.display().to_string(),
            },
            ConfigError::Io(io) => Self::Io(io),
            ConfigError::Serialization(ser) => Self::ConfigWrite(ser.to_string()),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SnapshotNotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidSnapshot { .. } => exit_code::DATA,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(
            CliError::SnapshotNotFound { path: "x".into() }.exit_code(),
            exit_code::NOT_FOUND
        );
        assert_eq!(
            CliError::Validation {
                field: "size".into(),
                reason: "bad".into()
            }
            .exit_code(),
            exit_code::USAGE
        );
        assert_eq!(
            CliError::Io(std::io::Error::other("boom")).exit_code(),
            exit_code::GENERAL
        );
    }

    #[test]
    fn config_exists_maps_from_config_error() {
        let err: CliError = ConfigError::AlreadyExists {
            path: "/tmp/natsmon.toml".into(),
        }
        .into();
        assert!(matches!(err, CliError::ConfigExists { ref path } if path == "/tmp/natsmon.toml"));
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
