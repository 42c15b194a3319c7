//! CLI configuration: a thin wrapper around `natsmon_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--config, --output, --color).

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use natsmon_config::{Config, config_path, init_config_at, load_config_from, to_toml};

// ── CLI-specific helpers ────────────────────────────────────────────

/// The config file in effect: `--config` / `NATSMON_CONFIG`, else the platform path.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load the config file in effect, layered with environment overrides.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = active_config_path(global);
    tracing::debug!(path = %path.display(), "loading config");
    Ok(load_config_from(&path)?)
}

/// Output format: flag > config > table.
pub fn resolve_output(global: &GlobalOpts, cfg: &Config) -> Result<OutputFormat, CliError> {
    if let Some(ref format) = global.output {
        return Ok(format.clone());
    }
    OutputFormat::from_str(&cfg.defaults.output, true).map_err(|_| CliError::Validation {
        field: "defaults.output".into(),
        reason: format!(
            "expected table, json, json-compact, yaml, or plain, got '{}'",
            cfg.defaults.output
        ),
    })
}

/// Color mode: flag > config > auto.
pub fn resolve_color(global: &GlobalOpts, cfg: &Config) -> Result<ColorMode, CliError> {
    if let Some(ref mode) = global.color {
        return Ok(mode.clone());
    }
    ColorMode::from_str(&cfg.defaults.color, true).map_err(|_| CliError::Validation {
        field: "defaults.color".into(),
        reason: format!(
            "expected auto, always, or never, got '{}'",
            cfg.defaults.color
        ),
    })
}
