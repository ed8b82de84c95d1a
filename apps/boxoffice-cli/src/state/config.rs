//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOXOFFICE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// How command results are printed.
    pub output: OutputFormat,

    /// Print the welcome banner when the session starts.
    pub banner: bool,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report lines
    #[default]
    Text,

    /// One JSON document per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Default for ConfigState {
    /// Text output with the banner on.
    fn default() -> Self {
        ConfigState {
            output: OutputFormat::Text,
            banner: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOXOFFICE_OUTPUT`: `text` or `json`
    /// - `BOXOFFICE_BANNER`: `true` or `false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Invalid values are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("BOXOFFICE_OUTPUT") {
            match raw.parse::<OutputFormat>() {
                Ok(output) => config.output = output,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring BOXOFFICE_OUTPUT"),
            }
        }

        if let Some(raw) = lookup("BOXOFFICE_BANNER") {
            match raw.trim().parse::<bool>() {
                Ok(banner) => config.banner = banner,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring BOXOFFICE_BANNER"),
            }
        }

        config
    }
}
