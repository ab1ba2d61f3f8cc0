//! TOML configuration plumbing shared by the dashboard crates.
//!
//! Every config struct gets [`ConfigLoader`] for free through a blanket impl;
//! callers only add their own `validate()` on top.
//!
//! ```rust,no_run
//! use dash_common::config::{ConfigError, ConfigLoader, SharedConfig};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct Dash {
//!     shared: SharedConfig,
//!     start_cue_delay_ms: u32,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let dash = Dash::load_or_default(Path::new("config/dash.toml"))?;
//!     dash.shared.validate()?;
//!     Ok(())
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("configuration file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read configuration file {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("malformed configuration: {0}")]
    ParseError(String),

    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Verbosity of the simulation logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every ramp tick and timer.
    Trace,
    /// Rejected inputs and gear edges.
    Debug,
    /// Engine lifecycle transitions.
    #[default]
    Info,
    /// Audio failures.
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The more verbose of `self` and `other`.
    pub fn at_least(self, other: Self) -> Self {
        self.min(other)
    }
}

/// `[shared]` section: fields every dashboard binary reads.
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "dash-sim-bench"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedConfig {
    pub log_level: LogLevel,
    /// Name shown in the startup banner.
    pub service_name: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            service_name: String::from("dash-sim"),
        }
    }
}

impl SharedConfig {
    /// The service name must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(String::from(
                "shared.service_name must not be blank",
            )));
        }
        Ok(())
    }
}

/// TOML loading for any deserializable config type.
///
/// A missing file is reported as [`ConfigError::FileNotFound`] so callers
/// can fall back to defaults; any other read failure is `Unreadable`.
pub trait ConfigLoader: Sized + DeserializeOwned {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => Err(ConfigError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Like [`load`](Self::load), but a missing file yields `Self::default()`.
    fn load_or_default(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Default,
    {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }
}

impl<T: DeserializeOwned> ConfigLoader for T {}
