//! Prelude module for common re-exports.
//!
//! ```rust
//! use dash_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{CYCLE_TIME_MS, MAX_RPM, MAX_SPEED};

// ─── State ──────────────────────────────────────────────────────────
pub use crate::profile::{GearProfile, GearProfileTable};
pub use crate::settings::{Settings, SettingsStore};
pub use crate::state::{EngineState, Gear, TransmissionMode};
