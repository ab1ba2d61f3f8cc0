//! Simulation configuration (TOML).
//!
//! Every section is optional; an empty file yields the built-in timings and
//! gear table.
//!
//! ```toml
//! mode = "manual"
//!
//! [shared]
//! log_level = "debug"
//! service_name = "dash-sim"
//!
//! [timing]
//! brake_interval_ms = 15
//! coast_interval_ms = 50
//!
//! [[gears]]
//! gear = "1"
//! speed_ceiling = 80
//! tick_interval_ms = 25
//! post_shift_delay_ms = 300
//! # ... gears 2-8
//!
//! [settings]
//! path = "dash_settings.toml"
//! ```

use std::path::{Path, PathBuf};

use dash_common::config::{ConfigError, ConfigLoader, SharedConfig};
use dash_common::consts::{
    BRAKE_INTERVAL_MS, DEFAULT_DECEL_INTERVAL_MS, DEFAULT_DECEL_STEP, DEFAULT_SETTINGS_FILE,
    DOWNSHIFT_INTERVAL_MS, MAX_SPEED, OIL_WARMUP_PERIOD_MS, SHUTDOWN_DELAY_MS,
    START_CUE_DELAY_MS, SWEEP_INTERVAL_MS, SWEEP_STEP,
};
use dash_common::profile::{GearProfile, GearProfileTable};
use dash_common::state::TransmissionMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ─── Timing ─────────────────────────────────────────────────────────

/// Ramp and lifecycle timings [ms].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub start_cue_delay_ms: u32,
    pub shutdown_delay_ms: u32,
    pub brake_interval_ms: u32,
    pub decel_step: u16,
    pub coast_interval_ms: u32,
    pub downshift_interval_ms: u32,
    pub sweep_step: u16,
    pub sweep_interval_ms: u32,
    pub oil_warmup_period_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_cue_delay_ms: START_CUE_DELAY_MS,
            shutdown_delay_ms: SHUTDOWN_DELAY_MS,
            brake_interval_ms: BRAKE_INTERVAL_MS,
            decel_step: DEFAULT_DECEL_STEP,
            coast_interval_ms: DEFAULT_DECEL_INTERVAL_MS,
            downshift_interval_ms: DOWNSHIFT_INTERVAL_MS,
            sweep_step: SWEEP_STEP,
            sweep_interval_ms: SWEEP_INTERVAL_MS,
            oil_warmup_period_ms: OIL_WARMUP_PERIOD_MS,
        }
    }
}

impl TimingConfig {
    /// Reject zero tick intervals and steps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("brake_interval_ms", self.brake_interval_ms),
            ("coast_interval_ms", self.coast_interval_ms),
            ("downshift_interval_ms", self.downshift_interval_ms),
            ("sweep_interval_ms", self.sweep_interval_ms),
            ("oil_warmup_period_ms", self.oil_warmup_period_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::ValidationError(format!(
                "timing.{name} must be > 0"
            )));
        }
        for (name, step) in [("decel_step", self.decel_step), ("sweep_step", self.sweep_step)] {
            if step == 0 || step > MAX_SPEED {
                return Err(ConfigError::ValidationError(format!(
                    "timing.{name} must be within 1..={MAX_SPEED}"
                )));
            }
        }
        Ok(())
    }
}

// ─── Settings Location ──────────────────────────────────────────────

/// Where the audio settings live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub path: PathBuf,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SETTINGS_FILE),
        }
    }
}

// ─── Top-level Config ───────────────────────────────────────────────

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub shared: SharedConfig,
    pub timing: TimingConfig,
    /// Forward gear overrides; empty keeps the standard table.
    pub gears: Vec<GearProfile>,
    pub reverse: Option<GearProfile>,
    pub settings: SettingsConfig,
    /// Transmission mode at power-up.
    pub mode: TransmissionMode,
}

impl SimConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.timing.validate()?;
        self.profile_table().map(|_| ())
    }

    /// Build the gear table from the overrides.
    pub fn profile_table(&self) -> Result<GearProfileTable, ConfigError> {
        match (self.gears.is_empty(), self.reverse) {
            (true, None) => Ok(GearProfileTable::standard()),
            (true, Some(reverse)) => {
                GearProfileTable::from_profiles(GearProfileTable::standard().forward(), Some(reverse))
            }
            (false, reverse) => GearProfileTable::from_profiles(&self.gears, reverse),
        }
    }
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<SimConfig, ConfigError> {
    debug!("Loading configuration from {}", path.display());
    let config = SimConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate configuration text (for testing).
pub fn load_config_from_str(content: &str) -> Result<SimConfig, ConfigError> {
    let config = SimConfig::from_toml(content)?;
    config.validate()?;
    Ok(config)
}
