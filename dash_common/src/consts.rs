//! System-wide constants for the dashboard workspace.
//!
//! Single source of truth for speed, RPM and timing limits.
//! Imported by both crates.

use static_assertions::const_assert;

/// Top of the speedometer scale [km/h].
pub const MAX_SPEED: u16 = 400;

/// Number of forward gears.
pub const FORWARD_GEARS: usize = 8;

/// Engine idle speed [rpm].
pub const IDLE_RPM: u32 = 800;

/// Top of the tachometer scale [rpm].
pub const MAX_RPM: u32 = 10_500;

/// Redline reached by each forward gear at `MAX_SPEED` [rpm], gear 1 first.
pub const GEAR_RPM_RATIOS: [u32; FORWARD_GEARS] =
    [3500, 4500, 5500, 6500, 7500, 8500, 9500, 10_500];

/// Oil temperature once the engine is warm [°C].
pub const OIL_TEMP_OPERATING: u16 = 90;

/// Simulation cycle length [ms].
pub const CYCLE_TIME_MS: u64 = 1;

/// Maximum number of simultaneously armed timers.
pub const MAX_TIMERS: usize = 8;

// ─── Ramp Defaults ──────────────────────────────────────────────────

/// Speed removed per coasting tick.
pub const DEFAULT_DECEL_STEP: u16 = 1;

/// Coasting tick interval [ms].
pub const DEFAULT_DECEL_INTERVAL_MS: u32 = 50;

/// Braking tick interval [ms].
pub const BRAKE_INTERVAL_MS: u32 = 15;

/// Interval of the forced-downshift decay [ms].
pub const DOWNSHIFT_INTERVAL_MS: u32 = 20;

/// Speed moved per tick during the ignition gauge sweep.
pub const SWEEP_STEP: u16 = 4;

/// Gauge sweep tick interval [ms].
pub const SWEEP_INTERVAL_MS: u32 = 7;

// ─── Engine Lifecycle ───────────────────────────────────────────────

/// Delay between the start cue and the gauge sweep [ms].
pub const START_CUE_DELAY_MS: u32 = 800;

/// Delay between ignition off and the gauge reset [ms].
pub const SHUTDOWN_DELAY_MS: u32 = 1000;

/// Oil warm-up period, one degree per period [ms].
pub const OIL_WARMUP_PERIOD_MS: u32 = 1000;

// ─── Settings ───────────────────────────────────────────────────────

/// Default master volume.
pub const DEFAULT_VOLUME: u8 = 70;

/// Upper bound of the volume setting.
pub const MAX_VOLUME: u8 = 100;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/dash.toml";

/// Default settings file name.
pub const DEFAULT_SETTINGS_FILE: &str = "dash_settings.toml";

const_assert!(MAX_SPEED > 0);
const_assert!(GEAR_RPM_RATIOS[FORWARD_GEARS - 1] == MAX_RPM);
const_assert!(IDLE_RPM < GEAR_RPM_RATIOS[0]);
const_assert!(DEFAULT_VOLUME <= MAX_VOLUME);
const_assert!(SWEEP_STEP > 0 && DEFAULT_DECEL_STEP > 0);
