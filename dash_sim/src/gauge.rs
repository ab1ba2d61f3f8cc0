//! Tachometer and oil-temperature readings.
//!
//! RPM is an estimate: each forward gear scales linearly from idle to its
//! redline ratio over the full speed scale. The needles themselves belong to
//! the renderer.

use dash_common::consts::{
    GEAR_RPM_RATIOS, IDLE_RPM, MAX_RPM, MAX_SPEED, OIL_TEMP_OPERATING,
};
use dash_common::state::Gear;

/// RPM shown for `speed` in `gear`.
///
/// Park and neutral idle while the ignition is on and read zero otherwise.
/// Reverse uses first gear's ratio.
pub fn rpm_estimate(speed: u16, gear: Gear, ignition_on: bool) -> u32 {
    let ratio = match gear {
        Gear::Park | Gear::Neutral => {
            return if ignition_on { IDLE_RPM } else { 0 };
        }
        Gear::Reverse => GEAR_RPM_RATIOS[0],
        forward => match forward.number() {
            Some(n) => GEAR_RPM_RATIOS[usize::from(n) - 1],
            None => return 0,
        },
    };

    let speed = u32::from(speed.min(MAX_SPEED));
    let rpm = IDLE_RPM + (ratio - IDLE_RPM) * speed / u32::from(MAX_SPEED);
    rpm.min(MAX_RPM)
}

/// RPM shown during the ignition sweep: proportional to the speed needle.
pub fn sweep_rpm(speed: u16) -> u32 {
    MAX_RPM * u32::from(speed.min(MAX_SPEED)) / u32::from(MAX_SPEED)
}

/// Displayed gauge values outside the speedometer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gauges {
    pub rpm: u32,
    pub oil_temp: u16,
}

impl Gauges {
    /// One warm-up step; saturates at operating temperature.
    pub fn warm(&mut self) {
        self.oil_temp = (self.oil_temp + 1).min(OIL_TEMP_OPERATING);
    }

    /// Zero both needles.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
