//! Static per-gear ramp profiles.
//!
//! Each forward gear owns a speed band ending at its `speed_ceiling`; the
//! bands partition `1..=MAX_SPEED` without gaps. Reverse has its own short
//! profile; park and neutral have none.
//!
//! The table is loaded once (built-in or from config) and never mutated.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{FORWARD_GEARS, MAX_SPEED};
use crate::state::Gear;

/// Ramp parameters for one gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearProfile {
    /// Gear this profile drives.
    pub gear: Gear,
    /// Highest speed reachable in this gear [km/h].
    pub speed_ceiling: u16,
    /// Interval between ramp ticks [ms].
    pub tick_interval_ms: u32,
    /// Speed added per ramp tick.
    #[serde(default = "default_tick_step")]
    pub tick_step: u16,
    /// Pause before the next gear's ramp begins [ms].
    #[serde(default)]
    pub post_shift_delay_ms: u32,
}

fn default_tick_step() -> u16 {
    1
}

impl GearProfile {
    const fn new(gear: Gear, speed_ceiling: u16, tick_interval_ms: u32, post_shift_delay_ms: u32) -> Self {
        Self {
            gear,
            speed_ceiling,
            tick_interval_ms,
            tick_step: 1,
            post_shift_delay_ms,
        }
    }
}

/// Built-in forward profiles. Ceilings are the published gear breakpoints.
const STANDARD_FORWARD: [GearProfile; FORWARD_GEARS] = [
    GearProfile::new(Gear::First, 80, 25, 300),
    GearProfile::new(Gear::Second, 140, 28, 300),
    GearProfile::new(Gear::Third, 200, 32, 350),
    GearProfile::new(Gear::Fourth, 250, 36, 350),
    GearProfile::new(Gear::Fifth, 300, 40, 400),
    GearProfile::new(Gear::Sixth, 350, 45, 400),
    GearProfile::new(Gear::Seventh, 380, 52, 450),
    GearProfile::new(Gear::Eighth, MAX_SPEED, 60, 0),
];

const STANDARD_REVERSE: GearProfile = GearProfile::new(Gear::Reverse, 30, 50, 0);

/// Immutable gear → profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearProfileTable {
    forward: [GearProfile; FORWARD_GEARS],
    reverse: GearProfile,
}

impl Default for GearProfileTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl GearProfileTable {
    /// The built-in table.
    pub const fn standard() -> Self {
        Self {
            forward: STANDARD_FORWARD,
            reverse: STANDARD_REVERSE,
        }
    }

    /// Build a table from configured profiles.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - the forward list does not hold exactly gears 1-8 in order
    /// - ceilings are not strictly increasing or the last is not `MAX_SPEED`
    /// - any interval or step is zero
    /// - the reverse profile is not for `R`
    pub fn from_profiles(
        forward: &[GearProfile],
        reverse: Option<GearProfile>,
    ) -> Result<Self, ConfigError> {
        if forward.len() != FORWARD_GEARS {
            return Err(ConfigError::ValidationError(format!(
                "expected {FORWARD_GEARS} forward gear profiles, got {}",
                forward.len()
            )));
        }

        let mut table = Self::standard();
        let mut previous_ceiling = 0u16;
        for (slot, (profile, expected)) in forward.iter().zip(Gear::FORWARD).enumerate() {
            if profile.gear != expected {
                return Err(ConfigError::ValidationError(format!(
                    "profile #{} is for gear {}, expected {}",
                    slot + 1,
                    profile.gear,
                    expected
                )));
            }
            if profile.speed_ceiling <= previous_ceiling {
                return Err(ConfigError::ValidationError(format!(
                    "gear {} ceiling {} must exceed {}",
                    profile.gear, profile.speed_ceiling, previous_ceiling
                )));
            }
            check_rates(profile)?;
            previous_ceiling = profile.speed_ceiling;
            table.forward[slot] = *profile;
        }

        if previous_ceiling != MAX_SPEED {
            return Err(ConfigError::ValidationError(format!(
                "top gear ceiling must be {MAX_SPEED}, got {previous_ceiling}"
            )));
        }

        if let Some(reverse) = reverse {
            if reverse.gear != Gear::Reverse {
                return Err(ConfigError::ValidationError(
                    "reverse profile must be for gear R".to_string(),
                ));
            }
            if reverse.speed_ceiling == 0 || reverse.speed_ceiling > MAX_SPEED {
                return Err(ConfigError::ValidationError(format!(
                    "reverse ceiling must be within 1..={MAX_SPEED}"
                )));
            }
            check_rates(&reverse)?;
            table.reverse = reverse;
        }

        Ok(table)
    }

    /// Profile for a gear; `None` for park and neutral.
    #[inline]
    pub fn profile(&self, gear: Gear) -> Option<&GearProfile> {
        match gear {
            Gear::Park | Gear::Neutral => None,
            Gear::Reverse => Some(&self.reverse),
            forward => forward
                .number()
                .and_then(|n| self.forward.get(usize::from(n) - 1)),
        }
    }

    /// Forward profiles in shift order.
    #[inline]
    pub fn forward(&self) -> &[GearProfile; FORWARD_GEARS] {
        &self.forward
    }

    /// Profile of the gear after `gear`, if any.
    pub fn next(&self, gear: Gear) -> Option<&GearProfile> {
        let number = gear.number()?;
        self.forward.get(usize::from(number))
    }

    /// Forward gear whose band contains `speed`.
    ///
    /// Zero maps to first gear (the gear a standing car pulls away in).
    pub fn gear_for_speed(&self, speed: u16) -> Gear {
        self.forward
            .iter()
            .find(|p| speed <= p.speed_ceiling)
            .map(|p| p.gear)
            .unwrap_or(Gear::Eighth)
    }

    /// Lowest speed of a forward gear's band.
    pub fn band_floor(&self, gear: Gear) -> Option<u16> {
        let number = usize::from(gear.number()?);
        if number == 1 {
            Some(1)
        } else {
            Some(self.forward[number - 2].speed_ceiling + 1)
        }
    }
}

fn check_rates(profile: &GearProfile) -> Result<(), ConfigError> {
    if profile.tick_interval_ms == 0 || profile.tick_step == 0 {
        return Err(ConfigError::ValidationError(format!(
            "gear {} needs a non-zero tick interval and step",
            profile.gear
        )));
    }
    Ok(())
}
