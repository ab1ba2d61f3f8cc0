//! Gear selection and gear-change edge detection.
//!
//! Automatic mode derives the gear from speed; manual mode takes it from the
//! lever. Either way a change is announced exactly once, when the new gear
//! differs from the current one.

use dash_common::profile::GearProfileTable;
use dash_common::state::{Gear, TransmissionMode};

use crate::ramp::RampDirection;

/// Gear implied by `speed` in automatic mode.
///
/// Standing still reads neutral with the ignition on and park with it off.
pub fn derive_gear_from_speed(table: &GearProfileTable, speed: u16, ignition_on: bool) -> Gear {
    if speed == 0 {
        if ignition_on { Gear::Neutral } else { Gear::Park }
    } else {
        table.gear_for_speed(speed)
    }
}

/// Whether a change into `to` plays the shift cue.
///
/// Decelerating: always. Accelerating: only the engagement of first gear or
/// any manual shift. Outside a ramp (ignition, mode seed): always.
pub fn shift_cue_allowed(to: Gear, mode: TransmissionMode, direction: RampDirection) -> bool {
    match direction {
        RampDirection::Accelerating => to == Gear::First || mode == TransmissionMode::Manual,
        RampDirection::Decelerating | RampDirection::Idle => true,
    }
}

/// An announced gear change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearChange {
    pub from: Gear,
    pub to: Gear,
    /// Play the shift cue.
    pub shift_cue: bool,
    /// Ask the lever display to follow (automatic mode only).
    pub animate_lever: bool,
}

/// Result of a lever input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeverResult {
    /// Lever position taken; carries the change if the gear moved.
    Accepted(Option<GearChange>),
    /// Input ignored.
    Rejected(&'static str),
}

/// Current gear with edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearSelector {
    current: Gear,
}

impl Default for GearSelector {
    fn default() -> Self {
        Self::new(Gear::Park)
    }
}

impl GearSelector {
    pub const fn new(initial: Gear) -> Self {
        Self { current: initial }
    }

    #[inline]
    pub const fn current(&self) -> Gear {
        self.current
    }

    /// Set the gear; returns the change if it differs from the current one.
    pub fn apply(
        &mut self,
        gear: Gear,
        mode: TransmissionMode,
        direction: RampDirection,
    ) -> Option<GearChange> {
        if gear == self.current {
            return None;
        }
        let change = GearChange {
            from: self.current,
            to: gear,
            shift_cue: shift_cue_allowed(gear, mode, direction),
            animate_lever: mode == TransmissionMode::Automatic,
        };
        self.current = gear;
        Some(change)
    }

    /// Recompute from speed. No-op in manual mode.
    pub fn follow_speed(
        &mut self,
        table: &GearProfileTable,
        speed: u16,
        ignition_on: bool,
        mode: TransmissionMode,
        direction: RampDirection,
    ) -> Option<GearChange> {
        match mode {
            TransmissionMode::Automatic => {
                self.apply(derive_gear_from_speed(table, speed, ignition_on), mode, direction)
            }
            TransmissionMode::Manual => None,
        }
    }

    /// Take a gear from the lever. Only manual mode listens to the lever.
    pub fn on_manual_lever_moved(
        &mut self,
        token: &str,
        mode: TransmissionMode,
        direction: RampDirection,
    ) -> LeverResult {
        if mode != TransmissionMode::Manual {
            return LeverResult::Rejected("lever ignored in automatic mode");
        }
        match Gear::from_token(token) {
            Some(gear) => LeverResult::Accepted(self.apply(gear, mode, direction)),
            None => LeverResult::Rejected("unknown lever position"),
        }
    }
}
