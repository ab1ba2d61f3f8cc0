//! Automatic / manual mode switch.
//!
//! Automatic ↔ Manual, guarded: ignition off, speed zero and switching
//! enabled (the engine lifecycle disables it from ignition until the engine
//! is fully off again). Rejected requests change nothing.

use dash_common::state::TransmissionMode;

/// Result of a mode request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Mode changed.
    Ok(TransmissionMode),
    /// Already in the requested mode.
    Unchanged,
    /// Guard failed.
    Rejected(&'static str),
}

/// Transmission mode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmissionModeController {
    mode: TransmissionMode,
    switching_enabled: bool,
}

impl Default for TransmissionModeController {
    fn default() -> Self {
        Self::new(TransmissionMode::Automatic)
    }
}

impl TransmissionModeController {
    pub const fn new(mode: TransmissionMode) -> Self {
        Self {
            mode,
            switching_enabled: true,
        }
    }

    #[inline]
    pub const fn mode(&self) -> TransmissionMode {
        self.mode
    }

    #[inline]
    pub const fn switching_enabled(&self) -> bool {
        self.switching_enabled
    }

    pub fn disable_switching(&mut self) {
        self.switching_enabled = false;
    }

    pub fn enable_switching(&mut self) {
        self.switching_enabled = true;
    }

    /// Request `target`.
    pub fn request(
        &mut self,
        target: TransmissionMode,
        ignition_on: bool,
        speed: u16,
    ) -> ModeTransition {
        if target == self.mode {
            return ModeTransition::Unchanged;
        }
        if ignition_on {
            return ModeTransition::Rejected("mode switch requires ignition off");
        }
        if speed != 0 {
            return ModeTransition::Rejected("mode switch requires standstill");
        }
        if !self.switching_enabled {
            return ModeTransition::Rejected("mode switch locked during engine ceremony");
        }
        self.mode = target;
        ModeTransition::Ok(target)
    }
}
