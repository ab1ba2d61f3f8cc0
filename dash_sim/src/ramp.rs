//! Speed ramp: the scalar speed and the phase that moves it.
//!
//! `SpeedRamp` only does the arithmetic of one tick. Choosing profiles,
//! arming timers and reacting to [`TickOutcome`]s is the simulation's job.
//!
//! Speed is an integer in `0..=MAX_SPEED`; every delta saturates at the
//! active bound instead of wrapping or failing.

use dash_common::consts::MAX_SPEED;
use dash_common::profile::GearProfile;

/// What to do once a deceleration reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Nothing.
    None,
    /// The ignition sweep is over.
    SweepFinished,
}

/// Which way the ramp is pushing speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampDirection {
    /// No ramp (holding, waiting or stopped).
    Idle,
    Accelerating,
    Decelerating,
}

/// Current ramp phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampPhase {
    /// Nothing scheduled.
    Idle,
    /// Climbing toward `profile.speed_ceiling`.
    Accelerating { profile: GearProfile },
    /// Ceiling reached, shift delay pending before `next` takes over.
    AwaitingShift { next: GearProfile },
    /// Ceiling reached with no further gear to take (manual mode or top gear).
    Holding { profile: GearProfile },
    /// Speed above the selected gear's ceiling; decaying to it.
    Downshifting { profile: GearProfile },
    /// Falling by `step` toward zero.
    Decelerating {
        step: u16,
        interval_ms: u32,
        completion: Completion,
    },
    /// Ignition sweep climbing to `MAX_SPEED`.
    Sweep { step: u16, interval_ms: u32 },
}

impl RampPhase {
    /// Whether the phase is driven by the throttle.
    #[inline]
    pub const fn is_throttle_driven(&self) -> bool {
        matches!(
            self,
            Self::Accelerating { .. }
                | Self::AwaitingShift { .. }
                | Self::Holding { .. }
                | Self::Downshifting { .. }
        )
    }
}

/// Result of one ramp tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Speed moved and the ramp continues.
    Moved,
    /// The phase does not tick.
    Idle,
    /// An upward ramp hit its ceiling.
    CeilingReached,
    /// A downshift decay is back within the gear's ceiling.
    WithinCeiling,
    /// A deceleration reached zero.
    Stopped(Completion),
}

/// Speed value plus the phase moving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRamp {
    speed: u16,
    phase: RampPhase,
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedRamp {
    pub const fn new() -> Self {
        Self {
            speed: 0,
            phase: RampPhase::Idle,
        }
    }

    #[inline]
    pub const fn speed(&self) -> u16 {
        self.speed
    }

    #[inline]
    pub const fn phase(&self) -> RampPhase {
        self.phase
    }

    /// Direction implied by the phase.
    pub const fn direction(&self) -> RampDirection {
        match self.phase {
            RampPhase::Accelerating { .. } | RampPhase::Sweep { .. } => RampDirection::Accelerating,
            RampPhase::Decelerating { .. } | RampPhase::Downshifting { .. } => {
                RampDirection::Decelerating
            }
            RampPhase::Idle | RampPhase::AwaitingShift { .. } | RampPhase::Holding { .. } => {
                RampDirection::Idle
            }
        }
    }

    /// Tick interval of the active phase, `None` if it does not tick.
    pub const fn interval_ms(&self, downshift_interval_ms: u32) -> Option<u32> {
        match self.phase {
            RampPhase::Accelerating { profile } => Some(profile.tick_interval_ms),
            RampPhase::Downshifting { .. } => Some(downshift_interval_ms),
            RampPhase::Decelerating { interval_ms, .. } | RampPhase::Sweep { interval_ms, .. } => {
                Some(interval_ms)
            }
            RampPhase::Idle | RampPhase::AwaitingShift { .. } | RampPhase::Holding { .. } => None,
        }
    }

    pub fn begin_forward(&mut self, profile: GearProfile) {
        self.phase = RampPhase::Accelerating { profile };
    }

    pub fn begin_downshift(&mut self, profile: GearProfile) {
        self.phase = RampPhase::Downshifting { profile };
    }

    pub fn begin_decel(&mut self, step: u16, interval_ms: u32, completion: Completion) {
        self.phase = RampPhase::Decelerating {
            step,
            interval_ms,
            completion,
        };
    }

    pub fn begin_sweep(&mut self, step: u16, interval_ms: u32) {
        self.phase = RampPhase::Sweep { step, interval_ms };
    }

    pub fn await_shift(&mut self, next: GearProfile) {
        self.phase = RampPhase::AwaitingShift { next };
    }

    pub fn hold(&mut self, profile: GearProfile) {
        self.phase = RampPhase::Holding { profile };
    }

    /// Drop the phase, keeping the speed.
    pub fn stop(&mut self) {
        self.phase = RampPhase::Idle;
    }

    /// Zero speed and phase (engine-off reset).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the active phase by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            RampPhase::Accelerating { profile } => {
                let ceiling = profile.speed_ceiling.min(MAX_SPEED);
                if self.speed >= ceiling {
                    return TickOutcome::CeilingReached;
                }
                self.speed = self.speed.saturating_add(profile.tick_step).min(ceiling);
                if self.speed >= ceiling {
                    TickOutcome::CeilingReached
                } else {
                    TickOutcome::Moved
                }
            }
            RampPhase::Downshifting { profile } => {
                let ceiling = profile.speed_ceiling;
                if self.speed <= ceiling {
                    return TickOutcome::WithinCeiling;
                }
                self.speed = self.speed.saturating_sub(profile.tick_step).max(ceiling);
                if self.speed <= ceiling {
                    TickOutcome::WithinCeiling
                } else {
                    TickOutcome::Moved
                }
            }
            RampPhase::Decelerating {
                step, completion, ..
            } => {
                self.speed = self.speed.saturating_sub(step);
                if self.speed == 0 {
                    self.phase = RampPhase::Idle;
                    TickOutcome::Stopped(completion)
                } else {
                    TickOutcome::Moved
                }
            }
            RampPhase::Sweep { step, .. } => {
                self.speed = self.speed.saturating_add(step).min(MAX_SPEED);
                if self.speed >= MAX_SPEED {
                    TickOutcome::CeilingReached
                } else {
                    TickOutcome::Moved
                }
            }
            RampPhase::Idle | RampPhase::AwaitingShift { .. } | RampPhase::Holding { .. } => {
                TickOutcome::Idle
            }
        }
    }
}
