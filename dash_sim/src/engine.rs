//! Engine ignition lifecycle.
//!
//! Off → StartingUp → Running → ShuttingDown → Off.
//!
//! StartingUp has two steps: the start cue plays, then the needle sweep runs.
//! Timers and the sweep itself live in the simulation; this machine only
//! validates the order of events.

use dash_common::state::EngineState;

/// Lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Ignition button.
    Toggle,
    /// Start-cue delay over; sweep begins.
    StartCueElapsed,
    /// Sweep back at zero.
    SweepComplete,
    /// Shutdown delay over.
    ShutdownElapsed,
}

/// Step within StartingUp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupStep {
    StartCue,
    Sweep,
}

/// Result of an engine event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineTransition {
    /// State changed.
    Ok(EngineState),
    /// Same state, next startup step.
    StepAdvanced(StartupStep),
    /// Event not valid now.
    Rejected(&'static str),
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLifecycle {
    state: EngineState,
    step: Option<StartupStep>,
}

impl Default for EngineLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineLifecycle {
    pub const fn new() -> Self {
        Self {
            state: EngineState::Off,
            step: None,
        }
    }

    #[inline]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running)
    }

    /// Apply `event` given the current speed.
    pub fn handle_event(&mut self, event: EngineEvent, speed: u16) -> EngineTransition {
        use EngineEvent::*;
        use EngineState::*;

        let next = match (self.state, event) {
            (Off | Running, Toggle) if speed != 0 => {
                return EngineTransition::Rejected("ignition locked while moving");
            }
            (state, Toggle) if state.is_transitioning() => {
                return EngineTransition::Rejected("engine ceremony in progress");
            }
            (Off, Toggle) => {
                self.step = Some(StartupStep::StartCue);
                StartingUp
            }
            (Running, Toggle) => ShuttingDown,

            (StartingUp, StartCueElapsed) if self.step == Some(StartupStep::StartCue) => {
                self.step = Some(StartupStep::Sweep);
                return EngineTransition::StepAdvanced(StartupStep::Sweep);
            }
            (StartingUp, SweepComplete) if self.step == Some(StartupStep::Sweep) => {
                self.step = None;
                Running
            }
            (ShuttingDown, ShutdownElapsed) => Off,

            _ => return EngineTransition::Rejected(invalid_event_reason(self.state, event)),
        };

        self.state = next;
        EngineTransition::Ok(next)
    }
}

const fn invalid_event_reason(state: EngineState, event: EngineEvent) -> &'static str {
    match (state, event) {
        (EngineState::StartingUp, EngineEvent::StartCueElapsed) => "start cue already elapsed",
        (EngineState::StartingUp, EngineEvent::SweepComplete) => "sweep not running",
        (_, EngineEvent::StartCueElapsed | EngineEvent::SweepComplete) => "engine not starting",
        (_, EngineEvent::ShutdownElapsed) => "engine not shutting down",
        (_, EngineEvent::Toggle) => "invalid ignition toggle",
    }
}
