//! Timed input scripts.
//!
//! A script is a TOML list of inputs stamped with a virtual time. The runner
//! steps the simulation up to each stamp, applies the input and finally runs
//! `tail_ms` more cycles.
//!
//! ```toml
//! tail_ms = 2000
//!
//! [[step]]
//! at_ms = 0
//! input = "ignition"
//!
//! [[step]]
//! at_ms = 2500
//! input = "throttle_press"
//!
//! [[step]]
//! at_ms = 6000
//! input = "lever"
//! gear = "3"
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use dash_common::consts::CYCLE_TIME_MS;
use dash_common::state::{Gear, TransmissionMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::EngineTransition;
use crate::gear::LeverResult;
use crate::sim::{InputOutcome, Simulation};
use crate::sink::{LeverDisplay, RenderSink, SoundSink};
use crate::transmission::ModeTransition;

/// Script loading errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(String),

    #[error("step {index} at {at_ms} ms is earlier than the step before it")]
    OutOfOrder { index: usize, at_ms: u64 },

    #[error("step {index}: lever input needs a valid `gear` token")]
    MissingGear { index: usize },
}

/// Input applied by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Ignition,
    ThrottlePress,
    ThrottleRelease,
    BrakePress,
    BrakeRelease,
    Lever,
    /// Switch to `mode`, or toggle when absent.
    Mode,
}

/// One timed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_ms: u64,
    pub input: InputKind,
    #[serde(default)]
    pub gear: Option<String>,
    #[serde(default)]
    pub mode: Option<TransmissionMode>,
}

/// Ordered list of timed inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<ScriptStep>,
    /// Cycles to run after the last step.
    #[serde(default)]
    pub tail_ms: u64,
}

impl Script {
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: Script =
            toml::from_str(content).map_err(|e| ScriptError::Parse(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Steps must be in time order; lever steps need a gear token.
    pub fn validate(&self) -> Result<(), ScriptError> {
        let mut last = 0;
        for (index, step) in self.steps.iter().enumerate() {
            if step.at_ms < last {
                return Err(ScriptError::OutOfOrder {
                    index,
                    at_ms: step.at_ms,
                });
            }
            last = step.at_ms;
            if step.input == InputKind::Lever
                && step.gear.as_deref().and_then(Gear::from_token).is_none()
            {
                return Err(ScriptError::MissingGear { index });
            }
        }
        Ok(())
    }

    /// Virtual time the script needs, tail included.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map_or(0, |s| s.at_ms) + self.tail_ms
    }
}

/// Wall-clock pacing of the virtual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// As fast as possible.
    Unpaced,
    /// One cycle per `CYCLE_TIME_MS` of wall time.
    RealTime,
}

/// Summary of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    pub steps: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Paced cycles that overran their slot.
    pub overruns: u64,
}

/// Play `script` against `sim`.
pub fn run<R, S, L>(
    script: &Script,
    sim: &mut Simulation<R, S, L>,
    pacing: Pacing,
) -> ScriptReport
where
    R: RenderSink,
    S: SoundSink,
    L: LeverDisplay,
{
    let start = sim.now_ms();
    let mut clock = Clock::new(pacing);
    let mut report = ScriptReport {
        steps: script.steps.len(),
        ..ScriptReport::default()
    };

    info!(steps = report.steps, duration_ms = script.duration_ms(), "Running script");
    for step in &script.steps {
        let due = start + step.at_ms;
        while sim.now_ms() < due {
            clock.cycle(|| sim.step());
        }
        if apply(step, sim) {
            report.accepted += 1;
        } else {
            report.rejected += 1;
        }
    }

    let end = sim.now_ms() + script.tail_ms;
    while sim.now_ms() < end {
        clock.cycle(|| sim.step());
    }

    report.overruns = clock.overruns;
    if report.overruns > 0 {
        warn!(overruns = report.overruns, "Paced cycles overran");
    }
    report
}

/// Apply one step. Returns whether the input was accepted.
fn apply<R, S, L>(step: &ScriptStep, sim: &mut Simulation<R, S, L>) -> bool
where
    R: RenderSink,
    S: SoundSink,
    L: LeverDisplay,
{
    debug!(at_ms = sim.now_ms(), input = ?step.input, "Script input");
    match step.input {
        InputKind::Ignition => !matches!(sim.toggle_engine(), EngineTransition::Rejected(_)),
        InputKind::ThrottlePress => sim.press_throttle() == InputOutcome::Accepted,
        InputKind::ThrottleRelease => sim.release_throttle() == InputOutcome::Accepted,
        InputKind::BrakePress => sim.press_brake() == InputOutcome::Accepted,
        InputKind::BrakeRelease => sim.release_brake() == InputOutcome::Accepted,
        InputKind::Lever => {
            let token = step.gear.as_deref().unwrap_or_default();
            matches!(sim.move_lever(token), LeverResult::Accepted(_))
        }
        InputKind::Mode => {
            let result = match step.mode {
                Some(mode) => sim.switch_mode(mode),
                None => sim.toggle_mode(),
            };
            !matches!(result, ModeTransition::Rejected(_))
        }
    }
}

struct Clock {
    pacing: Pacing,
    cycle: Duration,
    overruns: u64,
}

impl Clock {
    fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            cycle: Duration::from_millis(CYCLE_TIME_MS),
            overruns: 0,
        }
    }

    fn cycle(&mut self, body: impl FnOnce()) {
        match self.pacing {
            Pacing::Unpaced => body(),
            Pacing::RealTime => {
                let cycle_start = Instant::now();
                body();
                match self.cycle.checked_sub(cycle_start.elapsed()) {
                    Some(remaining) => std::thread::sleep(remaining),
                    None => self.overruns += 1,
                }
            }
        }
    }
}
