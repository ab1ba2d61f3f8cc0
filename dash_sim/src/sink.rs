//! Output collaborators: renderer, audio and the gear-lever display.
//!
//! The simulation owns exactly one of each and calls them synchronously from
//! inside the cycle. Implementations must not call back into the simulation.

use dash_common::settings::Settings;
use dash_common::state::Gear;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

/// One rendered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    /// Virtual time of the frame [ms].
    pub at_ms: u64,
    pub speed: u16,
    pub gear: Gear,
    pub rpm: u32,
    pub oil_temp: u16,
    /// Frame belongs to the ignition needle sweep.
    pub sweep: bool,
}

/// Dashboard renderer.
pub trait RenderSink {
    /// Draw a new speed / gear / rpm state.
    fn on_tick(&mut self, frame: &RenderFrame);

    /// Flash the gear indicator.
    fn on_shift_pulse(&mut self, _gear: Gear) {}

    /// Needles dropped to zero after shutdown.
    fn on_gauges_reset(&mut self) {}
}

/// Audio failures. Never fatal to the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoundError {
    /// The output device is not available.
    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The cue asset could not be played.
    #[error("failed to play {cue}: {reason}")]
    Playback { cue: &'static str, reason: String },
}

/// Audio cues.
pub trait SoundSink {
    /// Engine start cue. May fail; startup continues regardless.
    fn play_start_cue(&mut self) -> Result<(), SoundError>;

    fn play_shift_cue(&mut self);

    /// Start the looping idle cue.
    fn play_idle_cue(&mut self);

    fn stop_idle_cue(&mut self);

    /// Current engine speed, for load-dependent engine sound.
    fn on_engine_load(&mut self, _rpm: u32) {}
}

/// Gear-lever display.
pub trait LeverDisplay {
    /// Gear at which the lever currently rests.
    fn resting_gear(&self) -> Gear;

    /// Move the lever to `gear` (automatic mode follows the transmission).
    fn animate_to(&mut self, gear: Gear);

    /// The user released the lever at `gear`.
    fn settle_at(&mut self, _gear: Gear) {}
}

// ─── Tracing Sinks ──────────────────────────────────────────────────

/// Renderer that logs frames.
#[derive(Debug, Default)]
pub struct TracingRenderSink {
    last_gear: Option<Gear>,
}

impl RenderSink for TracingRenderSink {
    fn on_tick(&mut self, frame: &RenderFrame) {
        trace!(
            at_ms = frame.at_ms,
            speed = frame.speed,
            gear = %frame.gear,
            rpm = frame.rpm,
            oil_temp = frame.oil_temp,
            sweep = frame.sweep,
            "frame"
        );
        if self.last_gear != Some(frame.gear) {
            debug!(at_ms = frame.at_ms, speed = frame.speed, gear = %frame.gear, "Gear display");
            self.last_gear = Some(frame.gear);
        }
    }

    fn on_shift_pulse(&mut self, gear: Gear) {
        debug!(gear = %gear, "Shift pulse");
    }

    fn on_gauges_reset(&mut self) {
        debug!("Gauges reset");
    }
}

/// Audio sink that logs cues at the configured volume.
#[derive(Debug)]
pub struct TracingSoundSink {
    settings: Settings,
    idle_playing: bool,
}

impl TracingSoundSink {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings.clamped(),
            idle_playing: false,
        }
    }

    #[inline]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    fn emit(&self, cue: &'static str) {
        if self.settings.audio_enabled {
            info!(cue, gain = self.settings.gain(), "Sound");
        } else {
            trace!(cue, "Sound muted");
        }
    }
}

impl SoundSink for TracingSoundSink {
    fn play_start_cue(&mut self) -> Result<(), SoundError> {
        self.emit("start");
        Ok(())
    }

    fn play_shift_cue(&mut self) {
        self.emit("shift");
    }

    fn play_idle_cue(&mut self) {
        if !self.idle_playing {
            self.idle_playing = true;
            self.emit("idle");
        }
    }

    fn stop_idle_cue(&mut self) {
        if self.idle_playing {
            self.idle_playing = false;
            trace!("Idle cue stopped");
        }
    }
}

/// Lever display that only remembers its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingLever {
    position: Gear,
}

impl TrackingLever {
    pub const fn new(position: Gear) -> Self {
        Self { position }
    }
}

impl Default for TrackingLever {
    fn default() -> Self {
        Self::new(Gear::Park)
    }
}

impl LeverDisplay for TrackingLever {
    fn resting_gear(&self) -> Gear {
        self.position
    }

    fn animate_to(&mut self, gear: Gear) {
        self.position = gear;
    }

    fn settle_at(&mut self, gear: Gear) {
        self.position = gear;
    }
}

// ─── Recording Sinks ────────────────────────────────────────────────

/// Renderer that keeps every frame. Used by tests and the benchmark.
#[derive(Debug, Default)]
pub struct RecordingRenderSink {
    pub frames: Vec<RenderFrame>,
    pub shift_pulses: Vec<Gear>,
    pub resets: usize,
}

impl RecordingRenderSink {
    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    /// Frames rendered at or after `from_ms`.
    pub fn frames_since(&self, from_ms: u64) -> impl Iterator<Item = &RenderFrame> {
        self.frames.iter().filter(move |f| f.at_ms >= from_ms)
    }
}

impl RenderSink for RecordingRenderSink {
    fn on_tick(&mut self, frame: &RenderFrame) {
        self.frames.push(*frame);
    }

    fn on_shift_pulse(&mut self, gear: Gear) {
        self.shift_pulses.push(gear);
    }

    fn on_gauges_reset(&mut self) {
        self.resets += 1;
    }
}

/// Audio event seen by [`RecordingSoundSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Start,
    Shift,
    IdleStart,
    IdleStop,
}

/// Audio sink that records cues; can be told to fail the start cue.
#[derive(Debug, Default)]
pub struct RecordingSoundSink {
    pub events: Vec<SoundEvent>,
    pub fail_start: bool,
}

impl RecordingSoundSink {
    /// Sink whose start cue always fails.
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail_start: true,
        }
    }

    pub fn count(&self, event: SoundEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl SoundSink for RecordingSoundSink {
    fn play_start_cue(&mut self) -> Result<(), SoundError> {
        if self.fail_start {
            return Err(SoundError::DeviceUnavailable("no output device".into()));
        }
        self.events.push(SoundEvent::Start);
        Ok(())
    }

    fn play_shift_cue(&mut self) {
        self.events.push(SoundEvent::Shift);
    }

    fn play_idle_cue(&mut self) {
        self.events.push(SoundEvent::IdleStart);
    }

    fn stop_idle_cue(&mut self) {
        self.events.push(SoundEvent::IdleStop);
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn on_tick(&mut self, _frame: &RenderFrame) {}
}

impl SoundSink for NullSink {
    fn play_start_cue(&mut self) -> Result<(), SoundError> {
        Ok(())
    }

    fn play_shift_cue(&mut self) {}

    fn play_idle_cue(&mut self) {}

    fn stop_idle_cue(&mut self) {}
}
