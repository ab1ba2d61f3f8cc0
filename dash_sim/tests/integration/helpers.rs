//! Shared fixtures.

use dash_common::state::{EngineState, Gear, TransmissionMode};
use dash_sim::sim::Simulation;
use dash_sim::sink::{RecordingRenderSink, RecordingSoundSink, SoundEvent, TrackingLever};
use dash_sim::transmission::ModeTransition;

pub type TestSim = Simulation<RecordingRenderSink, RecordingSoundSink, TrackingLever>;

/// Engine off, automatic, lever in P.
pub fn parked() -> TestSim {
    Simulation::with_defaults(
        RecordingRenderSink::default(),
        RecordingSoundSink::default(),
        TrackingLever::default(),
    )
}

/// Run the ignition ceremony to completion.
pub fn start(sim: &mut TestSim) {
    sim.toggle_engine();
    assert!(
        sim.advance_until(5_000, |s| s.engine_state() == EngineState::Running),
        "engine did not start"
    );
}

/// Automatic, engine running, standing in N.
pub fn running() -> TestSim {
    let mut sim = parked();
    start(&mut sim);
    sim
}

/// Manual, engine running, lever in N.
pub fn running_manual() -> TestSim {
    let mut sim = parked();
    assert_eq!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Ok(TransmissionMode::Manual)
    );
    sim.move_lever("N");
    start(&mut sim);
    assert_eq!(sim.gear(), Gear::Neutral);
    sim
}

/// Step until `speed` is shown, panicking after `limit_ms`.
pub fn drive_to(sim: &mut TestSim, speed: u16, limit_ms: u64) {
    assert!(
        sim.advance_until(limit_ms, |s| s.speed() == speed),
        "speed {speed} not reached, stuck at {}",
        sim.speed()
    );
}

pub fn shift_cues(sim: &TestSim) -> usize {
    sim.sound().count(SoundEvent::Shift)
}
