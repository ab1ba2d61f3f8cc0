//! Integration test: ignition ceremony and shutdown.
//!
//! Off → start cue → gauge sweep 0 → 400 → 0 → Running in N, and back.

use dash_common::consts::{MAX_RPM, MAX_SPEED};
use dash_common::state::{EngineState, Gear, TransmissionMode};
use dash_sim::engine::EngineTransition;
use dash_sim::sim::{InputOutcome, Simulation};
use dash_sim::sink::{
    LeverDisplay, RecordingRenderSink, RecordingSoundSink, SoundEvent, TrackingLever,
};
use dash_sim::transmission::ModeTransition;

use super::helpers::{parked, running, start};

#[test]
fn ceremony_sweeps_and_ends_in_neutral() {
    let mut sim = parked();
    assert_eq!(
        sim.toggle_engine(),
        EngineTransition::Ok(EngineState::StartingUp)
    );
    assert_eq!(sim.sound().count(SoundEvent::Start), 1);

    sim.advance(800);
    assert_eq!(sim.speed(), 0);
    assert_eq!(sim.engine_state(), EngineState::StartingUp);

    sim.advance(700);
    assert_eq!(sim.speed(), MAX_SPEED);

    sim.advance(700);
    assert_eq!(sim.engine_state(), EngineState::Running);
    assert_eq!(sim.speed(), 0);
    assert_eq!(sim.gear(), Gear::Neutral);
    assert!(sim.inputs().ignition_on());
    assert!(sim.inputs().inputs_armed());

    let frames = &sim.render().frames;
    let sweep: Vec<_> = frames.iter().filter(|f| f.sweep).collect();
    assert_eq!(sweep.len(), 200);
    assert!(sweep.iter().all(|f| f.gear == Gear::Park));
    assert_eq!(sweep.iter().map(|f| f.rpm).max(), Some(MAX_RPM));

    let last = sim.render().last().unwrap();
    assert!(!last.sweep);
    assert_eq!(last.gear, Gear::Neutral);
    assert_eq!(sim.sound().count(SoundEvent::IdleStart), 1);
}

#[test]
fn failing_start_cue_does_not_block_startup() {
    let mut sim = Simulation::with_defaults(
        RecordingRenderSink::default(),
        RecordingSoundSink::failing(),
        TrackingLever::default(),
    );
    sim.toggle_engine();
    sim.advance(2200);
    assert_eq!(sim.engine_state(), EngineState::Running);
    assert_eq!(sim.sound().count(SoundEvent::Start), 0);
    assert_eq!(sim.gear(), Gear::Neutral);
}

#[test]
fn inputs_ignored_until_running() {
    let mut sim = parked();
    sim.toggle_engine();
    sim.advance(1000);
    let speed = sim.speed();
    assert!(matches!(sim.press_throttle(), InputOutcome::Ignored(_)));
    assert!(matches!(sim.press_brake(), InputOutcome::Ignored(_)));
    assert!(!sim.inputs().throttle_held());
    sim.advance(7);
    assert_eq!(sim.speed(), speed + 4);
}

#[test]
fn mode_locked_for_whole_ceremony() {
    let mut sim = parked();
    sim.toggle_engine();
    sim.advance(100);
    assert!(matches!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Rejected(_)
    ));
    start(&mut sim);
    assert!(matches!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Rejected(_)
    ));
    assert_eq!(sim.mode(), TransmissionMode::Automatic);
}

#[test]
fn toggle_rejected_mid_ceremony_and_while_moving() {
    let mut sim = parked();
    sim.toggle_engine();
    sim.advance(10);
    assert!(matches!(sim.toggle_engine(), EngineTransition::Rejected(_)));
    start(&mut sim);

    sim.press_throttle();
    sim.advance(100);
    assert_eq!(sim.speed(), 4);
    assert!(matches!(sim.toggle_engine(), EngineTransition::Rejected(_)));
    assert_eq!(sim.engine_state(), EngineState::Running);
}

#[test]
fn shutdown_resets_display_after_delay() {
    let mut sim = running();
    sim.advance(2500);
    assert_eq!(sim.gauges().oil_temp, 2);

    assert_eq!(
        sim.toggle_engine(),
        EngineTransition::Ok(EngineState::ShuttingDown)
    );
    assert_eq!(sim.gear(), Gear::Park);
    assert!(!sim.inputs().ignition_on());
    assert_eq!(sim.lever().resting_gear(), Gear::Park);
    assert!(matches!(sim.press_throttle(), InputOutcome::Ignored(_)));
    assert_eq!(sim.sound().count(SoundEvent::IdleStop), 1);

    sim.advance(999);
    assert_eq!(sim.engine_state(), EngineState::ShuttingDown);
    assert_eq!(sim.render().resets, 0);
    assert!(matches!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Rejected(_)
    ));

    sim.advance(1);
    assert_eq!(sim.engine_state(), EngineState::Off);
    assert_eq!(sim.render().resets, 1);
    assert_eq!(sim.gauges().rpm, 0);
    assert_eq!(sim.gauges().oil_temp, 0);
    assert_eq!(sim.live_timers(), 0);
    assert_eq!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Ok(TransmissionMode::Manual)
    );
}

#[test]
fn engine_restarts_after_shutdown() {
    let mut sim = running();
    sim.toggle_engine();
    sim.advance(1000);
    assert_eq!(sim.engine_state(), EngineState::Off);
    start(&mut sim);
    assert_eq!(sim.gear(), Gear::Neutral);
    assert_eq!(sim.sound().count(SoundEvent::Start), 2);
}
