//! Integration test: manual transmission.
//!
//! The lever selects the gear; the ramp climbs to that gear's ceiling and
//! holds, or decays to it when the car is going too fast for the gear.

use dash_common::consts::MAX_SPEED;
use dash_common::state::{EngineState, Gear, TransmissionMode};
use dash_sim::gear::LeverResult;
use dash_sim::ramp::RampPhase;
use dash_sim::sim::{InputOutcome, Simulation};
use dash_sim::sink::{LeverDisplay, RecordingRenderSink, RecordingSoundSink, TrackingLever};
use dash_sim::transmission::ModeTransition;

use super::helpers::{drive_to, parked, running, running_manual, shift_cues, start};

#[test]
fn eighth_at_fifty_keeps_climbing_within_ceiling() {
    let mut sim = running_manual();
    assert!(matches!(sim.move_lever("1"), LeverResult::Accepted(Some(_))));
    sim.press_throttle();
    drive_to(&mut sim, 50, 2_000);

    let cues = shift_cues(&sim);
    assert!(matches!(sim.move_lever("8"), LeverResult::Accepted(Some(_))));
    assert_eq!(sim.gear(), Gear::Eighth);
    assert_eq!(shift_cues(&sim), cues + 1);

    sim.advance(600);
    assert_eq!(sim.speed(), 60);

    sim.advance(30_000);
    assert_eq!(sim.speed(), MAX_SPEED);
    assert_eq!(sim.gear(), Gear::Eighth);
    assert!(sim.render().frames.iter().all(|f| f.speed <= MAX_SPEED));
}

#[test]
fn first_at_190_decays_monotonically_to_80() {
    let mut sim = running_manual();
    sim.move_lever("1");
    sim.press_throttle();
    drive_to(&mut sim, 80, 3_000);
    sim.advance(200);
    assert_eq!(sim.speed(), 80);
    assert!(matches!(sim.ramp_phase(), RampPhase::Holding { .. }));

    sim.move_lever("2");
    drive_to(&mut sim, 140, 3_000);
    sim.move_lever("3");
    drive_to(&mut sim, 190, 3_000);

    assert!(matches!(sim.move_lever("1"), LeverResult::Accepted(Some(_))));
    assert!(matches!(sim.ramp_phase(), RampPhase::Downshifting { .. }));

    let mut last = sim.speed();
    for _ in 0..3_000 {
        sim.step();
        assert!(sim.speed() <= last, "speed rose to {}", sim.speed());
        last = sim.speed();
    }
    assert_eq!(sim.speed(), 80);
    assert_eq!(sim.gear(), Gear::First);
    assert!(matches!(sim.ramp_phase(), RampPhase::Holding { .. }));
}

#[test]
fn downshift_decays_at_its_own_interval() {
    let mut sim = running_manual();
    sim.move_lever("1");
    sim.press_throttle();
    drive_to(&mut sim, 80, 3_000);
    sim.move_lever("2");
    drive_to(&mut sim, 100, 1_000);

    sim.move_lever("1");
    sim.advance(200);
    assert_eq!(sim.speed(), 90);
}

#[test]
fn throttle_in_neutral_does_not_drive() {
    let mut sim = running_manual();
    assert_eq!(sim.press_throttle(), InputOutcome::Accepted);
    sim.advance(500);
    assert_eq!(sim.speed(), 0);
    assert!(!sim.ramp_timer_armed());

    sim.move_lever("1");
    sim.advance(25);
    assert_eq!(sim.speed(), 1);
}

#[test]
fn reverse_has_a_short_ramp() {
    let mut sim = running_manual();
    sim.move_lever("R");
    sim.press_throttle();
    sim.advance(2_000);
    assert_eq!(sim.gear(), Gear::Reverse);
    assert_eq!(sim.speed(), 30);
    let last = sim.render().last().unwrap();
    assert!(last.rpm > 800);
}

#[test]
fn lever_tokens() {
    let mut sim = running_manual();
    assert!(matches!(sim.move_lever("X"), LeverResult::Rejected(_)));
    assert_eq!(sim.move_lever("C"), LeverResult::Accepted(None));
    sim.move_lever("4");
    assert_eq!(sim.gear(), Gear::Fourth);
    assert!(matches!(sim.move_lever("D"), LeverResult::Accepted(Some(_))));
    assert_eq!(sim.gear(), Gear::Neutral);
}

#[test]
fn lever_ignored_in_automatic() {
    let mut sim = running();
    assert!(matches!(sim.move_lever("3"), LeverResult::Rejected(_)));
    assert_eq!(sim.gear(), Gear::Neutral);
}

#[test]
fn manual_shift_pulses_and_settles_lever() {
    let mut sim = running_manual();
    let pulses = sim.render().shift_pulses.len();
    sim.move_lever("2");
    assert_eq!(sim.lever().resting_gear(), Gear::Second);
    assert_eq!(sim.render().shift_pulses.len(), pulses + 1);
}

#[test]
fn lever_position_kept_while_off() {
    let mut sim = parked();
    sim.switch_mode(TransmissionMode::Manual);
    assert!(matches!(sim.move_lever("3"), LeverResult::Rejected(_)));
    assert_eq!(sim.gear(), Gear::Park);
    assert_eq!(sim.lever().resting_gear(), Gear::Third);

    start(&mut sim);
    assert_eq!(sim.gear(), Gear::Third);
}

#[test]
fn entering_manual_seeds_from_lever() {
    let mut sim = Simulation::with_defaults(
        RecordingRenderSink::default(),
        RecordingSoundSink::default(),
        TrackingLever::new(Gear::Fourth),
    );
    assert_eq!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Ok(TransmissionMode::Manual)
    );
    assert_eq!(sim.gear(), Gear::Fourth);
    assert_eq!(sim.render().shift_pulses, vec![Gear::Fourth]);

    assert_eq!(
        sim.switch_mode(TransmissionMode::Automatic),
        ModeTransition::Ok(TransmissionMode::Automatic)
    );
    assert_eq!(sim.gear(), Gear::Fourth);
    start(&mut sim);
    assert_eq!(sim.gear(), Gear::Neutral);
}

#[test]
fn shutdown_parks_and_next_start_reseeds_from_lever() {
    let mut sim = running_manual();
    sim.move_lever("2");
    let cues = shift_cues(&sim);

    sim.toggle_engine();
    assert_eq!(sim.gear(), Gear::Park);
    assert_eq!(shift_cues(&sim), cues + 1);
    assert_eq!(sim.lever().resting_gear(), Gear::Second);

    sim.advance(1_000);
    assert_eq!(sim.engine_state(), EngineState::Off);
    assert_eq!(sim.gear(), Gear::Park);
    assert_eq!(sim.mode(), TransmissionMode::Manual);

    start(&mut sim);
    assert_eq!(sim.gear(), Gear::Second);
}

#[test]
fn neutral_while_moving_keeps_throttle_held() {
    let mut sim = running_manual();
    sim.move_lever("1");
    sim.press_throttle();
    sim.advance(1_000);
    assert_eq!(sim.speed(), 40);

    sim.move_lever("N");
    assert!(sim.inputs().throttle_held());
    sim.advance(100);
    assert_eq!(sim.speed(), 38);
    assert!(matches!(sim.ramp_phase(), RampPhase::Decelerating { .. }));
    assert!(sim.inputs().throttle_held());

    // Back into gear with the pedal still down: 35 ticks at 28 ms.
    sim.move_lever("2");
    sim.advance(1_000);
    assert_eq!(sim.speed(), 73);
    assert!(matches!(sim.ramp_phase(), RampPhase::Accelerating { .. }));

    assert_eq!(sim.release_throttle(), InputOutcome::Accepted);
    assert!(matches!(sim.ramp_phase(), RampPhase::Decelerating { .. }));
}
