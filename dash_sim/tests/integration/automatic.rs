//! Integration test: automatic transmission.
//!
//! Gear follows speed through the published breakpoints; upshifts are
//! silent, downshifts play the shift cue.

use dash_common::consts::{MAX_RPM, MAX_SPEED};
use dash_common::profile::GearProfileTable;
use dash_common::state::{Gear, TransmissionMode};
use dash_sim::gear::derive_gear_from_speed;
use dash_sim::ramp::RampPhase;
use dash_sim::transmission::ModeTransition;

use super::helpers::{drive_to, running, shift_cues};

#[test]
fn coasting_from_85_drops_back_to_first() {
    let mut sim = running();
    sim.press_throttle();
    drive_to(&mut sim, 85, 5_000);
    assert_eq!(sim.gear(), Gear::Second);

    let cues = shift_cues(&sim);
    sim.release_throttle();
    drive_to(&mut sim, 81, 1_000);
    assert_eq!(sim.gear(), Gear::Second);
    assert_eq!(shift_cues(&sim), cues);

    drive_to(&mut sim, 80, 100);
    assert_eq!(sim.gear(), Gear::First);
    assert_eq!(shift_cues(&sim), cues + 1);

    drive_to(&mut sim, 0, 5_000);
    assert_eq!(sim.gear(), Gear::Neutral);
    assert_eq!(shift_cues(&sim), cues + 2);
    assert!(!sim.ramp_timer_armed());
}

#[test]
fn upshifts_are_silent_except_first() {
    let mut sim = running();
    let cues = shift_cues(&sim);
    sim.press_throttle();
    drive_to(&mut sim, 150, 10_000);
    assert_eq!(sim.gear(), Gear::Third);
    assert_eq!(shift_cues(&sim), cues + 1);
    assert_eq!(
        sim.render().shift_pulses[sim.render().shift_pulses.len() - 3..],
        [Gear::First, Gear::Second, Gear::Third]
    );
}

#[test]
fn every_frame_shows_the_speed_bucket() {
    let table = GearProfileTable::standard();
    let mut sim = running();
    sim.press_throttle();
    sim.advance(8_000);
    sim.press_brake();
    sim.advance(6_000);
    assert_eq!(sim.speed(), 0);

    let frames: Vec<_> = sim.render().frames.iter().filter(|f| !f.sweep).collect();
    assert!(frames.len() > 300);
    for frame in frames {
        assert_eq!(
            frame.gear,
            derive_gear_from_speed(&table, frame.speed, true),
            "speed {} at {} ms",
            frame.speed,
            frame.at_ms
        );
    }
}

#[test]
fn full_throttle_tops_out_at_max_speed() {
    let mut sim = running();
    sim.press_throttle();
    sim.advance(20_000);

    assert_eq!(sim.speed(), MAX_SPEED);
    assert_eq!(sim.gear(), Gear::Eighth);
    assert!(matches!(sim.ramp_phase(), RampPhase::Holding { .. }));
    assert!(!sim.ramp_timer_armed());
    for frame in &sim.render().frames {
        assert!(frame.speed <= MAX_SPEED);
        assert!(frame.rpm <= MAX_RPM);
    }
}

#[test]
fn mode_switch_rejected_while_moving() {
    let mut sim = running();
    sim.press_throttle();
    drive_to(&mut sim, 50, 2_000);
    assert!(matches!(
        sim.switch_mode(TransmissionMode::Manual),
        ModeTransition::Rejected(_)
    ));
    assert_eq!(sim.mode(), TransmissionMode::Automatic);
    sim.advance(25);
    assert_eq!(sim.speed(), 51);
}

#[test]
fn braking_downshifts_with_cues() {
    let mut sim = running();
    sim.press_throttle();
    drive_to(&mut sim, 150, 10_000);
    let cues = shift_cues(&sim);
    sim.press_brake();
    drive_to(&mut sim, 0, 3_000);
    assert_eq!(sim.gear(), Gear::Neutral);
    assert_eq!(shift_cues(&sim), cues + 3);
}

#[test]
fn lever_follows_gear() {
    use dash_sim::sink::LeverDisplay;

    let mut sim = running();
    assert_eq!(sim.lever().resting_gear(), Gear::Neutral);
    sim.press_throttle();
    drive_to(&mut sim, 90, 5_000);
    assert_eq!(sim.lever().resting_gear(), Gear::Second);
}
