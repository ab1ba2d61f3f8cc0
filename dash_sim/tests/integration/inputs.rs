//! Integration test: pedal arbitration and timer hygiene.
//!
//! Throttle and brake are mutually exclusive, repeated presses are no-ops,
//! and exactly one ramp timer drives speed at any moment.

use dash_common::state::Gear;
use dash_sim::ramp::RampPhase;
use dash_sim::sim::InputOutcome;

use super::helpers::{drive_to, running};

#[test]
fn repeated_throttle_press_is_ignored() {
    let mut sim = running();
    assert_eq!(sim.press_throttle(), InputOutcome::Accepted);
    sim.advance(250);
    assert!(matches!(sim.press_throttle(), InputOutcome::Ignored(_)));
    sim.advance(250);
    assert_eq!(sim.speed(), 20);
}

#[test]
fn one_ramp_drives_speed() {
    let mut sim = running();
    let start = sim.now_ms();
    sim.press_throttle();
    sim.advance(500);
    sim.press_brake();
    sim.press_throttle();
    sim.press_brake();
    sim.advance(150);

    let frames: Vec<_> = sim.render().frames_since(start + 1).collect();
    // 20 throttle ticks at 25 ms, then 10 brake ticks at 15 ms.
    assert_eq!(frames.len(), 20 + 10);
    assert_eq!(sim.speed(), 10);
    assert!(frames.windows(2).all(|w| w[0].at_ms < w[1].at_ms));
}

#[test]
fn brake_cancels_throttle() {
    let mut sim = running();
    sim.press_throttle();
    sim.advance(500);
    sim.press_brake();
    assert!(sim.inputs().brake_held());
    assert!(!sim.inputs().throttle_held());
    sim.advance(150);
    assert_eq!(sim.speed(), 10);

    sim.press_throttle();
    assert!(!sim.inputs().brake_held());
    sim.advance(25);
    assert_eq!(sim.speed(), 11);
}

#[test]
fn releasing_brake_coasts() {
    let mut sim = running();
    sim.press_throttle();
    sim.advance(1_000);
    sim.press_brake();
    sim.advance(150);
    assert_eq!(sim.speed(), 30);
    assert_eq!(sim.release_brake(), InputOutcome::Accepted);
    sim.advance(500);
    assert_eq!(sim.speed(), 20);
}

#[test]
fn releases_without_press_are_ignored() {
    let mut sim = running();
    assert!(matches!(sim.release_throttle(), InputOutcome::Ignored(_)));
    assert!(matches!(sim.release_brake(), InputOutcome::Ignored(_)));
    assert_eq!(sim.stats().rejected_inputs, 2);
}

#[test]
fn brake_at_standstill_arms_nothing() {
    let mut sim = running();
    let timers = sim.live_timers();
    sim.press_brake();
    assert_eq!(sim.live_timers(), timers);
    assert!(!sim.ramp_timer_armed());
}

#[test]
fn shift_delay_cancelled_by_release() {
    let mut sim = running();
    sim.press_throttle();
    drive_to(&mut sim, 80, 3_000);
    assert!(sim.shift_timer_armed());
    assert!(matches!(sim.ramp_phase(), RampPhase::AwaitingShift { .. }));

    sim.release_throttle();
    assert!(!sim.shift_timer_armed());

    let mut last = sim.speed();
    for _ in 0..1_000 {
        sim.step();
        assert!(sim.speed() <= last);
        last = sim.speed();
    }
    assert_eq!(sim.speed(), 60);
    assert_eq!(sim.gear(), Gear::First);
}

#[test]
fn brake_during_shift_delay_wins() {
    let mut sim = running();
    sim.press_throttle();
    drive_to(&mut sim, 80, 3_000);
    sim.press_brake();
    sim.advance(1_500);
    assert_eq!(sim.speed(), 0);
    assert_eq!(sim.gear(), Gear::Neutral);
    assert!(!sim.shift_timer_armed());
}
