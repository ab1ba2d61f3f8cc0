//! Integration test: scenario scripts.
//!
//! Plays the bundled demo scripts and a script loaded from disk, then checks
//! the final snapshot.

use std::io::Write;
use std::path::PathBuf;

use dash_common::state::{EngineState, Gear, TransmissionMode};
use dash_sim::config::load_config;
use dash_sim::script::{self, Pacing, Script, ScriptError};
use dash_sim::sim::Simulation;
use dash_sim::sink::{RecordingRenderSink, RecordingSoundSink, TrackingLever};
use tempfile::NamedTempFile;

use super::helpers::parked;

fn repo_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join(relative)
}

#[test]
fn automatic_demo_ends_parked() {
    let script = Script::load(&repo_file("demos/drive.toml")).unwrap();
    let mut sim = parked();
    let report = script::run(&script, &mut sim, Pacing::Unpaced);

    assert_eq!(report.accepted, 6);
    assert_eq!(report.rejected, 0);
    let snap = sim.snapshot();
    assert_eq!(snap.at_ms, 14_500);
    assert_eq!(snap.engine, EngineState::Off);
    assert_eq!(snap.gear, Gear::Park);
    assert_eq!(snap.speed, 0);
    assert_eq!(snap.rpm, 0);

    let top = sim.render().frames.iter().filter(|f| !f.sweep).map(|f| f.speed).max();
    assert_eq!(top, Some(162));
}

#[test]
fn manual_demo_ends_held_in_first() {
    let script = Script::load(&repo_file("demos/manual.toml")).unwrap();
    let mut sim = parked();
    let report = script::run(&script, &mut sim, Pacing::Unpaced);

    // The lever move before ignition only positions the lever.
    assert_eq!(report.accepted, 7);
    assert_eq!(report.rejected, 1);
    assert_eq!(sim.mode(), TransmissionMode::Manual);
    assert_eq!(sim.engine_state(), EngineState::Running);
    assert_eq!(sim.gear(), Gear::First);
    assert_eq!(sim.speed(), 80);
}

#[test]
fn snapshot_json_after_script() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        tail_ms = 100

        [[step]]
        at_ms = 0
        input = "ignition"

        [[step]]
        at_ms = 2300
        input = "throttle_press"
        "#
    )
    .unwrap();

    let script = Script::load(file.path()).unwrap();
    let mut sim = parked();
    script::run(&script, &mut sim, Pacing::Unpaced);

    let json = serde_json::to_value(sim.snapshot()).unwrap();
    assert_eq!(json["engine"], "running");
    assert_eq!(json["speed"], 4);
    assert_eq!(json["gear"], "1");
    assert_eq!(json["throttle_held"], true);
}

#[test]
fn missing_script_is_io_error() {
    let err = Script::load(&repo_file("demos/does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, ScriptError::Io { .. }));
}

#[test]
fn sample_config_matches_builtin_table() {
    let config = load_config(&repo_file("config/dash.toml")).unwrap();
    let mut sim = Simulation::from_config(
        &config,
        RecordingRenderSink::default(),
        RecordingSoundSink::default(),
        TrackingLever::default(),
    )
    .unwrap();
    let script = Script::load(&repo_file("demos/drive.toml")).unwrap();
    script::run(&script, &mut sim, Pacing::Unpaced);

    let mut reference = parked();
    script::run(&script, &mut reference, Pacing::Unpaced);
    assert_eq!(sim.snapshot(), reference.snapshot());
}
