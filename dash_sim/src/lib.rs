//! # Dashboard Drive Simulation
//!
//! Acceleration and gear state machine behind a car-dashboard simulation.
//! Inputs (ignition, throttle, brake, gear lever, transmission mode) drive a
//! speed ramp on a virtual millisecond clock; every tick is pushed to a
//! renderer and an audio sink.
//!
//! ## State Machines
//!
//! 1. **EngineLifecycle**: Off → StartingUp → Running → ShuttingDown
//! 2. **TransmissionModeController**: Automatic ↔ Manual, standstill only
//! 3. **SpeedRamp**: forward, downshift, decel and sweep phases
//! 4. **GearSelector**: speed-derived or lever-selected gear, edge detected
//!
//! ## Single Owner
//!
//! [`sim::Simulation`] owns all state and the sinks. Timers are slots in a
//! generation-checked scheduler, so a cancelled timer can never fire.

pub mod config;
pub mod engine;
pub mod gauge;
pub mod gear;
pub mod ramp;
pub mod script;
pub mod sim;
pub mod sink;
pub mod throttle;
pub mod timer;
pub mod transmission;
