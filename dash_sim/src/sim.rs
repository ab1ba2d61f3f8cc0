//! Simulation orchestrator.
//!
//! One owned struct holds every state machine, the virtual clock and the
//! output sinks. Inputs and timer expiries are handled to completion before
//! the next one is looked at; nothing here is shared across threads.
//!
//! # Cycle
//!
//! [`Simulation::step`] advances the clock by one millisecond and drains
//! every due timer in (due time, arm order). Each timer is dispatched only if
//! its owning [`TimerSlot`] still holds it, so a cancelled ramp can never
//! tick again.

use dash_common::config::ConfigError;
use dash_common::consts::{CYCLE_TIME_MS, MAX_TIMERS};
use dash_common::profile::{GearProfile, GearProfileTable};
use dash_common::state::{EngineState, Gear, TransmissionMode};
use serde::Serialize;
use static_assertions::const_assert;
use tracing::{debug, error, info, warn};

use crate::config::{SimConfig, TimingConfig};
use crate::engine::{EngineEvent, EngineLifecycle, EngineTransition, StartupStep};
use crate::gauge::{Gauges, rpm_estimate, sweep_rpm};
use crate::gear::{GearChange, GearSelector, LeverResult};
use crate::ramp::{Completion, RampDirection, RampPhase, SpeedRamp, TickOutcome};
use crate::sink::{LeverDisplay, RenderFrame, RenderSink, SoundSink};
use crate::throttle::ThrottleState;
use crate::timer::{Scheduler, TimerId, TimerKind, TimerSlot};
use crate::transmission::{ModeTransition, TransmissionModeController};

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    RampTick,
    ShiftDelay,
    StartCueElapsed,
    ShutdownElapsed,
    OilWarmup,
}

/// Result of a pedal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted,
    Ignored(&'static str),
}

/// Counters since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub cycles: u64,
    pub frames: u64,
    pub timers_fired: u64,
    pub gear_changes: u64,
    pub shift_cues: u64,
    pub rejected_inputs: u64,
}

/// Serializable view of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimSnapshot {
    pub at_ms: u64,
    pub engine: EngineState,
    pub mode: TransmissionMode,
    pub gear: Gear,
    pub speed: u16,
    pub rpm: u32,
    pub oil_temp: u16,
    pub throttle_held: bool,
    pub brake_held: bool,
    pub ignition_on: bool,
    pub stats: SimStats,
}

/// The drive simulation.
pub struct Simulation<R, S, L> {
    timing: TimingConfig,
    table: GearProfileTable,
    scheduler: Scheduler<TimerAction>,
    ramp_timer: TimerSlot,
    shift_timer: TimerSlot,
    ceremony_timer: TimerSlot,
    oil_timer: TimerSlot,
    ramp: SpeedRamp,
    gear: GearSelector,
    inputs: ThrottleState,
    mode: TransmissionModeController,
    engine: EngineLifecycle,
    gauges: Gauges,
    idle_cue_on: bool,
    stats: SimStats,
    render: R,
    sound: S,
    lever: L,
}

impl<R: RenderSink, S: SoundSink, L: LeverDisplay> Simulation<R, S, L> {
    /// Create a parked, engine-off simulation.
    pub fn new(
        table: GearProfileTable,
        timing: TimingConfig,
        mode: TransmissionMode,
        render: R,
        sound: S,
        lever: L,
    ) -> Self {
        Self {
            timing,
            table,
            scheduler: Scheduler::new(),
            ramp_timer: TimerSlot::new(),
            shift_timer: TimerSlot::new(),
            ceremony_timer: TimerSlot::new(),
            oil_timer: TimerSlot::new(),
            ramp: SpeedRamp::new(),
            gear: GearSelector::new(Gear::Park),
            inputs: ThrottleState::new(),
            mode: TransmissionModeController::new(mode),
            engine: EngineLifecycle::new(),
            gauges: Gauges::default(),
            idle_cue_on: false,
            stats: SimStats::default(),
            render,
            sound,
            lever,
        }
    }

    /// Standard gear table and timings, automatic transmission.
    pub fn with_defaults(render: R, sound: S, lever: L) -> Self {
        Self::new(
            GearProfileTable::standard(),
            TimingConfig::default(),
            TransmissionMode::Automatic,
            render,
            sound,
            lever,
        )
    }

    /// Build from a loaded configuration.
    pub fn from_config(config: &SimConfig, render: R, sound: S, lever: L) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.profile_table()?,
            config.timing,
            config.mode,
            render,
            sound,
            lever,
        ))
    }

    // ─── Accessors ──────────────────────────────────────────────────

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    #[inline]
    pub fn speed(&self) -> u16 {
        self.ramp.speed()
    }

    #[inline]
    pub fn gear(&self) -> Gear {
        self.gear.current()
    }

    #[inline]
    pub fn mode(&self) -> TransmissionMode {
        self.mode.mode()
    }

    #[inline]
    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    #[inline]
    pub fn inputs(&self) -> ThrottleState {
        self.inputs
    }

    #[inline]
    pub fn gauges(&self) -> Gauges {
        self.gauges
    }

    #[inline]
    pub fn ramp_phase(&self) -> RampPhase {
        self.ramp.phase()
    }

    #[inline]
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Whether mode switching is currently unlocked.
    #[inline]
    pub fn mode_switching_enabled(&self) -> bool {
        self.mode.switching_enabled()
    }

    /// Whether a ramp timer is armed.
    pub fn ramp_timer_armed(&self) -> bool {
        self.ramp_timer.is_armed(&self.scheduler)
    }

    /// Whether a shift-delay timer is armed.
    pub fn shift_timer_armed(&self) -> bool {
        self.shift_timer.is_armed(&self.scheduler)
    }

    /// Number of armed timers.
    pub fn live_timers(&self) -> usize {
        self.scheduler.live_count()
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn lever(&self) -> &L {
        &self.lever
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            at_ms: self.now_ms(),
            engine: self.engine.state(),
            mode: self.mode.mode(),
            gear: self.gear.current(),
            speed: self.ramp.speed(),
            rpm: self.gauges.rpm,
            oil_temp: self.gauges.oil_temp,
            throttle_held: self.inputs.throttle_held(),
            brake_held: self.inputs.brake_held(),
            ignition_on: self.inputs.ignition_on(),
            stats: self.stats,
        }
    }

    // ─── Clock ──────────────────────────────────────────────────────

    /// Advance one cycle and run every timer that fell due.
    pub fn step(&mut self) {
        self.scheduler.advance(CYCLE_TIME_MS);
        self.stats.cycles += 1;
        while let Some((id, action)) = self.scheduler.pop_due() {
            self.stats.timers_fired += 1;
            self.dispatch(id, action);
        }
    }

    /// Advance `ms` cycles.
    pub fn advance(&mut self, ms: u64) {
        for _ in 0..ms {
            self.step();
        }
    }

    /// Step until `done` holds or `limit_ms` elapse. Returns whether `done` held.
    pub fn advance_until<F>(&mut self, limit_ms: u64, mut done: F) -> bool
    where
        F: FnMut(&Self) -> bool,
    {
        for _ in 0..limit_ms {
            if done(self) {
                return true;
            }
            self.step();
        }
        done(self)
    }

    fn dispatch(&mut self, id: TimerId, action: TimerAction) {
        match action {
            TimerAction::RampTick if self.ramp_timer.holds(id) => self.on_ramp_tick(),
            TimerAction::ShiftDelay if self.shift_timer.holds(id) => {
                self.shift_timer.release();
                self.on_shift_delay();
            }
            TimerAction::StartCueElapsed if self.ceremony_timer.holds(id) => {
                self.ceremony_timer.release();
                self.on_start_cue_elapsed();
            }
            TimerAction::ShutdownElapsed if self.ceremony_timer.holds(id) => {
                self.ceremony_timer.release();
                self.on_shutdown_elapsed();
            }
            TimerAction::OilWarmup if self.oil_timer.holds(id) => self.on_oil_warmup(),
            stale => debug!(?stale, "Dropped stale timer"),
        }
    }

    // ─── Engine Lifecycle ───────────────────────────────────────────

    /// Ignition button.
    pub fn toggle_engine(&mut self) -> EngineTransition {
        let result = self.engine.handle_event(EngineEvent::Toggle, self.ramp.speed());
        match result {
            EngineTransition::Ok(EngineState::StartingUp) => self.begin_startup(),
            EngineTransition::Ok(EngineState::ShuttingDown) => self.begin_shutdown(),
            EngineTransition::Rejected(reason) => self.reject("ignition", reason),
            _ => {}
        }
        result
    }

    fn begin_startup(&mut self) {
        info!("Engine starting");
        self.mode.disable_switching();
        if let Err(e) = self.sound.play_start_cue() {
            warn!("Start cue failed: {e}");
        }
        let delay = self.timing.start_cue_delay_ms;
        self.arm_one_shot(Slot::Ceremony, TimerAction::StartCueElapsed, delay);
    }

    fn on_start_cue_elapsed(&mut self) {
        match self.engine.handle_event(EngineEvent::StartCueElapsed, self.ramp.speed()) {
            EngineTransition::StepAdvanced(StartupStep::Sweep) => {
                debug!("Gauge sweep");
                self.ramp
                    .begin_sweep(self.timing.sweep_step, self.timing.sweep_interval_ms);
                self.arm_ramp();
            }
            other => warn!(?other, "Unexpected start cue expiry"),
        }
    }

    fn finish_startup(&mut self) {
        if let EngineTransition::Rejected(reason) =
            self.engine.handle_event(EngineEvent::SweepComplete, self.ramp.speed())
        {
            warn!("Sweep completion rejected: {reason}");
            return;
        }

        self.inputs.set_ignition(true);
        self.inputs.arm_inputs();

        let change = match self.mode.mode() {
            TransmissionMode::Automatic => self.gear.follow_speed(
                &self.table,
                self.ramp.speed(),
                true,
                TransmissionMode::Automatic,
                RampDirection::Idle,
            ),
            TransmissionMode::Manual => self.gear.apply(
                self.lever.resting_gear(),
                TransmissionMode::Manual,
                RampDirection::Idle,
            ),
        };
        if let Some(change) = change {
            self.announce(change);
        }

        let period = self.timing.oil_warmup_period_ms;
        if let Err(e) = self.oil_timer.arm(
            &mut self.scheduler,
            TimerAction::OilWarmup,
            period,
            TimerKind::Repeating {
                interval_ms: period,
            },
        ) {
            error!("Failed to arm oil warm-up timer: {e}");
        }

        info!(gear = %self.gear.current(), mode = ?self.mode.mode(), "Engine running");
        self.publish_frame(false);
    }

    fn begin_shutdown(&mut self) {
        info!("Engine shutting down");
        self.inputs.disarm_inputs();
        self.inputs.set_ignition(false);
        self.ramp_timer.cancel(&mut self.scheduler);
        self.shift_timer.cancel(&mut self.scheduler);
        self.oil_timer.cancel(&mut self.scheduler);
        self.ramp.stop();
        self.set_idle_cue(false);

        // The lever stays where the driver left it; manual mode re-seeds
        // from it on the next start.
        if let Some(change) = self
            .gear
            .apply(Gear::Park, self.mode.mode(), RampDirection::Idle)
        {
            self.announce(change);
        }

        let delay = self.timing.shutdown_delay_ms;
        self.arm_one_shot(Slot::Ceremony, TimerAction::ShutdownElapsed, delay);
    }

    fn on_shutdown_elapsed(&mut self) {
        if let EngineTransition::Rejected(reason) =
            self.engine.handle_event(EngineEvent::ShutdownElapsed, self.ramp.speed())
        {
            warn!("Shutdown completion rejected: {reason}");
            return;
        }
        self.ramp.reset();
        self.gauges.reset();
        self.render.on_gauges_reset();
        self.mode.enable_switching();
        info!("Engine off");
        self.publish_frame(false);
    }

    fn on_oil_warmup(&mut self) {
        let before = self.gauges.oil_temp;
        self.gauges.warm();
        // Active ramps publish on their own ticks.
        if self.gauges.oil_temp != before && !self.ramp_timer.is_armed(&self.scheduler) {
            self.publish_frame(false);
        }
    }

    // ─── Pedals ─────────────────────────────────────────────────────

    pub fn press_throttle(&mut self) -> InputOutcome {
        if let Some(reason) = self.pedal_guard() {
            return self.ignore("throttle", reason);
        }
        if self.inputs.throttle_held() {
            return self.ignore("throttle", "throttle already held");
        }
        self.inputs.press_throttle();
        self.accelerate();
        InputOutcome::Accepted
    }

    pub fn release_throttle(&mut self) -> InputOutcome {
        if let Some(reason) = self.pedal_guard() {
            return self.ignore("throttle", reason);
        }
        if !self.inputs.throttle_held() {
            return self.ignore("throttle", "throttle not held");
        }
        self.inputs.release_throttle();
        self.coast();
        InputOutcome::Accepted
    }

    pub fn press_brake(&mut self) -> InputOutcome {
        if let Some(reason) = self.pedal_guard() {
            return self.ignore("brake", reason);
        }
        if self.inputs.brake_held() {
            return self.ignore("brake", "brake already held");
        }
        self.inputs.press_brake();
        if self.ramp.speed() == 0 {
            self.halt();
        } else {
            self.decelerate(
                self.timing.decel_step,
                self.timing.brake_interval_ms,
                Completion::None,
            );
        }
        InputOutcome::Accepted
    }

    pub fn release_brake(&mut self) -> InputOutcome {
        if let Some(reason) = self.pedal_guard() {
            return self.ignore("brake", reason);
        }
        if !self.inputs.brake_held() {
            return self.ignore("brake", "brake not held");
        }
        self.inputs.release_brake();
        self.coast();
        InputOutcome::Accepted
    }

    fn pedal_guard(&self) -> Option<&'static str> {
        if !self.engine.is_running() || !self.inputs.inputs_armed() {
            Some("engine not running")
        } else {
            None
        }
    }

    // ─── Lever & Mode ───────────────────────────────────────────────

    /// Lever released at `token`.
    ///
    /// The lever settles wherever it is dropped in manual mode; the selected
    /// gear follows only while the engine runs.
    pub fn move_lever(&mut self, token: &str) -> LeverResult {
        let Some(gear) = Gear::from_token(token) else {
            self.reject("lever", "unknown lever position");
            return LeverResult::Rejected("unknown lever position");
        };
        if self.mode.mode() != TransmissionMode::Manual {
            self.reject("lever", "lever ignored in automatic mode");
            return LeverResult::Rejected("lever ignored in automatic mode");
        }
        self.lever.settle_at(gear);
        if !self.engine.is_running() {
            self.reject("lever", "engine not running");
            return LeverResult::Rejected("engine not running");
        }

        let result =
            self.gear
                .on_manual_lever_moved(token, TransmissionMode::Manual, self.ramp.direction());
        if let LeverResult::Accepted(Some(change)) = result {
            self.announce(change);
            if self.inputs.throttle_held() {
                self.accelerate();
            }
            self.publish_frame(false);
        }
        result
    }

    /// Request a transmission mode.
    pub fn switch_mode(&mut self, target: TransmissionMode) -> ModeTransition {
        let result = self
            .mode
            .request(target, self.inputs.ignition_on(), self.ramp.speed());
        match result {
            ModeTransition::Ok(TransmissionMode::Manual) => {
                info!("Transmission manual");
                let resting = self.lever.resting_gear();
                if let Some(change) =
                    self.gear
                        .apply(resting, TransmissionMode::Manual, RampDirection::Idle)
                {
                    self.announce(change);
                }
            }
            ModeTransition::Ok(TransmissionMode::Automatic) => info!("Transmission automatic"),
            ModeTransition::Rejected(reason) => self.reject("mode", reason),
            ModeTransition::Unchanged => {}
        }
        result
    }

    /// Flip between automatic and manual.
    pub fn toggle_mode(&mut self) -> ModeTransition {
        self.switch_mode(self.mode.mode().toggled())
    }

    // ─── Ramp Control ───────────────────────────────────────────────

    /// Drive with the throttle held.
    ///
    /// Automatic ramps with the profile of the speed-implied gear; manual
    /// with the selected gear's, decaying first if speed is above its
    /// ceiling. Gears without a profile (P, N) only coast.
    fn accelerate(&mut self) {
        self.shift_timer.cancel(&mut self.scheduler);
        let speed = self.ramp.speed();
        let mode = self.mode.mode();
        let profile = match mode {
            TransmissionMode::Automatic => self.table.profile(self.table.gear_for_speed(speed)),
            TransmissionMode::Manual => self.table.profile(self.gear.current()),
        }
        .copied();

        // The pedal stays down; a later lever move picks the drive back up.
        let Some(profile) = profile else {
            debug!(gear = %self.gear.current(), "No drive in gear, coasting");
            if speed == 0 {
                self.halt();
            } else {
                self.begin_coast_ramp(
                    self.timing.decel_step,
                    self.timing.coast_interval_ms,
                    Completion::None,
                );
            }
            return;
        };

        if mode == TransmissionMode::Manual && speed > profile.speed_ceiling {
            debug!(
                speed,
                ceiling = profile.speed_ceiling,
                "Forced downshift"
            );
            self.ramp.begin_downshift(profile);
            self.arm_ramp();
            return;
        }
        self.start_forward(profile);
    }

    fn start_forward(&mut self, profile: GearProfile) {
        self.ramp.begin_forward(profile);
        self.arm_ramp();
    }

    /// Release the throttle and ramp down.
    fn decelerate(&mut self, step: u16, interval_ms: u32, completion: Completion) {
        self.inputs.release_throttle();
        self.begin_coast_ramp(step, interval_ms, completion);
    }

    /// Ramp down without touching the pedals.
    fn begin_coast_ramp(&mut self, step: u16, interval_ms: u32, completion: Completion) {
        self.shift_timer.cancel(&mut self.scheduler);
        self.ramp.begin_decel(step, interval_ms, completion);
        self.arm_ramp();
    }

    /// Roll out at the coasting rate, or stop if already standing.
    fn coast(&mut self) {
        if self.ramp.speed() == 0 {
            self.halt();
        } else {
            self.decelerate(
                self.timing.decel_step,
                self.timing.coast_interval_ms,
                Completion::None,
            );
        }
    }

    fn halt(&mut self) {
        self.ramp_timer.cancel(&mut self.scheduler);
        self.shift_timer.cancel(&mut self.scheduler);
        self.ramp.stop();
    }

    /// (Re)arm the ramp timer at the active phase's interval.
    fn arm_ramp(&mut self) {
        let Some(interval_ms) = self.ramp.interval_ms(self.timing.downshift_interval_ms) else {
            self.ramp_timer.cancel(&mut self.scheduler);
            return;
        };
        if let Err(e) = self.ramp_timer.arm(
            &mut self.scheduler,
            TimerAction::RampTick,
            interval_ms,
            TimerKind::Repeating { interval_ms },
        ) {
            error!("Failed to arm ramp timer: {e}");
            self.ramp.stop();
        }
    }

    fn on_ramp_tick(&mut self) {
        let phase = self.ramp.phase();
        if phase.is_throttle_driven() && self.inputs.ignition_on() && !self.inputs.throttle_held()
        {
            self.coast();
            return;
        }

        let direction = self.ramp.direction();
        let sweep = matches!(
            phase,
            RampPhase::Sweep { .. }
                | RampPhase::Decelerating {
                    completion: Completion::SweepFinished,
                    ..
                }
        );

        let outcome = self.ramp.tick();
        if outcome == TickOutcome::Idle {
            self.ramp_timer.cancel(&mut self.scheduler);
            return;
        }

        if !sweep {
            let change = self.gear.follow_speed(
                &self.table,
                self.ramp.speed(),
                self.inputs.ignition_on(),
                self.mode.mode(),
                direction,
            );
            if let Some(change) = change {
                self.announce(change);
            }
        }
        self.publish_frame(sweep);

        match outcome {
            TickOutcome::CeilingReached => self.on_ceiling(phase),
            TickOutcome::WithinCeiling => {
                if let RampPhase::Downshifting { profile } = phase {
                    self.start_forward(profile);
                }
            }
            TickOutcome::Stopped(completion) => {
                self.ramp_timer.cancel(&mut self.scheduler);
                if completion == Completion::SweepFinished {
                    self.finish_startup();
                }
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }

    fn on_ceiling(&mut self, phase: RampPhase) {
        match phase {
            RampPhase::Sweep { .. } => self.decelerate(
                self.timing.sweep_step,
                self.timing.sweep_interval_ms,
                Completion::SweepFinished,
            ),
            RampPhase::Accelerating { profile } => {
                self.ramp_timer.cancel(&mut self.scheduler);
                let next = match self.mode.mode() {
                    TransmissionMode::Automatic => self.table.next(profile.gear).copied(),
                    TransmissionMode::Manual => None,
                };
                match next {
                    Some(next) => {
                        debug!(from = %profile.gear, to = %next.gear, "Shift delay");
                        self.ramp.await_shift(next);
                        self.arm_one_shot(
                            Slot::Shift,
                            TimerAction::ShiftDelay,
                            profile.post_shift_delay_ms,
                        );
                    }
                    None => self.ramp.hold(profile),
                }
            }
            _ => {}
        }
    }

    fn on_shift_delay(&mut self) {
        if let RampPhase::AwaitingShift { next } = self.ramp.phase() {
            if self.inputs.throttle_held() {
                self.start_forward(next);
            } else {
                self.coast();
            }
        }
    }

    // ─── Outputs ────────────────────────────────────────────────────

    fn announce(&mut self, change: GearChange) {
        self.stats.gear_changes += 1;
        debug!(from = %change.from, to = %change.to, cue = change.shift_cue, "Gear change");
        if change.shift_cue {
            self.stats.shift_cues += 1;
            self.sound.play_shift_cue();
        }
        self.render.on_shift_pulse(change.to);
        if change.animate_lever {
            self.lever.animate_to(change.to);
        }
    }

    fn publish_frame(&mut self, sweep: bool) {
        let speed = self.ramp.speed();
        let gear = self.gear.current();
        self.gauges.rpm = if sweep {
            sweep_rpm(speed)
        } else {
            rpm_estimate(speed, gear, self.inputs.ignition_on())
        };
        let frame = RenderFrame {
            at_ms: self.now_ms(),
            speed,
            gear,
            rpm: self.gauges.rpm,
            oil_temp: self.gauges.oil_temp,
            sweep,
        };
        self.render.on_tick(&frame);
        self.stats.frames += 1;

        if !sweep {
            self.sound.on_engine_load(frame.rpm);
            let idling = self.engine.is_running() && (speed == 0 || gear.is_idle());
            self.set_idle_cue(idling);
        }
    }

    fn set_idle_cue(&mut self, on: bool) {
        if on == self.idle_cue_on {
            return;
        }
        self.idle_cue_on = on;
        if on {
            self.sound.play_idle_cue();
        } else {
            self.sound.stop_idle_cue();
        }
    }

    // ─── Helpers ────────────────────────────────────────────────────

    fn arm_one_shot(&mut self, slot: Slot, action: TimerAction, delay_ms: u32) {
        let handle = match slot {
            Slot::Shift => &mut self.shift_timer,
            Slot::Ceremony => &mut self.ceremony_timer,
        };
        if let Err(e) = handle.arm(&mut self.scheduler, action, delay_ms, TimerKind::OneShot) {
            error!(?action, "Failed to arm timer: {e}");
        }
    }

    fn reject(&mut self, input: &'static str, reason: &'static str) {
        self.stats.rejected_inputs += 1;
        debug!(input, reason, "Input rejected");
    }

    fn ignore(&mut self, input: &'static str, reason: &'static str) -> InputOutcome {
        self.reject(input, reason);
        InputOutcome::Ignored(reason)
    }
}

// Ramp, shift, ceremony and oil timers can all be live at once.
const_assert!(MAX_TIMERS >= 4);

#[derive(Debug, Clone, Copy)]
enum Slot {
    Shift,
    Ceremony,
}
