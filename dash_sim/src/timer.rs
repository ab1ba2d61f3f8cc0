//! Virtual-clock timers (setTimeout / setInterval equivalents).
//!
//! The scheduler owns a fixed array of `MAX_TIMERS` slots. Every slot carries
//! a generation counter that is bumped whenever the slot is freed, so a
//! [`TimerId`] kept past its timer's cancellation can never cancel or match
//! the slot's next occupant.
//!
//! Time only moves when the simulation calls [`Scheduler::advance`]; due
//! timers are then drained one by one with [`Scheduler::pop_due`] in
//! `(due_at, arm order)` order. Callbacks run to completion between pops, so
//! a callback that cancels another due timer prevents it from firing.

use dash_common::consts::MAX_TIMERS;
use thiserror::Error;

/// Handle to an armed timer: slot index + generation at arm time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId {
    slot: u8,
    generation: u32,
}

/// Firing pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once, then frees its slot.
    OneShot,
    /// Fires every `interval_ms` until cancelled.
    Repeating { interval_ms: u32 },
}

/// Timer arming failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Every slot is armed.
    #[error("all {0} timer slots are armed")]
    Exhausted(usize),
    /// A repeating timer with a zero interval would never yield.
    #[error("repeating timer interval must be non-zero")]
    ZeroInterval,
}

#[derive(Debug, Clone)]
struct TimerEntry<A> {
    action: A,
    due_at: u64,
    kind: TimerKind,
    seq: u64,
}

/// Fixed-capacity timer scheduler on a millisecond virtual clock.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    now_ms: u64,
    slots: [Option<TimerEntry<A>>; MAX_TIMERS],
    generations: [u32; MAX_TIMERS],
    next_seq: u64,
}

impl<A: Copy> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy> Scheduler<A> {
    /// Empty scheduler at t = 0.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            slots: std::array::from_fn(|_| None),
            generations: [0; MAX_TIMERS],
            next_seq: 0,
        }
    }

    /// Current virtual time [ms].
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward. Due timers are collected with [`pop_due`](Self::pop_due).
    #[inline]
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Arm a timer firing `delay_ms` from now.
    pub fn arm(&mut self, action: A, delay_ms: u32, kind: TimerKind) -> Result<TimerId, TimerError> {
        if matches!(kind, TimerKind::Repeating { interval_ms: 0 }) {
            return Err(TimerError::ZeroInterval);
        }

        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(TimerError::Exhausted(MAX_TIMERS))?;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[slot] = Some(TimerEntry {
            action,
            due_at: self.now_ms + u64::from(delay_ms),
            kind,
            seq,
        });

        Ok(TimerId {
            slot: slot as u8,
            generation: self.generations[slot],
        })
    }

    /// Cancel a timer. Returns `false` if the handle was already stale.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if !self.is_live(id) {
            return false;
        }
        self.free(usize::from(id.slot));
        true
    }

    /// Whether `id` still refers to an armed timer.
    #[inline]
    pub fn is_live(&self, id: TimerId) -> bool {
        let slot = usize::from(id.slot);
        slot < MAX_TIMERS && self.generations[slot] == id.generation && self.slots[slot].is_some()
    }

    /// Number of armed timers.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Take the earliest due timer, if any.
    ///
    /// Repeating timers are rescheduled before they are returned; one-shot
    /// timers free their slot (their handle becomes stale).
    pub fn pop_due(&mut self) -> Option<(TimerId, A)> {
        let now = self.now_ms;
        let slot = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (i, e.due_at, e.seq)))
            .filter(|&(_, due_at, _)| due_at <= now)
            .min_by_key(|&(_, due_at, seq)| (due_at, seq))
            .map(|(i, _, _)| i)?;

        let id = TimerId {
            slot: slot as u8,
            generation: self.generations[slot],
        };

        let (action, kind) = self.slots[slot].as_ref().map(|e| (e.action, e.kind))?;
        match kind {
            TimerKind::Repeating { interval_ms } => {
                let seq = self.next_seq;
                self.next_seq += 1;
                if let Some(entry) = self.slots[slot].as_mut() {
                    entry.due_at += u64::from(interval_ms);
                    entry.seq = seq;
                }
            }
            TimerKind::OneShot => self.free(slot),
        }

        Some((id, action))
    }

    fn free(&mut self, slot: usize) {
        self.slots[slot] = None;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
    }
}

// ─── Owned Timer Handle ─────────────────────────────────────────────

/// Owned handle for one logical timer (e.g. "the ramp timer").
///
/// Arming always cancels whatever the slot held before, so at most one timer
/// per handle is ever live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSlot {
    id: Option<TimerId>,
}

impl TimerSlot {
    pub const fn new() -> Self {
        Self { id: None }
    }

    /// Cancel the previous timer, then arm a new one.
    pub fn arm<A: Copy>(
        &mut self,
        scheduler: &mut Scheduler<A>,
        action: A,
        delay_ms: u32,
        kind: TimerKind,
    ) -> Result<TimerId, TimerError> {
        self.cancel(scheduler);
        let id = scheduler.arm(action, delay_ms, kind)?;
        self.id = Some(id);
        Ok(id)
    }

    /// Cancel the held timer. Returns `true` if it was still live.
    pub fn cancel<A: Copy>(&mut self, scheduler: &mut Scheduler<A>) -> bool {
        self.id
            .take()
            .is_some_and(|id| scheduler.cancel(id))
    }

    /// Whether `id` is the timer this handle owns.
    #[inline]
    pub fn holds(&self, id: TimerId) -> bool {
        self.id == Some(id)
    }

    /// Forget a one-shot timer that has just fired.
    #[inline]
    pub fn release(&mut self) {
        self.id = None;
    }

    /// Whether the held timer is still armed.
    pub fn is_armed<A: Copy>(&self, scheduler: &Scheduler<A>) -> bool {
        self.id.is_some_and(|id| scheduler.is_live(id))
    }
}
