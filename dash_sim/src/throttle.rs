//! Pedal and ignition input state.
//!
//! Packed as bitflags. Pressing one pedal always releases the other, so
//! `THROTTLE | BRAKE` is never observable.

use bitflags::bitflags;

bitflags! {
    /// Held inputs and ignition flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputFlags: u8 {
        /// Accelerator pedal held.
        const THROTTLE = 0x01;
        /// Brake pedal held.
        const BRAKE    = 0x02;
        /// Ignition on.
        const IGNITION = 0x04;
        /// Pedal listeners armed (engine running).
        const ARMED    = 0x08;
    }
}

impl InputFlags {
    /// Both pedals.
    pub const PEDALS: Self = Self::from_bits_truncate(Self::THROTTLE.bits() | Self::BRAKE.bits());
}

/// Throttle / brake / ignition state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleState {
    flags: InputFlags,
}

impl ThrottleState {
    pub const fn new() -> Self {
        Self {
            flags: InputFlags::empty(),
        }
    }

    #[inline]
    pub const fn flags(&self) -> InputFlags {
        self.flags
    }

    #[inline]
    pub const fn throttle_held(&self) -> bool {
        self.flags.contains(InputFlags::THROTTLE)
    }

    #[inline]
    pub const fn brake_held(&self) -> bool {
        self.flags.contains(InputFlags::BRAKE)
    }

    #[inline]
    pub const fn ignition_on(&self) -> bool {
        self.flags.contains(InputFlags::IGNITION)
    }

    #[inline]
    pub const fn inputs_armed(&self) -> bool {
        self.flags.contains(InputFlags::ARMED)
    }

    /// Hold the throttle; releases the brake.
    pub fn press_throttle(&mut self) {
        self.flags.remove(InputFlags::BRAKE);
        self.flags.insert(InputFlags::THROTTLE);
    }

    pub fn release_throttle(&mut self) {
        self.flags.remove(InputFlags::THROTTLE);
    }

    /// Hold the brake; releases the throttle.
    pub fn press_brake(&mut self) {
        self.flags.remove(InputFlags::THROTTLE);
        self.flags.insert(InputFlags::BRAKE);
    }

    pub fn release_brake(&mut self) {
        self.flags.remove(InputFlags::BRAKE);
    }

    pub fn set_ignition(&mut self, on: bool) {
        self.flags.set(InputFlags::IGNITION, on);
    }

    /// Start listening to the pedals.
    pub fn arm_inputs(&mut self) {
        self.flags.insert(InputFlags::ARMED);
    }

    /// Stop listening to the pedals and drop anything held.
    pub fn disarm_inputs(&mut self) {
        self.flags.remove(InputFlags::ARMED | InputFlags::PEDALS);
    }
}
