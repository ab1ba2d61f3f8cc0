//! State enums shared by the simulation and its collaborators.
//!
//! All enums use `#[repr(u8)]` for a compact layout. Gears serialize as the
//! lever tokens printed on the shifter plate (`"P"`, `"R"`, `"N"`, `"1"`..`"8"`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::FORWARD_GEARS;

// ─── Gear ───────────────────────────────────────────────────────────

/// Selected gear.
///
/// `Park`, `Reverse` and `Neutral` are distinct from every numbered gear;
/// equality is by variant, never by position on the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Gear {
    #[serde(rename = "P")]
    Park = 0,
    #[serde(rename = "R")]
    Reverse = 1,
    #[serde(rename = "N")]
    Neutral = 2,
    #[serde(rename = "1")]
    First = 3,
    #[serde(rename = "2")]
    Second = 4,
    #[serde(rename = "3")]
    Third = 5,
    #[serde(rename = "4")]
    Fourth = 6,
    #[serde(rename = "5")]
    Fifth = 7,
    #[serde(rename = "6")]
    Sixth = 8,
    #[serde(rename = "7")]
    Seventh = 9,
    #[serde(rename = "8")]
    Eighth = 10,
}

impl Gear {
    /// Forward gears in shift order.
    pub const FORWARD: [Gear; FORWARD_GEARS] = [
        Gear::First,
        Gear::Second,
        Gear::Third,
        Gear::Fourth,
        Gear::Fifth,
        Gear::Sixth,
        Gear::Seventh,
        Gear::Eighth,
    ];

    /// Forward gear from its number (1-8).
    #[inline]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Fifth),
            6 => Some(Self::Sixth),
            7 => Some(Self::Seventh),
            8 => Some(Self::Eighth),
            _ => None,
        }
    }

    /// Gear number for forward gears, `None` for P/R/N.
    #[inline]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Park | Self::Reverse | Self::Neutral => None,
            other => Some(other as u8 - 2),
        }
    }

    /// Whether the engine is decoupled from the wheels.
    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Park | Self::Neutral)
    }

    /// Resolve a lever token.
    ///
    /// The two ends of the neutral rail (`C`, `D`) resolve to neutral.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "P" | "p" => Some(Self::Park),
            "R" | "r" => Some(Self::Reverse),
            "N" | "n" | "C" | "c" | "D" | "d" => Some(Self::Neutral),
            other => other.parse::<u8>().ok().and_then(Self::from_number),
        }
    }

    /// Lever token printed on the shifter plate.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Park => "P",
            Self::Reverse => "R",
            Self::Neutral => "N",
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
            Self::Fourth => "4",
            Self::Fifth => "5",
            Self::Sixth => "6",
            Self::Seventh => "7",
            Self::Eighth => "8",
        }
    }
}

impl Default for Gear {
    fn default() -> Self {
        Self::Park
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ─── Transmission Mode ──────────────────────────────────────────────

/// Transmission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TransmissionMode {
    /// Gear follows speed.
    Automatic = 0,
    /// Gear follows the lever.
    Manual = 1,
}

impl TransmissionMode {
    /// The other mode.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Automatic => Self::Manual,
            Self::Manual => Self::Automatic,
        }
    }
}

impl Default for TransmissionMode {
    fn default() -> Self {
        Self::Automatic
    }
}

// ─── Engine State ───────────────────────────────────────────────────

/// Engine lifecycle state.
///
/// Inputs are only honoured in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EngineState {
    /// Ignition off, mode switching allowed.
    Off = 0,
    /// Start cue and gauge sweep in progress.
    StartingUp = 1,
    /// Ignition on, pedals armed.
    Running = 2,
    /// Pedals disarmed, waiting for the gauge reset.
    ShuttingDown = 3,
}

impl EngineState {
    /// Whether the state is mid-ceremony.
    #[inline]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::StartingUp | Self::ShuttingDown)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Off
    }
}
