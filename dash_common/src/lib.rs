//! Dashboard Common Library
//!
//! Shared types, constants and configuration loading utilities for the
//! dashboard drive simulation workspace.
//!
//! # Module Structure
//!
//! - [`consts`] - Speed, RPM and timing limits
//! - [`state`] - Gear, transmission mode and engine state enums
//! - [`profile`] - Static per-gear ramp profiles
//! - [`config`] - Configuration loading traits and types
//! - [`settings`] - Persisted audio settings store
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use dash_common::prelude::*;
//!
//! let table = GearProfileTable::standard();
//! assert_eq!(table.profile(Gear::First).map(|p| p.speed_ceiling), Some(80));
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod profile;
pub mod settings;
pub mod state;
