//! Core engine for the radial watch face.
//!
//! This crate contains the platform-agnostic dial state and geometry
//! code shared between the simulator and any hardware host:
//!
//! - [`colors`]: Rgb888 palette and packed-color normalization
//! - [`config`]: Layout constants and the display style parameters
//! - [`state`]: The display session (time, battery, steps models)
//! - [`settings`]: User configuration and the persistence seam
//! - [`geometry`]: Tick-mark and progress-arc computation
//! - [`render`]: Redraw coalescing
//! - [`widgets`]: Dial and text rendering over a generic draw target
//! - [`styles`]: Pre-built text styles
//! - [`eventlog`]: Diagnostic ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! It avoids any dependencies on `std::time` or platform-specific types;
//! the host delivers timestamps and sensor readings through the entry
//! points on [`state::WatchState`].

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod eventlog;
pub mod geometry;
pub mod render;
pub mod settings;
pub mod state;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use config::{DialStyle, DisplayShape, FaceLayout};
pub use settings::{ConfigUpdate, DialConfig, SettingsStore, StorageKey};
pub use state::WatchState;
