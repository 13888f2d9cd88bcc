//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they live here rather than in the common
//! crate.

use std::time::Duration;

/// Target frame time (~30 FPS). The main loop sleeps if a frame
/// completes early; most frames draw nothing at all.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Real time per simulated minute. The clock runs fast so arcs and
/// the time text visibly move during a demo.
pub const SIMULATED_MINUTE: Duration = Duration::from_secs(1);
