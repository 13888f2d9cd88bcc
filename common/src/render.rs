//! Redraw coalescing.
//!
//! Every model mutation marks the face dirty; the host asks once per
//! refresh cycle whether a draw pass is needed and acknowledges it
//! afterwards. Any number of mutations between passes collapse into a
//! single redraw, so a burst of events (battery notice plus step
//! notice plus configuration push) costs one frame, not three.
//!
//! The scheduler has no timers of its own — it is driven entirely by
//! the external event sources and the host's draw loop.

/// Redraw state of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RedrawState {
    /// Display matches the current state; nothing to do.
    Clean,
    /// At least one model changed since the last draw pass.
    Dirty,
}

/// Two-state dirty tracker with a completed-pass counter.
#[derive(Debug)]
pub struct RenderScheduler {
    state: RedrawState,
    redraws_completed: u32,
}

impl RenderScheduler {
    /// New sessions start dirty so the first frame always draws.
    pub const fn new() -> Self {
        Self {
            state: RedrawState::Dirty,
            redraws_completed: 0,
        }
    }

    /// Request a redraw. Idempotent between draw passes.
    #[inline]
    pub const fn mark_dirty(&mut self) { self.state = RedrawState::Dirty; }

    /// Whether the host should run a draw pass this cycle.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { matches!(self.state, RedrawState::Dirty) }

    /// Acknowledge a completed draw pass.
    pub const fn complete_redraw(&mut self) {
        if self.needs_redraw() {
            self.state = RedrawState::Clean;
            self.redraws_completed += 1;
        }
    }

    /// Number of draw passes completed this session (diagnostics only).
    #[inline]
    pub const fn redraws_completed(&self) -> u32 { self.redraws_completed }
}

impl Default for RenderScheduler {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
