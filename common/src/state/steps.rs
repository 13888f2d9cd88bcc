//! Step count tracking with a monotonically-adjusted goal.
//!
//! The goal is the denominator for the steps progress arc. It only
//! ever moves up: whenever the day's count exceeds it, the goal is
//! raised to match so the arc reads 100% instead of overflowing.
//! [`StepsModel::record_steps`] reports the raise so the caller can
//! persist the new goal immediately.

use core::fmt::Write;

use heapless::String;

/// Goal used when storage has nothing usable.
pub const DEFAULT_STEP_GOAL: u32 = 10_000;

/// Stored goals below this are treated as corrupt and discarded.
pub const MIN_PLAUSIBLE_GOAL: u32 = 1_000;

/// Apply the plausibility rule to a value loaded from storage.
pub const fn sanitize_goal(stored: Option<u32>) -> u32 {
    match stored {
        Some(goal) if goal >= MIN_PLAUSIBLE_GOAL => goal,
        _ => DEFAULT_STEP_GOAL,
    }
}

/// Current step count and goal. Invariant: `goal >= current` after
/// every update, and the goal never decreases within a session.
#[derive(Debug)]
pub struct StepsModel {
    current: u32,
    goal: u32,
}

impl StepsModel {
    pub const fn new(goal: u32) -> Self { Self { current: 0, goal } }

    /// Record the day's step count.
    ///
    /// Returns `true` when the goal was raised to keep up, in which
    /// case the caller is responsible for persisting it.
    pub const fn record_steps(
        &mut self,
        current: u32,
    ) -> bool {
        self.current = current;
        if current > self.goal {
            self.goal = current;
            true
        } else {
            false
        }
    }

    /// Progress toward the goal in `0..=100`.
    ///
    /// The goal is positive by construction; a zero goal would mean
    /// the count has already caught up, so it reads as complete
    /// rather than dividing.
    pub const fn progress_percent(&self) -> u8 {
        if self.goal == 0 {
            return 100;
        }
        let pct = self.current as u64 * 100 / self.goal as u64;
        if pct > 100 { 100 } else { pct as u8 }
    }

    /// Five-digit zero-padded count for the steps label.
    pub fn steps_text(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(text, "{:05}", self.current);
        text
    }

    #[inline]
    pub const fn current(&self) -> u32 { self.current }

    #[inline]
    pub const fn goal(&self) -> u32 { self.goal }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_raised_when_exceeded() {
        let mut steps = StepsModel::new(10_000);
        let changed = steps.record_steps(12_000);
        assert!(changed, "exceeding the goal must report a change");
        assert_eq!(steps.goal(), 12_000);
        assert_eq!(steps.progress_percent(), 100);
    }

    #[test]
    fn test_goal_untouched_below_threshold() {
        let mut steps = StepsModel::new(10_000);
        let changed = steps.record_steps(4_000);
        assert!(!changed);
        assert_eq!(steps.goal(), 10_000);
        assert_eq!(steps.progress_percent(), 40);
    }

    #[test]
    fn test_goal_never_decreases() {
        let mut steps = StepsModel::new(10_000);
        let sequence = [500, 11_000, 3_000, 11_500, 0, 20_000, 1];
        let mut last_goal = steps.goal();
        for count in sequence {
            steps.record_steps(count);
            assert!(steps.goal() >= count, "goal must cover the current count");
            assert!(steps.goal() >= last_goal, "goal must never decrease");
            last_goal = steps.goal();
        }
        assert_eq!(steps.goal(), 20_000);
    }

    #[test]
    fn test_progress_percent_stays_in_range() {
        let mut steps = StepsModel::new(7_919);
        for count in (0..30_000).step_by(997) {
            steps.record_steps(count);
            assert!(steps.progress_percent() <= 100);
        }
    }

    #[test]
    fn test_progress_rounds_down() {
        let mut steps = StepsModel::new(10_000);
        steps.record_steps(9_999);
        assert_eq!(steps.progress_percent(), 99);
    }

    #[test]
    fn test_zero_goal_reads_complete() {
        let steps = StepsModel::new(0);
        assert_eq!(steps.progress_percent(), 100);
    }

    #[test]
    fn test_sanitize_goal() {
        assert_eq!(sanitize_goal(None), DEFAULT_STEP_GOAL);
        assert_eq!(sanitize_goal(Some(999)), DEFAULT_STEP_GOAL, "implausibly small value is discarded");
        assert_eq!(sanitize_goal(Some(0)), DEFAULT_STEP_GOAL);
        assert_eq!(sanitize_goal(Some(1_000)), 1_000);
        assert_eq!(sanitize_goal(Some(25_000)), 25_000);
    }

    #[test]
    fn test_steps_text_zero_padded() {
        let mut steps = StepsModel::new(10_000);
        steps.record_steps(42);
        assert_eq!(steps.steps_text().as_str(), "00042");
        steps.record_steps(12_345);
        assert_eq!(steps.steps_text().as_str(), "12345");
    }
}
