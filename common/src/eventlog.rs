//! Diagnostic event log.
//!
//! A bounded ring buffer of short lines recorded by the display
//! session (goal raises, configuration pushes). The host drains it at
//! its own pace; on the simulator that means stdout. No time
//! dependencies, so it lives in the no_std core.

use heapless::{Deque, String};

/// Maximum number of lines kept before the oldest is dropped.
pub const LOG_CAPACITY: usize = 8;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of diagnostic messages, oldest first.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_CAPACITY>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message, truncating to the line length. If the buffer is
    /// full the oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Remove and return the oldest message.
    pub fn pop(&mut self) -> Option<String<LOG_LINE_LENGTH>> { self.buffer.pop_front() }

    /// Iterate over messages without draining (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
