#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Press detection for the single button line.
//!
//! The hardware exposes one active-low, pulled-high input. Adapters translate
//! the raw line level into a pressed flag and sample it exactly once per
//! tick; this system turns the level sequence into rising-edge press events.

/// Detects rising transitions of the sampled button level.
#[derive(Debug)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Creates a detector that treats a line held at boot as already pressed,
    /// so it cannot register as a fresh press on the first sample.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: true }
    }

    /// Records the level sampled for this tick and reports whether it forms
    /// a rising edge against the previous tick's level.
    pub fn sample(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.previous;
        self.previous = pressed;
        edge
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}
