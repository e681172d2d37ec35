#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Airborne state machine for the player.
//!
//! Presses are buffered as a single pending request and consumed at the next
//! take-off opportunity. Each take-off restarts the airborne countdown, so a
//! second press mid-air reads as a second hop before landing. The jump
//! allowance is restored only by a clean landing; touching down onto an
//! obstacle leaves it spent, which the collision check then turns into a
//! game over within the same tick.

use platform_jumper_core::{Cell, JumpState};

/// Configuration parameters required to construct the jump controller.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    jump_duration_ticks: u8,
    message_ticks: u8,
    max_jumps: u8,
}

impl Config {
    /// Creates a new configuration from the airborne duration, the transient
    /// message duration and the jump allowance.
    #[must_use]
    pub const fn new(jump_duration_ticks: u8, message_ticks: u8, max_jumps: u8) -> Self {
        Self {
            jump_duration_ticks,
            message_ticks,
            max_jumps,
        }
    }
}

/// Outcome of a landing transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landing {
    /// Whether the landing cell was clear and the jump allowance reset.
    pub jumps_restored: bool,
}

/// Buffers jump requests and drives the grounded/airborne state machine.
#[derive(Debug)]
pub struct JumpController {
    state: JumpState,
    jumps_used: u8,
    request: bool,
    message_ticks: u8,
    config: Config,
}

impl JumpController {
    /// Creates a grounded controller using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            state: JumpState::Grounded,
            jumps_used: 0,
            request: false,
            message_ticks: 0,
            config,
        }
    }

    /// Buffers a press until the next take-off opportunity.
    pub fn request_jump(&mut self) {
        self.request = true;
    }

    /// Ages the transient jump message. Called once at the start of every
    /// running tick, before a new take-off may refresh the timer.
    pub fn begin_tick(&mut self) {
        self.message_ticks = self.message_ticks.saturating_sub(1);
    }

    /// Consumes the buffered request, if any.
    ///
    /// Returns the number of jumps now used when the request was honored.
    /// A request arriving with the allowance exhausted is dropped outright.
    pub fn take_off(&mut self) -> Option<u8> {
        if !self.request {
            return None;
        }
        self.request = false;

        if self.jumps_used >= self.config.max_jumps {
            return None;
        }

        self.state = JumpState::Airborne {
            ticks_remaining: self.config.jump_duration_ticks,
        };
        self.jumps_used += 1;
        self.message_ticks = self.config.message_ticks;
        Some(self.jumps_used)
    }

    /// Advances the airborne countdown for this tick, landing when it has
    /// already expired.
    ///
    /// `landing_cell` is the lane cell under the player after this tick's
    /// scroll; only a clear cell restores the jump allowance. Runs after
    /// [`Self::take_off`] within the tick, so a fresh jump spends its first
    /// countdown step immediately and stays airborne for exactly the
    /// configured number of further ticks.
    pub fn settle(&mut self, landing_cell: Cell) -> Option<Landing> {
        let JumpState::Airborne { ticks_remaining } = self.state else {
            return None;
        };

        if ticks_remaining > 0 {
            self.state = JumpState::Airborne {
                ticks_remaining: ticks_remaining - 1,
            };
            return None;
        }

        self.state = JumpState::Grounded;
        let jumps_restored = landing_cell != Cell::Block;
        if jumps_restored {
            self.jumps_used = 0;
        }
        Some(Landing { jumps_restored })
    }

    /// Current grounded/airborne state.
    #[must_use]
    pub const fn state(&self) -> JumpState {
        self.state
    }

    /// Jumps consumed since the last clean landing.
    #[must_use]
    pub const fn jumps_used(&self) -> u8 {
        self.jumps_used
    }

    /// Whether the transient jump message should be visible this tick.
    #[must_use]
    pub const fn message_visible(&self) -> bool {
        self.message_ticks > 0
    }

    /// Returns the controller to its grounded boot state.
    pub fn reset(&mut self) {
        self.state = JumpState::Grounded;
        self.jumps_used = 0;
        self.request = false;
        self.message_ticks = 0;
    }
}
