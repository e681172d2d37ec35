#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Platform Jumper engine.
//!
//! This crate defines the message surface that connects adapters to the
//! authoritative engine. Adapters submit [`Command`] values once per tick,
//! the engine executes them via its `apply` entry point, and then broadcasts
//! [`Event`] values describing what happened so adapters can draw frames and
//! play audio cues deterministically.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Banner shown on the top display row while waiting for the first press.
pub const INTRO_BANNER: &str = "PLATFORM JUMPER";

/// Flashing instruction line shown beneath the intro banner.
pub const INTRO_PROMPT: &str = "Press to Jump !";

/// Transient message flashed while the player is airborne.
pub const JUMP_MESSAGE: &str = "Jump!";

/// Flashing headline of the game-over sequence.
pub const GAME_OVER_MESSAGE: &str = "GAME OVER !";

/// Label preceding the final score on the summary screen.
pub const SCORE_LABEL: &str = "Score: ";

/// Label preceding the session best on the summary screen.
pub const BEST_LABEL: &str = "Best : ";

/// Display column occupied by the player sprite on both rows.
pub const PLAYER_COLUMN: usize = 1;

/// Contents of a single lane cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Traversable ground the player can run over.
    Empty,
    /// A solid obstacle that ends the run when hit while grounded.
    Block,
}

/// Scrolling row of terrain cells in front of and beneath the player.
///
/// The lane always holds exactly the number of cells it was created with.
/// It is mutated only by the engine's per-tick scroll step, which drops the
/// head cell and appends one freshly generated tail cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lane {
    cells: VecDeque<Cell>,
}

impl Lane {
    /// Creates an all-empty lane of the provided length.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            cells: std::iter::repeat(Cell::Empty).take(length).collect(),
        }
    }

    /// Number of cells in the lane. Constant over the lane's lifetime.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Reports whether the lane holds no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at the provided column, or [`Cell::Empty`] when the
    /// column lies outside the lane.
    #[must_use]
    pub fn cell(&self, column: usize) -> Cell {
        self.cells.get(column).copied().unwrap_or(Cell::Empty)
    }

    /// Cell currently under the player sprite.
    #[must_use]
    pub fn player_cell(&self) -> Cell {
        self.cell(PLAYER_COLUMN)
    }

    /// Iterates the lane cells from the leftmost (oldest) to the tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Drops the head cell and appends the provided tail cell, keeping the
    /// lane length invariant.
    pub fn advance(&mut self, tail: Cell) {
        let _ = self.cells.pop_front();
        self.cells.push_back(tail);
    }

    /// Blanks every cell back to [`Cell::Empty`].
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    /// Reports whether any cell in the lane holds an obstacle.
    #[must_use]
    pub fn has_obstacles(&self) -> bool {
        self.cells.iter().any(|cell| *cell == Cell::Block)
    }
}

/// Top-level phase of the engine's state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Banner screen; waiting for the first press.
    Intro,
    /// Active gameplay; all systems execute each tick.
    Running,
    /// Terminal until a press triggers a reset; only input sampling runs.
    GameOver,
}

/// Vertical state of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JumpState {
    /// The player runs along the lane and can collide with obstacles.
    Grounded,
    /// The player is above the lane for the given number of further ticks.
    Airborne {
        /// Ticks left before the landing transition.
        ticks_remaining: u8,
    },
}

impl JumpState {
    /// Reports whether the player is currently off the ground.
    #[must_use]
    pub const fn is_airborne(&self) -> bool {
        matches!(self, Self::Airborne { .. })
    }
}

/// Named audio feedback event composed from buzzer bursts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Played when a run starts or restarts.
    Start,
    /// Played at every take-off.
    Jump,
    /// Played once at the running-to-game-over transition.
    GameOver,
}

impl Cue {
    /// Number of tone bursts composing the cue.
    #[must_use]
    pub const fn bursts(&self) -> u8 {
        match self {
            Self::Start => 2,
            Self::Jump => 1,
            Self::GameOver => 3,
        }
    }

    /// Silent gap between consecutive bursts.
    #[must_use]
    pub const fn gap(&self) -> Duration {
        match self {
            Self::Start => Duration::from_millis(100),
            Self::Jump => Duration::ZERO,
            Self::GameOver => Duration::from_millis(150),
        }
    }
}

/// Commands that express all permissible engine mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Performs one full engine step with the button level sampled for it.
    Tick {
        /// Whether the button line read as pressed for this tick.
        button_pressed: bool,
    },
    /// Forces a fresh run, preserving only the session high score.
    Reset,
}

/// Events broadcast by the engine after processing a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A run began, either from the intro screen or after a reset.
    GameStarted,
    /// The player took off or restarted the airborne countdown mid-air.
    JumpStarted {
        /// Jumps consumed so far in the current airborne sequence.
        jumps_used: u8,
    },
    /// The airborne countdown expired and the player touched down.
    Landed {
        /// Whether the jump allowance was restored by a clear landing.
        jumps_restored: bool,
    },
    /// The score advanced by one for a completed running tick.
    ScoreAdvanced {
        /// Score after the increment.
        score: u16,
    },
    /// The difficulty ramp shortened the tick interval.
    SpeedIncreased {
        /// Tick interval now in effect.
        tick_interval: Duration,
    },
    /// The player hit an obstacle and the run ended.
    GameEnded {
        /// Final score of the run, frozen until the next reset.
        score: u16,
        /// Session best after folding in the final score.
        high_score: u16,
    },
    /// An adapter should play the named audio cue.
    CueRequested {
        /// Cue to play.
        cue: Cue,
    },
}

/// Tunable constants governing the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tick interval at the start of a run.
    pub initial_tick: Duration,
    /// Lower bound the difficulty ramp never undercuts.
    pub floor_tick: Duration,
    /// Amount the tick interval shrinks by at each score threshold.
    pub tick_step: Duration,
    /// Score multiple at which the tick interval shrinks.
    pub score_step_threshold: u16,
    /// Number of cells in the scrolling lane.
    pub lane_length: usize,
    /// Ticks a single jump keeps the player airborne.
    pub jump_duration_ticks: u8,
    /// Ticks the transient jump message stays visible.
    pub jump_message_ticks: u8,
    /// Jumps allowed before the player must touch down cleanly.
    pub max_jump_count: u8,
    /// A spawn roll succeeds once in this many outcomes; `0` disables
    /// spawning and `1` forces it.
    pub obstacle_spawn_one_in: u32,
    /// Guaranteed empty cells following a spawned obstacle run.
    pub obstacle_cooldown_ticks: u8,
    /// A spawned run extends to two cells once in this many outcomes.
    pub obstacle_extra_one_in: u32,
    /// Seed for the terrain generator's random stream.
    pub rng_seed: u64,
}

impl Config {
    /// Seed used when the caller does not request fresh entropy, keeping the
    /// obstacle sequence identical on every boot.
    pub const DEFAULT_SEED: u64 = 0x706a_2026_0d15_ea5e;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_tick: Duration::from_millis(80),
            floor_tick: Duration::from_millis(50),
            tick_step: Duration::from_millis(5),
            score_step_threshold: 50,
            lane_length: 16,
            jump_duration_ticks: 3,
            jump_message_ticks: 3,
            max_jump_count: 2,
            obstacle_spawn_one_in: 6,
            obstacle_cooldown_ticks: 4,
            obstacle_extra_one_in: 2,
            rng_seed: Self::DEFAULT_SEED,
        }
    }
}
