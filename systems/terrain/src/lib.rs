#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic terrain generation for the scrolling obstacle lane.
//!
//! One cell is generated per tick. Obstacles appear as contiguous runs of
//! one or two [`Cell::Block`] values, and every run is followed by a
//! guaranteed stretch of empty cells before the next spawn roll may succeed.
//! That spacing is the fairness guarantee that keeps every obstacle
//! clearable with the jump allowance, independent of the seed.

use platform_jumper_core::Cell;

/// Configuration parameters required to construct the terrain generator.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_one_in: u32,
    extra_one_in: u32,
    cooldown_ticks: u8,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration.
    ///
    /// `spawn_one_in` and `extra_one_in` express one-in-N chances; `0`
    /// disables the roll entirely and `1` makes it always succeed.
    #[must_use]
    pub const fn new(spawn_one_in: u32, extra_one_in: u32, cooldown_ticks: u8, rng_seed: u64) -> Self {
        Self {
            spawn_one_in,
            extra_one_in,
            cooldown_ticks,
            rng_seed,
        }
    }
}

/// Generates one lane cell per tick under the cooldown-gated spawn policy.
#[derive(Debug)]
pub struct TerrainGenerator {
    spawn_one_in: u32,
    extra_one_in: u32,
    cooldown_ticks: u8,
    pending_run: u8,
    cooldown: u8,
    rng: SplitMix64,
}

impl TerrainGenerator {
    /// Creates a new generator using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            spawn_one_in: config.spawn_one_in,
            extra_one_in: config.extra_one_in,
            cooldown_ticks: config.cooldown_ticks,
            pending_run: 0,
            cooldown: 0,
            rng: SplitMix64::new(config.rng_seed),
        }
    }

    /// Produces the next tail cell for the lane. Called exactly once per
    /// running tick.
    ///
    /// A pending run cell takes priority over everything else so that a
    /// two-cell obstacle stays contiguous; the cooldown then pays out its
    /// guaranteed empties before another spawn roll is attempted.
    pub fn scroll(&mut self) -> Cell {
        if self.pending_run > 0 {
            self.pending_run -= 1;
            return Cell::Block;
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Cell::Empty;
        }

        if self.roll(self.spawn_one_in) {
            self.pending_run = u8::from(self.roll(self.extra_one_in));
            self.cooldown = self.cooldown_ticks;
            Cell::Block
        } else {
            Cell::Empty
        }
    }

    /// Clears the spawn bookkeeping for a fresh run.
    ///
    /// The random stream keeps advancing across resets; only a new seed
    /// restarts it.
    pub fn reset(&mut self) {
        self.pending_run = 0;
        self.cooldown = 0;
    }

    fn roll(&mut self, one_in: u32) -> bool {
        match one_in {
            0 => false,
            1 => true,
            n => self.rng.next_u64() % u64::from(n) == 0,
        }
    }
}

#[derive(Debug)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, TerrainGenerator};
    use platform_jumper_core::Cell;

    #[test]
    fn disabled_roll_never_spawns() {
        let mut terrain = TerrainGenerator::new(Config::new(0, 0, 4, 1));
        for _ in 0..256 {
            assert_eq!(terrain.scroll(), Cell::Empty);
        }
    }

    #[test]
    fn forced_roll_spawns_a_contiguous_double_run() {
        let mut terrain = TerrainGenerator::new(Config::new(1, 1, 4, 1));
        assert_eq!(terrain.scroll(), Cell::Block);
        assert_eq!(terrain.scroll(), Cell::Block);
        for _ in 0..4 {
            assert_eq!(terrain.scroll(), Cell::Empty);
        }
        assert_eq!(terrain.scroll(), Cell::Block);
    }

    #[test]
    fn forced_roll_without_extra_spawns_single_blocks() {
        let mut terrain = TerrainGenerator::new(Config::new(1, 0, 4, 1));
        assert_eq!(terrain.scroll(), Cell::Block);
        for _ in 0..4 {
            assert_eq!(terrain.scroll(), Cell::Empty);
        }
        assert_eq!(terrain.scroll(), Cell::Block);
    }

    #[test]
    fn reset_clears_pending_run_and_cooldown() {
        let mut terrain = TerrainGenerator::new(Config::new(1, 1, 4, 1));
        assert_eq!(terrain.scroll(), Cell::Block);
        terrain.reset();
        // Spawn roll is forced, so the very next cell spawns a new run
        // rather than paying out the stale cooldown.
        assert_eq!(terrain.scroll(), Cell::Block);
        assert_eq!(terrain.scroll(), Cell::Block);
    }

    #[test]
    fn identical_seeds_generate_identical_lanes() {
        let mut left = TerrainGenerator::new(Config::new(6, 2, 4, 0x1234));
        let mut right = TerrainGenerator::new(Config::new(6, 2, 4, 0x1234));
        for _ in 0..512 {
            assert_eq!(left.scroll(), right.scroll());
        }
    }
}
