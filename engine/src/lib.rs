#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state management for Platform Jumper.
//!
//! The engine owns every piece of mutable game state and advances it one
//! cooperative tick at a time. Adapters sample the button line, submit one
//! [`Command::Tick`] per tick, replay the broadcast [`Event`] values into
//! drawing and audio, then wait out the interval reported by
//! [`query::tick_interval`]. The engine itself never sleeps, so tests can
//! drive it with a virtual clock at any speed.

use platform_jumper_core::{Command, Config, Cue, Event, Lane, Phase, PLAYER_COLUMN};
use platform_jumper_system_collision::grounded_collision;
use platform_jumper_system_input::EdgeDetector;
use platform_jumper_system_jump::{Config as JumpConfig, JumpController};
use platform_jumper_system_scoring::{Config as ScoringConfig, Progression};
use platform_jumper_system_terrain::{Config as TerrainConfig, TerrainGenerator};

/// Owns the complete game state and applies commands deterministically.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    phase: Phase,
    high_score: u16,
    lane: Lane,
    run_frame: bool,
    edge: EdgeDetector,
    jump: JumpController,
    terrain: TerrainGenerator,
    progression: Progression,
}

impl Engine {
    /// Creates an engine on the intro screen, configured once for the whole
    /// powered session.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            phase: Phase::Intro,
            high_score: 0,
            lane: Lane::new(config.lane_length),
            run_frame: false,
            edge: EdgeDetector::new(),
            jump: JumpController::new(JumpConfig::new(
                config.jump_duration_ticks,
                config.jump_message_ticks,
                config.max_jump_count,
            )),
            terrain: TerrainGenerator::new(TerrainConfig::new(
                config.obstacle_spawn_one_in,
                config.obstacle_extra_one_in,
                config.obstacle_cooldown_ticks,
                config.rng_seed,
            )),
            progression: Progression::new(ScoringConfig::new(
                config.initial_tick,
                config.floor_tick,
                config.tick_step,
                config.score_step_threshold,
            )),
            config,
        }
    }

    /// Begins a fresh run. Everything except the session high score returns
    /// to its boot value; the terrain random stream keeps advancing.
    fn start_run(&mut self, out_events: &mut Vec<Event>) {
        self.phase = Phase::Running;
        self.lane.clear();
        self.run_frame = false;
        self.jump.reset();
        self.terrain.reset();
        self.progression.reset();
        out_events.push(Event::GameStarted);
        out_events.push(Event::CueRequested { cue: Cue::Start });
    }

    /// One full gameplay step, in a fixed order:
    /// take-off, scroll, airborne countdown and landing, collision check,
    /// then score and difficulty.
    fn running_tick(&mut self, edge: bool, out_events: &mut Vec<Event>) {
        self.jump.begin_tick();
        if edge {
            self.jump.request_jump();
        }
        if let Some(jumps_used) = self.jump.take_off() {
            out_events.push(Event::JumpStarted { jumps_used });
            out_events.push(Event::CueRequested { cue: Cue::Jump });
        }

        self.lane.advance(self.terrain.scroll());
        self.run_frame = !self.run_frame;

        if let Some(landing) = self.jump.settle(self.lane.player_cell()) {
            out_events.push(Event::Landed {
                jumps_restored: landing.jumps_restored,
            });
        }

        if grounded_collision(&self.lane, self.jump.state(), PLAYER_COLUMN) {
            let score = self.progression.score();
            if score > self.high_score {
                self.high_score = score;
            }
            self.phase = Phase::GameOver;
            out_events.push(Event::GameEnded {
                score,
                high_score: self.high_score,
            });
            out_events.push(Event::CueRequested {
                cue: Cue::GameOver,
            });
            return;
        }

        let advance = self.progression.advance();
        out_events.push(Event::ScoreAdvanced {
            score: advance.score,
        });
        if let Some(tick_interval) = advance.speed_increase {
            out_events.push(Event::SpeedIncreased { tick_interval });
        }
    }
}

/// Applies the provided command to the engine, mutating state
/// deterministically and broadcasting the resulting events.
pub fn apply(engine: &mut Engine, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { button_pressed } => {
            // The edge detector runs in every phase so that a press during
            // the intro or game-over screens is picked up on this sample.
            let edge = engine.edge.sample(button_pressed);
            match engine.phase {
                Phase::Intro | Phase::GameOver => {
                    if edge {
                        engine.start_run(out_events);
                    }
                }
                Phase::Running => engine.running_tick(edge, out_events),
            }
        }
        Command::Reset => engine.start_run(out_events),
    }
}

/// Query functions that provide read-only access to the engine state.
pub mod query {
    use super::Engine;
    use platform_jumper_core::{Config, JumpState, Lane, Phase};
    use std::time::Duration;

    /// Current phase of the top-level state machine.
    #[must_use]
    pub fn phase(engine: &Engine) -> Phase {
        engine.phase
    }

    /// Score accumulated in the current or just-finished run.
    #[must_use]
    pub fn score(engine: &Engine) -> u16 {
        engine.progression.score()
    }

    /// Best score seen at any game-over transition this session.
    #[must_use]
    pub fn high_score(engine: &Engine) -> u16 {
        engine.high_score
    }

    /// Interval the adapter should wait before submitting the next tick.
    #[must_use]
    pub fn tick_interval(engine: &Engine) -> Duration {
        engine.progression.tick_interval()
    }

    /// Read-only view of the scrolling terrain lane.
    #[must_use]
    pub fn lane(engine: &Engine) -> &Lane {
        &engine.lane
    }

    /// Current grounded/airborne state of the player.
    #[must_use]
    pub fn jump_state(engine: &Engine) -> JumpState {
        engine.jump.state()
    }

    /// Jumps consumed since the last clean landing.
    #[must_use]
    pub fn jumps_used(engine: &Engine) -> u8 {
        engine.jump.jumps_used()
    }

    /// Whether the transient jump message should be drawn this tick.
    #[must_use]
    pub fn jump_message_visible(engine: &Engine) -> bool {
        engine.jump.message_visible()
    }

    /// Parity bit alternating the grounded run animation frame.
    #[must_use]
    pub fn run_frame(engine: &Engine) -> bool {
        engine.run_frame
    }

    /// Configuration the engine was built with.
    #[must_use]
    pub fn config(engine: &Engine) -> &Config {
        &engine.config
    }
}
