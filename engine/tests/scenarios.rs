use std::time::Duration;

use platform_jumper_core::{Cell, Command, Config, Cue, Event, JumpState, Phase};
use platform_jumper_engine::{apply, query, Engine};

/// Configuration whose generator never spawns an obstacle.
fn quiet_config() -> Config {
    Config {
        obstacle_spawn_one_in: 0,
        ..Config::default()
    }
}

/// Configuration whose generator spawns a two-cell run at every opportunity.
fn forced_config() -> Config {
    Config {
        obstacle_spawn_one_in: 1,
        obstacle_extra_one_in: 1,
        ..Config::default()
    }
}

fn tick(engine: &mut Engine, pressed: bool) -> Vec<Event> {
    let mut events = Vec::new();
    apply(
        engine,
        Command::Tick {
            button_pressed: pressed,
        },
        &mut events,
    );
    events
}

/// Boots the engine and presses through the intro screen.
fn started_engine(config: Config) -> Engine {
    let mut engine = Engine::new(config);
    let _ = tick(&mut engine, false);
    let events = tick(&mut engine, true);
    assert!(events.contains(&Event::GameStarted));
    assert!(events.contains(&Event::CueRequested { cue: Cue::Start }));
    engine
}

#[test]
fn scenario_a_quiet_generator_leaves_the_lane_empty() {
    let mut engine = started_engine(quiet_config());
    for _ in 0..4 {
        let _ = tick(&mut engine, false);
    }
    assert!(!query::lane(&engine).has_obstacles());
    assert_eq!(query::score(&engine), 4);
    assert_eq!(query::phase(&engine), Phase::Running);
}

#[test]
fn scenario_b_jump_lifecycle() {
    let mut engine = started_engine(quiet_config());
    let _ = tick(&mut engine, false);

    let events = tick(&mut engine, true);
    assert!(events.contains(&Event::JumpStarted { jumps_used: 1 }));
    assert!(events.contains(&Event::CueRequested { cue: Cue::Jump }));
    // The take-off tick already spends one countdown step.
    assert_eq!(
        query::jump_state(&engine),
        JumpState::Airborne { ticks_remaining: 2 }
    );

    let _ = tick(&mut engine, false);
    assert_eq!(
        query::jump_state(&engine),
        JumpState::Airborne { ticks_remaining: 1 }
    );
    let _ = tick(&mut engine, false);
    assert_eq!(
        query::jump_state(&engine),
        JumpState::Airborne { ticks_remaining: 0 }
    );

    let events = tick(&mut engine, false);
    assert!(events.contains(&Event::Landed {
        jumps_restored: true
    }));
    assert_eq!(query::jump_state(&engine), JumpState::Grounded);
    assert_eq!(query::jumps_used(&engine), 0);
}

#[test]
fn scenario_c_spawned_run_is_contiguous_with_cooldown_behind_it() {
    let mut engine = started_engine(forced_config());
    for _ in 0..7 {
        let _ = tick(&mut engine, false);
    }

    let lane = query::lane(&engine);
    // The first run entered on ticks 1 and 2 and has scrolled to columns
    // 9 and 10; the cooldown empties trail it and the earliest re-spawn
    // landed at the tail this tick.
    assert_eq!(lane.cell(9), Cell::Block);
    assert_eq!(lane.cell(10), Cell::Block);
    for column in 11..15 {
        assert_eq!(lane.cell(column), Cell::Empty, "column {column}");
    }
    assert_eq!(lane.cell(15), Cell::Block);
}

#[test]
fn scenario_d_grounded_collision_ends_and_freezes_the_game() {
    let mut engine = started_engine(forced_config());

    // The block spawned on tick 1 reaches the player column on tick 15.
    for _ in 0..14 {
        let _ = tick(&mut engine, false);
        assert_eq!(query::phase(&engine), Phase::Running);
    }
    let events = tick(&mut engine, false);
    assert!(events.contains(&Event::GameEnded {
        score: 14,
        high_score: 14
    }));
    assert!(events.contains(&Event::CueRequested {
        cue: Cue::GameOver
    }));
    assert_eq!(query::phase(&engine), Phase::GameOver);
    assert_eq!(query::high_score(&engine), 14);

    // Frozen until a press: no events, no score drift, no lane movement.
    let lane_before: Vec<Cell> = query::lane(&engine).cells().collect();
    for _ in 0..5 {
        assert!(tick(&mut engine, false).is_empty());
    }
    assert_eq!(query::score(&engine), 14);
    let lane_after: Vec<Cell> = query::lane(&engine).cells().collect();
    assert_eq!(lane_before, lane_after);
}

#[test]
fn scenario_e_reset_preserves_only_the_high_score() {
    let mut engine = started_engine(forced_config());
    for _ in 0..15 {
        let _ = tick(&mut engine, false);
    }
    assert_eq!(query::phase(&engine), Phase::GameOver);

    let events = tick(&mut engine, true);
    assert!(events.contains(&Event::GameStarted));
    assert!(events.contains(&Event::CueRequested { cue: Cue::Start }));
    assert_eq!(query::phase(&engine), Phase::Running);
    assert_eq!(query::score(&engine), 0);
    assert_eq!(query::tick_interval(&engine), Duration::from_millis(80));
    assert!(!query::lane(&engine).has_obstacles());
    assert_eq!(query::jump_state(&engine), JumpState::Grounded);
    assert_eq!(query::jumps_used(&engine), 0);
    assert_eq!(query::high_score(&engine), 14);
}

#[test]
fn landing_on_a_block_ends_the_run_in_the_landing_tick() {
    let mut engine = started_engine(forced_config());

    // Jump on tick 13: airborne over the first block cell on tick 15, then
    // touch down on the second block cell on tick 16.
    for _ in 0..12 {
        let _ = tick(&mut engine, false);
    }
    let events = tick(&mut engine, true);
    assert!(events.contains(&Event::JumpStarted { jumps_used: 1 }));

    let _ = tick(&mut engine, false);
    // Tick 15: airborne over the block, so the run survives it.
    let _ = tick(&mut engine, false);
    assert_eq!(query::phase(&engine), Phase::Running);

    let events = tick(&mut engine, false);
    assert!(events.contains(&Event::Landed {
        jumps_restored: false
    }));
    assert!(events.contains(&Event::GameEnded {
        score: 15,
        high_score: 15
    }));
    assert_eq!(query::phase(&engine), Phase::GameOver);
}

#[test]
fn high_score_tracks_the_best_run() {
    let mut engine = started_engine(forced_config());
    for _ in 0..15 {
        let _ = tick(&mut engine, false);
    }
    assert_eq!(query::high_score(&engine), 14);

    // Second run: clear the first block cell by jumping, then die one tick
    // later on the second, beating the previous run by one.
    let _ = tick(&mut engine, false);
    let _ = tick(&mut engine, true);
    for _ in 0..12 {
        let _ = tick(&mut engine, false);
    }
    let _ = tick(&mut engine, true);
    let _ = tick(&mut engine, false);
    let _ = tick(&mut engine, false);
    let events = tick(&mut engine, false);
    assert!(events.contains(&Event::GameEnded {
        score: 15,
        high_score: 15
    }));
    assert_eq!(query::high_score(&engine), 15);
}

#[test]
fn lane_length_holds_across_the_whole_session() {
    let mut engine = started_engine(forced_config());
    for tick_index in 0..200 {
        let _ = tick(&mut engine, tick_index % 7 == 0);
        assert_eq!(query::lane(&engine).len(), 16);
    }
}

#[test]
fn jump_allowance_stays_bounded_under_button_mashing() {
    let mut engine = started_engine(quiet_config());
    for tick_index in 0..300 {
        // Alternate the level so every other tick is a fresh edge.
        let _ = tick(&mut engine, tick_index % 2 == 0);
        assert!(query::jumps_used(&engine) <= 2);
    }
}

#[test]
fn score_advances_by_exactly_one_per_running_tick() {
    let mut engine = started_engine(quiet_config());
    for expected in 1..=120_u16 {
        let events = tick(&mut engine, false);
        assert!(events.contains(&Event::ScoreAdvanced { score: expected }));
    }
}

#[test]
fn difficulty_steps_at_each_threshold_multiple() {
    let mut engine = started_engine(quiet_config());
    let mut increases = Vec::new();
    for _ in 0..200 {
        for event in tick(&mut engine, false) {
            if let Event::SpeedIncreased { tick_interval } = event {
                increases.push((query::score(&engine), tick_interval));
            }
        }
    }
    assert_eq!(
        increases,
        vec![
            (50, Duration::from_millis(75)),
            (100, Duration::from_millis(70)),
            (150, Duration::from_millis(65)),
            (200, Duration::from_millis(60)),
        ]
    );
}

#[test]
fn tick_interval_never_undercuts_the_floor() {
    let mut engine = started_engine(quiet_config());
    for _ in 0..2_000 {
        let _ = tick(&mut engine, false);
        assert!(query::tick_interval(&engine) >= Duration::from_millis(50));
        assert!(query::tick_interval(&engine) <= Duration::from_millis(80));
    }
    assert_eq!(query::tick_interval(&engine), Duration::from_millis(50));
}

#[test]
fn explicit_reset_restarts_from_any_phase() {
    let mut engine = started_engine(quiet_config());
    for _ in 0..25 {
        let _ = tick(&mut engine, false);
    }
    let mut events = Vec::new();
    apply(&mut engine, Command::Reset, &mut events);
    assert!(events.contains(&Event::GameStarted));
    assert_eq!(query::score(&engine), 0);
    assert_eq!(query::phase(&engine), Phase::Running);
}
