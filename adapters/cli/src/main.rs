#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal adapter that boots the Platform Jumper experience.
//!
//! The terminal stands in for the handheld's hardware: a bordered 16x2
//! region emulates the character display, the space bar is the single
//! button, and the terminal bell (or the optional synthesized square wave)
//! is the buzzer. One engine tick is driven per input-poll window, with the
//! window length taken from the engine's current tick interval.

mod audio;
mod terminal;

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result as AnyResult};
use clap::Parser;
use crossterm::{
    cursor, event, execute,
    event::{Event as TermEvent, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use platform_jumper_core::{Command, Config, Event, Phase, PLAYER_COLUMN};
use platform_jumper_engine::{apply, query, Engine};
use platform_jumper_presentation::{
    compose, game_over_screen, intro_screen, play_cue, present, upload_glyphs, CharacterDisplay,
    Pacer, Scene,
};

use crate::terminal::TerminalDisplay;

#[cfg(not(feature = "synth-audio"))]
use crate::audio::BellTone as ActiveTone;
#[cfg(feature = "synth-audio")]
use crate::audio::SynthTone as ActiveTone;

/// Endless-runner on a simulated 16x2 character display.
#[derive(Debug, Parser)]
#[command(name = "platform-jumper")]
struct Args {
    /// Terrain seed; defaults to a fixed boot seed.
    #[arg(long, conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw the terrain seed from system entropy instead.
    #[arg(long)]
    random_seed: bool,

    /// Starting tick interval in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Fastest tick interval the difficulty ramp may reach, in milliseconds.
    #[arg(long)]
    floor_tick_ms: Option<u64>,

    /// Number of cells in the scrolling lane.
    #[arg(long)]
    lane_length: Option<usize>,
}

/// Folds the command-line overrides into the default configuration.
fn resolve_config(args: &Args) -> AnyResult<Config> {
    let mut config = Config::default();
    if let Some(tick_ms) = args.tick_ms {
        config.initial_tick = Duration::from_millis(tick_ms);
    }
    if let Some(floor_ms) = args.floor_tick_ms {
        config.floor_tick = Duration::from_millis(floor_ms);
    }
    if let Some(lane_length) = args.lane_length {
        config.lane_length = lane_length;
    }
    config.rng_seed = if args.random_seed {
        ChaCha8Rng::from_entropy().gen()
    } else {
        args.seed.unwrap_or(Config::DEFAULT_SEED)
    };

    ensure!(
        config.floor_tick <= config.initial_tick,
        "floor tick interval exceeds the starting interval"
    );
    ensure!(
        config.lane_length > PLAYER_COLUMN + 1,
        "lane too short to place the player column"
    );
    Ok(config)
}

/// Wall-clock pacer used for cue gaps and flash screens.
struct StdPacer;

impl Pacer for StdPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Button level and control flags gathered over one poll window.
#[derive(Debug, Default)]
struct ButtonSample {
    pressed: bool,
    quit: bool,
}

/// Collects key events until the tick deadline, folding them into one
/// button level. A press arriving mid-window is observed on this sample,
/// never earlier.
fn poll_button(interval: Duration) -> AnyResult<ButtonSample> {
    let deadline = Instant::now() + interval;
    let mut sample = ButtonSample::default();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            break;
        }
        if let TermEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => sample.pressed = true,
                    KeyCode::Char('q') | KeyCode::Esc => sample.quit = true,
                    _ => {}
                }
            }
        }
        if Instant::now() >= deadline {
            break;
        }
    }
    Ok(sample)
}

/// Captures the read-only engine state a frame is composed from.
fn scene_from(engine: &Engine) -> Scene {
    Scene {
        lane: query::lane(engine).cells().collect(),
        jump_state: query::jump_state(engine),
        run_frame: query::run_frame(engine),
        score: query::score(engine),
        jump_message_visible: query::jump_message_visible(engine),
    }
}

fn run(config: Config) -> AnyResult<()> {
    let mut display = TerminalDisplay::new(stdout(), config.lane_length)?;
    let mut tone = ActiveTone::new()?;
    let mut pacer = StdPacer;

    upload_glyphs(&mut display)?;
    intro_screen(&mut display, &mut pacer)?;
    display.flush()?;

    let mut engine = Engine::new(config);
    let mut events = Vec::new();
    loop {
        let sample = poll_button(query::tick_interval(&engine))?;
        if sample.quit {
            return Ok(());
        }

        events.clear();
        apply(
            &mut engine,
            Command::Tick {
                button_pressed: sample.pressed,
            },
            &mut events,
        );

        for event in &events {
            match event {
                Event::GameStarted => display.clear()?,
                Event::GameEnded { score, high_score } => {
                    game_over_screen(&mut display, &mut pacer, *score, *high_score)?;
                }
                Event::CueRequested { cue } => play_cue(&mut tone, &mut pacer, *cue)?,
                _ => {}
            }
        }

        if query::phase(&engine) == Phase::Running {
            present(&mut display, &compose(&scene_from(&engine)))?;
        }
        display.flush()?;
    }
}

/// Entry point for the Platform Jumper terminal adapter.
fn main() -> AnyResult<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let result = run(config);

    let mut out = stdout();
    let _ = execute!(out, LeaveAlternateScreen, cursor::Show);
    let _ = disable_raw_mode();
    result
}
