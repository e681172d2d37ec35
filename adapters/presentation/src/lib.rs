#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Platform Jumper adapters.
//!
//! The engine describes what happened; this crate turns read-only engine
//! state into a 16x2 character frame and defines the capability traits that
//! concrete display and buzzer backends implement. Recording doubles live
//! here too so every crate's tests can observe presentation output without
//! real hardware.

use std::time::Duration;

use anyhow::Result as AnyResult;
use platform_jumper_core::{
    Cell, Cue, JumpState, BEST_LABEL, GAME_OVER_MESSAGE, INTRO_BANNER, INTRO_PROMPT, JUMP_MESSAGE,
    PLAYER_COLUMN, SCORE_LABEL,
};

/// Column where the transient jump message window begins on the top row.
pub const MESSAGE_COLUMN: usize = 8;

/// Column where the flashing game-over headline is written.
pub const GAME_OVER_COLUMN: usize = 2;

/// Square-wave pulses composing one buzzer burst.
pub const BURST_PULSES: u16 = 100;

/// Interval between banner and game-over flash phases.
pub const FLASH_INTERVAL: Duration = Duration::from_millis(300);

/// Number of flash phases in the intro instruction line.
pub const INTRO_FLASHES: u32 = 6;

/// Number of flash phases in the game-over headline.
pub const GAME_OVER_FLASHES: u32 = 4;

/// Identifier of a custom sprite glyph uploaded to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphId {
    /// First frame of the grounded run animation.
    RunA,
    /// Second frame of the grounded run animation.
    RunB,
    /// Airborne pose drawn on the top row.
    Jump,
    /// Solid obstacle cell.
    Block,
}

impl GlyphId {
    /// All glyphs the game uploads, in character-code order.
    pub const ALL: [Self; 4] = [Self::RunA, Self::RunB, Self::Jump, Self::Block];

    /// Character code the glyph occupies in display memory.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::RunA => 0,
            Self::RunB => 1,
            Self::Jump => 2,
            Self::Block => 3,
        }
    }

    /// The glyph's eight 5-bit pixel rows, top to bottom.
    #[must_use]
    pub const fn bitmap(&self) -> [u8; 8] {
        match self {
            Self::RunA => [
                0b00000, 0b01110, 0b01101, 0b00110, 0b11110, 0b01110, 0b10010, 0b00000,
            ],
            Self::RunB => [
                0b00000, 0b01110, 0b01101, 0b00110, 0b11110, 0b01110, 0b01100, 0b00000,
            ],
            Self::Jump => [
                0b00000, 0b01110, 0b01101, 0b11110, 0b00010, 0b01110, 0b00000, 0b00000,
            ],
            Self::Block => [
                0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111,
            ],
        }
    }
}

/// Character-matrix display capability consumed by the presenter.
///
/// Implementations wrap real hardware or a terminal emulation; the core
/// assumes every call completes synchronously.
pub trait CharacterDisplay {
    /// Blanks the whole display and homes the cursor.
    fn clear(&mut self) -> AnyResult<()>;
    /// Moves the write cursor to the provided column and row.
    fn set_cursor(&mut self, column: usize, row: usize) -> AnyResult<()>;
    /// Writes one text character at the cursor, advancing it.
    fn write_char(&mut self, character: char) -> AnyResult<()>;
    /// Writes a string starting at the cursor, advancing it.
    fn write_str(&mut self, text: &str) -> AnyResult<()>;
    /// Writes one custom glyph at the cursor, advancing it.
    fn write_glyph(&mut self, glyph: GlyphId) -> AnyResult<()>;
    /// Uploads the pixel rows for a custom glyph slot.
    fn define_glyph(&mut self, glyph: GlyphId, rows: [u8; 8]) -> AnyResult<()>;
}

/// Single-tone buzzer capability.
pub trait ToneSink {
    /// Emits one blocking tone burst of the given pulse count.
    fn beep(&mut self, pulses: u16) -> AnyResult<()>;
}

/// Blocking wait capability, injected so paced sequences are testable.
pub trait Pacer {
    /// Suspends the caller for the provided duration.
    fn pause(&mut self, duration: Duration);
}

/// Uploads all four sprite glyphs into display memory.
pub fn upload_glyphs(display: &mut dyn CharacterDisplay) -> AnyResult<()> {
    for glyph in GlyphId::ALL {
        display.define_glyph(glyph, glyph.bitmap())?;
    }
    Ok(())
}

/// Plays a named cue by composing buzzer bursts with paced gaps.
pub fn play_cue(tone: &mut dyn ToneSink, pacer: &mut dyn Pacer, cue: Cue) -> AnyResult<()> {
    for burst in 0..cue.bursts() {
        if burst > 0 {
            pacer.pause(cue.gap());
        }
        tone.beep(BURST_PULSES)?;
    }
    Ok(())
}

/// Read-only gameplay snapshot a frame is composed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Lane cells from the leftmost column to the tail.
    pub lane: Vec<Cell>,
    /// Grounded/airborne state of the player.
    pub jump_state: JumpState,
    /// Parity bit alternating the grounded run animation frame.
    pub run_frame: bool,
    /// Score to right-align on the top row.
    pub score: u16,
    /// Whether the transient jump message is visible this tick.
    pub jump_message_visible: bool,
}

/// One display slot of a composed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A blank cell.
    Blank,
    /// A custom sprite glyph.
    Glyph(GlyphId),
    /// A plain text character.
    Text(char),
}

/// Fully laid-out frame for one tick, ready to present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Slots of the top display row.
    pub top: Vec<Slot>,
    /// Slots of the bottom display row.
    pub bottom: Vec<Slot>,
}

/// Lays out a frame from the scene. Draw order matters:
/// the sprite row first, then the right-aligned score, then the message
/// window, which overwrites any score digits it overlaps.
#[must_use]
pub fn compose(scene: &Scene) -> Frame {
    let width = scene.lane.len();
    let mut top = vec![Slot::Blank; width];
    let mut bottom = vec![Slot::Blank; width];

    let airborne = scene.jump_state.is_airborne();
    if airborne && PLAYER_COLUMN < width {
        top[PLAYER_COLUMN] = Slot::Glyph(GlyphId::Jump);
    }

    let digits = scene.score.to_string();
    let start = width.saturating_sub(digits.len());
    for (offset, digit) in digits.chars().enumerate() {
        if start + offset < width {
            top[start + offset] = Slot::Text(digit);
        }
    }

    for offset in 0..JUMP_MESSAGE.len() {
        let column = MESSAGE_COLUMN + offset;
        if column >= width {
            break;
        }
        top[column] = if scene.jump_message_visible {
            JUMP_MESSAGE
                .chars()
                .nth(offset)
                .map_or(Slot::Blank, Slot::Text)
        } else {
            Slot::Blank
        };
    }

    for (column, slot) in bottom.iter_mut().enumerate() {
        if !airborne && column == PLAYER_COLUMN {
            *slot = Slot::Glyph(if scene.run_frame {
                GlyphId::RunA
            } else {
                GlyphId::RunB
            });
        } else if scene.lane[column] == Cell::Block {
            *slot = Slot::Glyph(GlyphId::Block);
        }
    }

    Frame { top, bottom }
}

/// Writes a composed frame onto the display, one row at a time.
pub fn present(display: &mut dyn CharacterDisplay, frame: &Frame) -> AnyResult<()> {
    display.set_cursor(0, 0)?;
    for slot in &frame.top {
        write_slot(display, *slot)?;
    }
    display.set_cursor(0, 1)?;
    for slot in &frame.bottom {
        write_slot(display, *slot)?;
    }
    Ok(())
}

fn write_slot(display: &mut dyn CharacterDisplay, slot: Slot) -> AnyResult<()> {
    match slot {
        Slot::Blank => display.write_char(' '),
        Slot::Glyph(glyph) => display.write_glyph(glyph),
        Slot::Text(character) => display.write_char(character),
    }
}

/// Draws the power-on banner and flashes the instruction line.
pub fn intro_screen(
    display: &mut dyn CharacterDisplay,
    pacer: &mut dyn Pacer,
) -> AnyResult<()> {
    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(INTRO_BANNER)?;
    for flash in 0..INTRO_FLASHES {
        display.set_cursor(0, 1)?;
        if flash % 2 == 0 {
            display.write_str(INTRO_PROMPT)?;
        } else {
            display.write_str(&" ".repeat(INTRO_PROMPT.len() + 1))?;
        }
        pacer.pause(FLASH_INTERVAL);
    }
    Ok(())
}

/// Flashes the game-over headline, then shows the score/best summary.
pub fn game_over_screen(
    display: &mut dyn CharacterDisplay,
    pacer: &mut dyn Pacer,
    score: u16,
    high_score: u16,
) -> AnyResult<()> {
    display.clear()?;
    for flash in 0..GAME_OVER_FLASHES {
        display.set_cursor(GAME_OVER_COLUMN, 0)?;
        if flash % 2 == 0 {
            display.write_str(GAME_OVER_MESSAGE)?;
        } else {
            display.write_str(&" ".repeat(GAME_OVER_MESSAGE.len() + 1))?;
        }
        pacer.pause(FLASH_INTERVAL);
    }

    display.clear()?;
    display.set_cursor(0, 0)?;
    display.write_str(&format!("{SCORE_LABEL}{score}"))?;
    display.set_cursor(0, 1)?;
    display.write_str(&format!("{BEST_LABEL}{high_score}"))?;
    Ok(())
}

/// Recording doubles that capture presentation output for tests.
pub mod recording {
    use std::time::Duration;

    use anyhow::Result as AnyResult;

    use super::{CharacterDisplay, GlyphId, Pacer, ToneSink};

    /// Every operation a [`RecordingDisplay`] may observe.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum DisplayOp {
        /// The display was cleared.
        Clear,
        /// The cursor was moved to a column and row.
        SetCursor(usize, usize),
        /// A text character was written.
        WriteChar(char),
        /// A string was written.
        WriteStr(String),
        /// A custom glyph was written.
        WriteGlyph(GlyphId),
        /// A glyph slot received new pixel rows.
        DefineGlyph(GlyphId, [u8; 8]),
    }

    /// Display double that records every operation in order.
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        /// Operations observed so far, oldest first.
        pub ops: Vec<DisplayOp>,
    }

    impl CharacterDisplay for RecordingDisplay {
        fn clear(&mut self) -> AnyResult<()> {
            self.ops.push(DisplayOp::Clear);
            Ok(())
        }

        fn set_cursor(&mut self, column: usize, row: usize) -> AnyResult<()> {
            self.ops.push(DisplayOp::SetCursor(column, row));
            Ok(())
        }

        fn write_char(&mut self, character: char) -> AnyResult<()> {
            self.ops.push(DisplayOp::WriteChar(character));
            Ok(())
        }

        fn write_str(&mut self, text: &str) -> AnyResult<()> {
            self.ops.push(DisplayOp::WriteStr(text.to_owned()));
            Ok(())
        }

        fn write_glyph(&mut self, glyph: GlyphId) -> AnyResult<()> {
            self.ops.push(DisplayOp::WriteGlyph(glyph));
            Ok(())
        }

        fn define_glyph(&mut self, glyph: GlyphId, rows: [u8; 8]) -> AnyResult<()> {
            self.ops.push(DisplayOp::DefineGlyph(glyph, rows));
            Ok(())
        }
    }

    /// Tone double that records the pulse count of every burst.
    #[derive(Debug, Default)]
    pub struct RecordingTone {
        /// Burst pulse counts observed so far.
        pub bursts: Vec<u16>,
    }

    impl ToneSink for RecordingTone {
        fn beep(&mut self, pulses: u16) -> AnyResult<()> {
            self.bursts.push(pulses);
            Ok(())
        }
    }

    /// Pacer double that records requested pauses without sleeping.
    #[derive(Debug, Default)]
    pub struct InstantPacer {
        /// Pauses requested so far.
        pub pauses: Vec<Duration>,
    }

    impl Pacer for InstantPacer {
        fn pause(&mut self, duration: Duration) {
            self.pauses.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{DisplayOp, InstantPacer, RecordingDisplay, RecordingTone};
    use super::{
        compose, game_over_screen, play_cue, present, upload_glyphs, GlyphId, Scene, Slot,
        BURST_PULSES, FLASH_INTERVAL, MESSAGE_COLUMN,
    };
    use platform_jumper_core::{Cell, Cue, JumpState, PLAYER_COLUMN};
    use std::time::Duration;

    fn scene() -> Scene {
        Scene {
            lane: vec![Cell::Empty; 16],
            jump_state: JumpState::Grounded,
            run_frame: false,
            score: 0,
            jump_message_visible: false,
        }
    }

    #[test]
    fn grounded_player_renders_on_the_bottom_row() {
        let frame = compose(&scene());
        assert_eq!(frame.top[PLAYER_COLUMN], Slot::Blank);
        assert_eq!(frame.bottom[PLAYER_COLUMN], Slot::Glyph(GlyphId::RunB));
    }

    #[test]
    fn run_frames_alternate_with_the_parity_bit() {
        let mut scene = scene();
        scene.run_frame = true;
        assert_eq!(
            compose(&scene).bottom[PLAYER_COLUMN],
            Slot::Glyph(GlyphId::RunA)
        );
    }

    #[test]
    fn airborne_player_renders_on_the_top_row() {
        let mut scene = scene();
        scene.jump_state = JumpState::Airborne { ticks_remaining: 2 };
        let frame = compose(&scene);
        assert_eq!(frame.top[PLAYER_COLUMN], Slot::Glyph(GlyphId::Jump));
        assert_eq!(frame.bottom[PLAYER_COLUMN], Slot::Blank);
    }

    #[test]
    fn run_sprite_overlays_a_block_in_the_player_column() {
        let mut scene = scene();
        scene.lane[PLAYER_COLUMN] = Cell::Block;
        assert_eq!(
            compose(&scene).bottom[PLAYER_COLUMN],
            Slot::Glyph(GlyphId::RunB)
        );
    }

    #[test]
    fn blocks_render_as_the_block_glyph() {
        let mut scene = scene();
        scene.lane[7] = Cell::Block;
        assert_eq!(compose(&scene).bottom[7], Slot::Glyph(GlyphId::Block));
    }

    #[test]
    fn score_is_right_aligned() {
        let mut scene = scene();
        scene.score = 345;
        let frame = compose(&scene);
        assert_eq!(frame.top[13], Slot::Text('3'));
        assert_eq!(frame.top[14], Slot::Text('4'));
        assert_eq!(frame.top[15], Slot::Text('5'));
        assert_eq!(frame.top[12], Slot::Blank);
    }

    #[test]
    fn message_window_overwrites_overlapping_score_digits() {
        let mut scene = scene();
        scene.score = 54321;
        scene.jump_message_visible = true;
        let frame = compose(&scene);
        // Digits occupy columns 11..16; the message window claims 8..13.
        assert_eq!(frame.top[MESSAGE_COLUMN], Slot::Text('J'));
        assert_eq!(frame.top[12], Slot::Text('!'));
        assert_eq!(frame.top[13], Slot::Text('3'));
    }

    #[test]
    fn hidden_message_blanks_its_window() {
        let mut scene = scene();
        scene.score = 54321;
        let frame = compose(&scene);
        assert_eq!(frame.top[11], Slot::Blank);
        assert_eq!(frame.top[12], Slot::Blank);
        assert_eq!(frame.top[13], Slot::Text('3'));
    }

    #[test]
    fn present_writes_both_rows_in_order() {
        let mut display = RecordingDisplay::default();
        let frame = compose(&scene());
        present(&mut display, &frame).expect("present");
        assert_eq!(display.ops[0], DisplayOp::SetCursor(0, 0));
        assert_eq!(display.ops.len(), 2 + 32);
        assert_eq!(display.ops[17], DisplayOp::SetCursor(0, 1));
    }

    #[test]
    fn upload_defines_all_four_glyphs() {
        let mut display = RecordingDisplay::default();
        upload_glyphs(&mut display).expect("upload");
        assert_eq!(display.ops.len(), 4);
        assert_eq!(
            display.ops[3],
            DisplayOp::DefineGlyph(GlyphId::Block, [0b11111; 8])
        );
    }

    #[test]
    fn cues_compose_bursts_with_gaps() {
        let mut tone = RecordingTone::default();
        let mut pacer = InstantPacer::default();
        play_cue(&mut tone, &mut pacer, Cue::GameOver).expect("cue");
        assert_eq!(tone.bursts, vec![BURST_PULSES; 3]);
        assert_eq!(pacer.pauses, vec![Duration::from_millis(150); 2]);

        let mut tone = RecordingTone::default();
        let mut pacer = InstantPacer::default();
        play_cue(&mut tone, &mut pacer, Cue::Jump).expect("cue");
        assert_eq!(tone.bursts, vec![BURST_PULSES]);
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn game_over_screen_flashes_then_summarizes() {
        let mut display = RecordingDisplay::default();
        let mut pacer = InstantPacer::default();
        game_over_screen(&mut display, &mut pacer, 120, 250).expect("screen");
        assert_eq!(pacer.pauses, vec![FLASH_INTERVAL; 4]);
        assert!(display
            .ops
            .contains(&DisplayOp::WriteStr("Score: 120".to_owned())));
        assert!(display
            .ops
            .contains(&DisplayOp::WriteStr("Best : 250".to_owned())));
    }
}
