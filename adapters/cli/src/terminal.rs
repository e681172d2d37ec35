//! Crossterm-backed emulation of the 16x2 character display.
//!
//! The display region is drawn inside a thin box at a fixed position on the
//! alternate screen. Custom glyphs have no pixel memory in a terminal, so
//! each glyph id is substituted with a fixed unicode character instead.

use std::io::{Stdout, Write};

use anyhow::Result as AnyResult;
use crossterm::{cursor, queue, style::Print};
use platform_jumper_presentation::{CharacterDisplay, GlyphId};

/// Terminal column of the display region's left edge.
const ORIGIN_COLUMN: u16 = 2;
/// Terminal row of the display region's top edge.
const ORIGIN_ROW: u16 = 1;
/// Character rows the display exposes.
const DISPLAY_ROWS: u16 = 2;

pub(crate) struct TerminalDisplay {
    out: Stdout,
    width: u16,
}

impl TerminalDisplay {
    /// Wraps stdout and draws the border box around the display region.
    pub(crate) fn new(out: Stdout, width: usize) -> AnyResult<Self> {
        let mut display = Self {
            out,
            width: width as u16,
        };
        display.draw_border()?;
        display.clear()?;
        display.flush()?;
        Ok(display)
    }

    /// Pushes all queued terminal writes out to the screen.
    pub(crate) fn flush(&mut self) -> AnyResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn draw_border(&mut self) -> AnyResult<()> {
        let horizontal = "─".repeat(self.width as usize);
        queue!(
            self.out,
            cursor::MoveTo(ORIGIN_COLUMN - 1, ORIGIN_ROW - 1),
            Print(format!("┌{horizontal}┐")),
        )?;
        for row in 0..DISPLAY_ROWS {
            queue!(
                self.out,
                cursor::MoveTo(ORIGIN_COLUMN - 1, ORIGIN_ROW + row),
                Print("│"),
                cursor::MoveTo(ORIGIN_COLUMN + self.width, ORIGIN_ROW + row),
                Print("│"),
            )?;
        }
        queue!(
            self.out,
            cursor::MoveTo(ORIGIN_COLUMN - 1, ORIGIN_ROW + DISPLAY_ROWS),
            Print(format!("└{horizontal}┘")),
        )?;
        Ok(())
    }
}

/// Terminal substitute for each custom sprite glyph.
pub(crate) fn glyph_char(glyph: GlyphId) -> char {
    match glyph {
        GlyphId::RunA => '&',
        GlyphId::RunB => '@',
        GlyphId::Jump => '^',
        GlyphId::Block => '#',
    }
}

impl CharacterDisplay for TerminalDisplay {
    fn clear(&mut self) -> AnyResult<()> {
        let blank = " ".repeat(self.width as usize);
        for row in 0..DISPLAY_ROWS {
            queue!(
                self.out,
                cursor::MoveTo(ORIGIN_COLUMN, ORIGIN_ROW + row),
                Print(&blank),
            )?;
        }
        queue!(self.out, cursor::MoveTo(ORIGIN_COLUMN, ORIGIN_ROW))?;
        Ok(())
    }

    fn set_cursor(&mut self, column: usize, row: usize) -> AnyResult<()> {
        queue!(
            self.out,
            cursor::MoveTo(ORIGIN_COLUMN + column as u16, ORIGIN_ROW + row as u16),
        )?;
        Ok(())
    }

    fn write_char(&mut self, character: char) -> AnyResult<()> {
        queue!(self.out, Print(character))?;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> AnyResult<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn write_glyph(&mut self, glyph: GlyphId) -> AnyResult<()> {
        queue!(self.out, Print(glyph_char(glyph)))?;
        Ok(())
    }

    fn define_glyph(&mut self, _glyph: GlyphId, _rows: [u8; 8]) -> AnyResult<()> {
        // No glyph memory to upload into; the substitution table above
        // stands in for the pixel rows.
        Ok(())
    }
}
