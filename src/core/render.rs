//! Terminal renderer for the decorated tree.
//!
//! Layout for height `h`:
//! - apex star padded by `h - 1`
//! - rows `i in 0..h`, width `2i + 1`, padded by `h - i - 1`
//! - trunk of `h / 3` rows, `h / 2` columns, padded by `h - (h / 2) / 2 - 1`
//! - base of `2h - 1` tildes

use std::io::Write;

use anyhow::Result;
use colored::{Color, Colorize};

use crate::core::batch::build_row;
use crate::core::decoder::RowDecorations;
use crate::core::simulator::QuantumSimulator;

pub const HEADER: &str = "🎄 Quantum Christmas Tree! 🎄";
pub const FOOTER: &str = "🎁 Happy Quantum Holidays! 🎁";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

impl Glyph {
    pub const fn new(ch: char, color: Color) -> Self { Self { ch, color } }
}

/// Everything the renderer draws with, indexed explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Indexed by decoration type code 0..=3.
    pub decorations: [Glyph; 4],
    pub foliage: Glyph,
    pub apex: Glyph,
    pub trunk: Glyph,
    pub base: Glyph,
}

impl Palette {
    pub fn festive() -> Self {
        Self {
            decorations: [
                Glyph::new('●', Color::Red),
                Glyph::new('★', Color::Yellow),
                Glyph::new('♦', Color::Blue),
                Glyph::new('✶', Color::Magenta),
            ],
            foliage: Glyph::new('*', Color::Green),
            apex: Glyph::new('★', Color::Yellow),
            trunk: Glyph::new('#', Color::Magenta),
            base: Glyph::new('~', Color::Green),
        }
    }

    pub fn decoration(&self, kind: u8) -> Glyph {
        self.decorations[usize::from(kind & 0b11)]
    }
}

impl Default for Palette {
    fn default() -> Self { Self::festive() }
}

pub struct Renderer {
    height: usize,
    palette: Palette,
    color: bool,
}

impl Renderer {
    pub fn new(height: usize, palette: Palette) -> Self {
        Self { height, palette, color: true }
    }

    /// Emit plain glyphs with no ANSI sequences.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, glyph: Glyph, count: usize) -> String {
        let cell = glyph.ch.to_string();
        if !self.color {
            return cell.repeat(count);
        }
        // colour each cell separately, like the row cells
        let painted = cell.color(glyph.color).to_string();
        painted.repeat(count)
    }

    fn banner(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    /// One tree row as a string (padding plus `decorations.len()` cells).
    pub fn row_line(&self, padding: usize, decorations: &RowDecorations) -> String {
        let mut line = " ".repeat(padding);
        for col in 0..decorations.len() {
            let glyph = match decorations.decoration_at(col) {
                Some(kind) => self.palette.decoration(kind),
                None => self.palette.foliage,
            };
            line.push_str(&self.paint(glyph, 1));
        }
        line
    }

    /// Draw the whole tree, sampling each row from `simulator`.
    pub fn draw<W, S>(&self, out: &mut W, simulator: &mut S) -> Result<()>
    where
        W: Write + ?Sized,
        S: QuantumSimulator + ?Sized,
    {
        let h = self.height;
        writeln!(out, "\n{}\n", self.banner(HEADER))?;
        writeln!(out, "{}{}", " ".repeat(h.saturating_sub(1)), self.paint(self.palette.apex, 1))?;

        for i in 0..h {
            let width = 2 * i + 1;
            let decorations = build_row(width, simulator)?;
            writeln!(out, "{}", self.row_line(h - i - 1, &decorations))?;
        }

        let trunk_height = h / 3;
        let trunk_width = h / 2;
        let trunk_padding = h.saturating_sub(trunk_width / 2 + 1);
        for _ in 0..trunk_height {
            writeln!(out, "{}{}", " ".repeat(trunk_padding), self.paint(self.palette.trunk, trunk_width))?;
        }

        let base_width = (h * 2).saturating_sub(1);
        writeln!(out, "{}", self.paint(self.palette.base, base_width))?;
        writeln!(out, "\n{}\n", self.banner(FOOTER))?;
        out.flush()?;
        Ok(())
    }
}
