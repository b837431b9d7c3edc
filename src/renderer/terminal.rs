//! Terminal card sink.
//!
//! Draws each placed item as a bordered card using crossterm. Positions are
//! snapped to whole cells here; the layout itself never rounds.
//!
//! ```text
//! ┌ title ─┐
//! │        │
//! └────────┘
//! ```

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use taffy::Point;
use tracing::warn;

use super::sink::PlacementSink;
use crate::pipeline::terminal_height;

// =============================================================================
// Card
// =============================================================================

/// A titled box measured in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub width: u16,
    pub height: u16,
}

impl Card {
    pub fn new(title: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    /// Text rows making up the card, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let w = self.width as usize;
        let h = self.height as usize;
        if w == 0 || h == 0 {
            return Vec::new();
        }
        if w == 1 {
            return vec!["│".to_string(); h];
        }

        let inner = w - 2;
        let title: String = self.title.chars().take(inner.saturating_sub(2)).collect();
        let title = title.trim_end();
        let top = if title.is_empty() {
            format!("┌{}┐", "─".repeat(inner))
        } else {
            let used = title.chars().count() + 2;
            format!("┌ {} {}┐", title, "─".repeat(inner - used))
        };

        let mut lines = Vec::with_capacity(h);
        lines.push(top);
        if h >= 2 {
            for _ in 0..h - 2 {
                lines.push(format!("│{}│", " ".repeat(inner)));
            }
            lines.push(format!("└{}┘", "─".repeat(inner)));
        }
        lines
    }
}

/// Round a layout coordinate to a terminal cell.
pub fn snap(value: f32) -> u16 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

// =============================================================================
// CardSink
// =============================================================================

/// Sink that draws cards into a terminal (or any writer).
///
/// Rows past the visible height are clipped. I/O failures don't stop the
/// pass; the first one is kept until `take_error`.
pub struct CardSink<W: Write> {
    out: W,
    /// Fixed row count, or `None` to follow the terminal height signal.
    rows: Option<u16>,
    last_error: Option<io::Error>,
}

impl<W: Write> CardSink<W> {
    /// Sink with a fixed number of visible rows.
    pub fn new(out: W, rows: u16) -> Self {
        Self {
            out,
            rows: Some(rows),
            last_error: None,
        }
    }

    /// Sink whose visible rows track the terminal height.
    pub fn follow_terminal(out: W) -> Self {
        Self {
            out,
            rows: None,
            last_error: None,
        }
    }

    pub fn visible_rows(&self) -> u16 {
        self.rows.unwrap_or_else(terminal_height)
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, card: &Card, x: u16, y: u16) -> io::Result<()> {
        let rows = self.visible_rows() as usize;
        for (offset, line) in card.lines().iter().enumerate() {
            let row = y as usize + offset;
            if row >= rows {
                break;
            }
            queue!(self.out, MoveTo(x, row as u16), Print(line))?;
        }
        Ok(())
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            warn!("card sink write failed: {}", err);
            if self.last_error.is_none() {
                self.last_error = Some(err);
            }
        }
    }
}

impl<W: Write> PlacementSink<Card> for CardSink<W> {
    fn begin_pass(&mut self) {
        let result = queue!(self.out, Clear(ClearType::All));
        self.record(result);
    }

    fn place(&mut self, card: &Card, position: Point<f32>) {
        let result = self.draw(card, snap(position.x), snap(position.y));
        self.record(result);
    }

    fn end_pass(&mut self) {
        let result = self.out.flush();
        self.record(result);
    }
}

// =============================================================================
// Tests
// =============================================================================
