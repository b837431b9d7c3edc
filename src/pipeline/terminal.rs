//! Terminal state signals.
//!
//! Terminal dimensions live in reactive signals. The width signal is the
//! resize notification source for a mounted masonry grid: every change fires
//! the mount effect, which asks the reactor to re-measure.

use std::cell::RefCell;

use crossterm::event::Event;
use spark_signals::{signal, Signal};

use crate::engine::Geometry;
use crate::renderer::Card;

// =============================================================================
// Terminal Size Signals
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: RefCell<Signal<u16>> = RefCell::new(signal(80));
    static TERMINAL_HEIGHT: RefCell<Signal<u16>> = RefCell::new(signal(24));
}

/// Get the current terminal width.
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.borrow().get())
}

/// Get the current terminal height.
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.borrow().get())
}

/// Set the terminal size (called on resize events).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|w| w.borrow().set(width));
    TERMINAL_HEIGHT.with(|h| h.borrow().set(height));
}

/// Get the terminal width signal for reactive tracking.
pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|w| w.borrow().clone())
}

/// Get the terminal height signal for reactive tracking.
pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|h| h.borrow().clone())
}

/// Detect and set the actual terminal size from the environment.
pub fn detect_terminal_size() {
    if let Ok((width, height)) = crossterm::terminal::size() {
        set_terminal_size(width, height);
    }
}

/// Feed a crossterm event into the terminal signals.
///
/// Returns true if the event was a resize.
pub fn route_event(event: &Event) -> bool {
    match event {
        Event::Resize(w, h) => {
            set_terminal_size(*w, *h);
            true
        }
        _ => false,
    }
}

// =============================================================================
// Terminal Geometry
// =============================================================================

/// Measures cards against the live terminal width, in cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGeometry;

impl Geometry for TerminalGeometry {
    type Element = Card;

    fn container_width(&self) -> f32 {
        f32::from(terminal_width())
    }

    fn item_width(&self, card: &Card) -> f32 {
        f32::from(card.width)
    }

    fn item_height(&self, card: &Card) -> f32 {
        f32::from(card.height)
    }
}

// =============================================================================
// Tests
// =============================================================================
