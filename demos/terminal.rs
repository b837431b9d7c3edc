//! Terminal Masonry - Cards packed into the shortest column.
//!
//! Resize the terminal to watch the grid repack whenever the number of
//! columns that fit changes. Press q, Esc, or Ctrl+C to quit.
//!
//! Logs go to stderr; set `RUST_LOG=spark_masonry=debug` to see decisions.
//!
//! Run with: cargo run --example terminal

use std::io::{self, stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing_subscriber::EnvFilter;

use spark_masonry::{
    detect_terminal_size, mount, run, terminal_width_signal, Card, CardSink, Masonry,
    MasonryConfig, TerminalGeometry,
};

const HEIGHTS: [u16; 12] = [5, 8, 4, 6, 9, 3, 7, 5, 4, 8, 6, 3];

fn cards() -> Vec<Card> {
    HEIGHTS
        .iter()
        .enumerate()
        .map(|(i, height)| Card::new(format!("card {}", i + 1), 18, *height))
        .collect()
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    detect_terminal_size();

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    let result = show();

    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn show() -> io::Result<()> {
    let masonry = Masonry::initialize(
        MasonryConfig::with_gutter(2.0, 1.0),
        TerminalGeometry,
        CardSink::follow_terminal(stdout()),
        cards(),
    )
    .map_err(io::Error::other)?;

    let mut handle = mount(masonry, terminal_width_signal());
    let result = run(&handle);

    if let Some(Some(err)) = handle.with_mut(|m| m.sink_mut().take_error()) {
        tracing::warn!("drawing failed: {}", err);
    }
    handle.destroy();
    result
}
