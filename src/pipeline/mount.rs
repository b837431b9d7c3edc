//! Mount API - Reactive resize subscription and event loop.
//!
//! Mounting subscribes a masonry grid to a width signal. Every change of the
//! signal fires an effect that delivers a zero-argument "width may have
//! changed" notification to the reactor, which re-measures and decides
//! whether to repack.
//!
//! # Example
//!
//! ```ignore
//! use spark_masonry::pipeline::{mount, run, detect_terminal_size, terminal_width_signal};
//!
//! detect_terminal_size();
//! let masonry = Masonry::initialize(config, TerminalGeometry, sink, cards)?;
//! let mut handle = mount(masonry, terminal_width_signal());
//!
//! run(&handle)?;  // Blocks until q / Esc / Ctrl+C
//! handle.destroy();
//! ```
//!
//! # Single-flight
//!
//! The grid sits behind `Rc<RefCell<_>>`. A command that arrives while a pass
//! holds the grid (an effect fired from inside a sink, say) is recorded as
//! pending and replayed once the pass releases it, so passes never overlap.
//! Pending commands collapse: destroy beats update, update beats resize.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use bitflags::bitflags;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use spark_signals::{effect, flush_sync, Signal};
use tracing::{debug, trace, warn};

use crate::engine::Geometry;
use crate::renderer::PlacementSink;
use crate::types::Relayout;

use super::reactor::Masonry;
use super::terminal::route_event;

// =============================================================================
// Pending Commands
// =============================================================================

bitflags! {
    /// Commands deferred while a pass held the grid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Pending: u8 {
        const RESIZE = 1 << 0;
        const UPDATE = 1 << 1;
        const DESTROY = 1 << 2;
    }
}

/// Record `command` for replay once the grid is released.
fn defer(pending: &Cell<Pending>, command: Pending) {
    pending.set(pending.get() | command);
}

/// Replay deferred commands against a grid this caller holds.
///
/// Commands issued during a replayed pass land in `pending` and are picked
/// up by the next round of the loop.
fn drain<G, S>(masonry: &mut Masonry<G, S>, pending: &Cell<Pending>) -> Relayout
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    let mut outcome = Relayout::NONE;
    loop {
        let commands = pending.take();
        if commands.is_empty() {
            return outcome;
        }
        if commands.contains(Pending::DESTROY) {
            masonry.destroy();
            pending.set(Pending::empty());
            return outcome;
        }
        outcome |= if commands.contains(Pending::UPDATE) {
            masonry.update()
        } else {
            masonry.on_resize()
        };
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by `mount()`.
///
/// Holds the shared grid, the deferred commands, and the effect
/// stop function.
pub struct MountHandle<G: Geometry, S> {
    masonry: Rc<RefCell<Masonry<G, S>>>,
    pending: Rc<Cell<Pending>>,
    running: Rc<Cell<bool>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl<G, S> MountHandle<G, S>
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    /// Force a full repack and render.
    ///
    /// Deferred until the grid is released if a pass holds it.
    pub fn update(&self) -> Relayout {
        defer(&self.pending, Pending::UPDATE);
        self.flush_pending()
    }

    /// Deliver a resize notification by hand.
    pub fn notify_resize(&self) -> Relayout {
        notify_resize(&self.masonry, &self.pending)
    }

    /// Unsubscribe from the width signal and release the grid's items.
    ///
    /// If a pass holds the grid, the release happens once it is returned.
    /// Safe to call more than once.
    pub fn destroy(&mut self) {
        self.running.set(false);
        if let Some(stop) = self.stop_effect.take() {
            stop();
            debug!("masonry unmounted");
        }
        defer(&self.pending, Pending::DESTROY);
        if self.flush_pending().is_empty() && !self.pending.get().is_empty() {
            warn!("destroy deferred until the layout pass ends");
        }
    }

    /// Read access to the grid. `None` while a pass holds it.
    pub fn with<R>(&self, f: impl FnOnce(&Masonry<G, S>) -> R) -> Option<R> {
        self.masonry.try_borrow().ok().map(|masonry| f(&*masonry))
    }

    /// Mutable access to the grid. `None` while a pass holds it.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Masonry<G, S>) -> R) -> Option<R> {
        let result = self.masonry.try_borrow_mut().ok().map(|mut masonry| f(&mut *masonry));
        self.flush_pending();
        result
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop the event loop without tearing anything down.
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Replay deferred commands if the grid is free.
    fn flush_pending(&self) -> Relayout {
        if self.pending.get().is_empty() {
            return Relayout::NONE;
        }
        match self.masonry.try_borrow_mut() {
            Ok(mut masonry) => drain(&mut masonry, &self.pending),
            Err(_) => {
                trace!("layout pass in progress, keeping commands pending");
                Relayout::NONE
            }
        }
    }
}

impl<G: Geometry, S> Drop for MountHandle<G, S> {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

/// Run `on_resize`, or mark it pending if a pass holds the grid.
fn notify_resize<G, S>(masonry: &RefCell<Masonry<G, S>>, pending: &Cell<Pending>) -> Relayout
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    defer(pending, Pending::RESIZE);
    let Ok(mut masonry) = masonry.try_borrow_mut() else {
        trace!("layout pass in progress, deferring resize");
        return Relayout::NONE;
    };
    drain(&mut masonry, pending)
}

// =============================================================================
// Mount Function
// =============================================================================

/// Subscribe `masonry` to `width`.
///
/// The grid has already been laid out by `Masonry::initialize`; the effect's
/// first run finds the width unchanged and does nothing.
pub fn mount<G, S>(masonry: Masonry<G, S>, width: Signal<u16>) -> MountHandle<G, S>
where
    G: Geometry + 'static,
    G::Element: 'static,
    S: PlacementSink<G::Element> + 'static,
{
    let masonry = Rc::new(RefCell::new(masonry));
    let pending = Rc::new(Cell::new(Pending::empty()));

    let masonry_for_effect = masonry.clone();
    let pending_for_effect = pending.clone();
    let stop_fn = effect(move || {
        // Read width (creates reactive dependency); the reactor re-measures
        let _ = width.get();
        notify_resize(&masonry_for_effect, &pending_for_effect);
    });

    MountHandle {
        masonry,
        pending,
        running: Rc::new(Cell::new(true)),
        stop_effect: Some(Box::new(stop_fn)),
    }
}

// =============================================================================
// Event Loop
// =============================================================================

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Process at most one terminal event.
///
/// Resize events update the terminal signals and the mount effect runs
/// before this returns. Returns `Ok(false)` once the loop should stop.
pub fn tick<G, S>(handle: &MountHandle<G, S>, timeout: Duration) -> io::Result<bool>
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    if !handle.is_running() {
        return Ok(false);
    }

    if poll(timeout)? {
        match read()? {
            Event::Key(key) if is_quit(&key) => handle.stop(),
            event => {
                if route_event(&event) {
                    flush_sync();
                }
            }
        }
    }

    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run<G, S>(handle: &MountHandle<G, S>) -> io::Result<()>
where
    G: Geometry,
    S: PlacementSink<G::Element>,
{
    while tick(handle, Duration::from_millis(16))? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
