//! Per-tick observer hook.

use trophic_grid::GridView;

use crate::census::Census;
use crate::render::render;

/// Receives each published grid state, including tick 0 (the initial state).
pub trait Observer {
    /// Called once per published state with the tick number, the census, and
    /// a read-only view of the grid.
    fn on_tick(&mut self, tick: u64, census: &Census, view: &GridView<'_>);
}

/// Prints the census, and optionally the grid, to stdout.
pub struct ConsoleObserver {
    show_grid: bool,
}

impl ConsoleObserver {
    /// Census-only output.
    pub fn new() -> Self {
        Self { show_grid: false }
    }

    /// Census plus the character grid.
    pub fn with_grid() -> Self {
        Self { show_grid: true }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ConsoleObserver {
    fn on_tick(&mut self, tick: u64, census: &Census, view: &GridView<'_>) {
        println!("tick {tick}: {census}");
        if self.show_grid {
            print!("{}", render(view));
        }
    }
}

/// Discards all output. Useful for tests and benchmarks.
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn on_tick(&mut self, _tick: u64, _census: &Census, _view: &GridView<'_>) {}
}

/// Records the census sequence. Useful for determinism checks.
#[derive(Default)]
pub struct RecordingObserver {
    /// One census per published state, tick 0 first.
    pub history: Vec<Census>,
}

impl RecordingObserver {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for RecordingObserver {
    fn on_tick(&mut self, _tick: u64, census: &Census, _view: &GridView<'_>) {
        self.history.push(*census);
    }
}
