//! External engine boundary.
//!
//! The game simulation (pieces, gravity, collision, scoring) lives outside this
//! workspace. This crate describes the contract the input arbiter and the frame
//! renderer consume, and the load state machine that gates every call until an
//! engine instance exists.
//!
//! - [`Engine`]: queries, commands and the single-step `advance`
//! - [`CellView`]: read-only view of the engine's cell buffer
//! - [`EngineSlot`]: `Unloaded -> Loading -> Ready(engine)`
//! - [`RecordingEngine`]: in-memory double that records the commands it receives

use std::borrow::Cow;

pub mod mock;
pub mod slot;

pub use blockfall_types as types;

pub use mock::{EngineCommand, RecordingEngine};
pub use slot::{EngineSlot, InstallError};

use crate::types::{Cell, EngineFlags};

/// The game engine as seen by the core.
///
/// Commands never fail observably; an engine ignores commands that are invalid
/// in its current state (for example movement while paused).
pub trait Engine {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Read-only view of the current cell buffer.
    ///
    /// Callers read it once per tick and must not hold on to it across ticks.
    fn cells(&self) -> CellView<'_>;

    fn is_startup(&self) -> bool;
    fn is_paused(&self) -> bool;
    fn is_game_over(&self) -> bool;

    fn flags(&self) -> EngineFlags {
        EngineFlags {
            startup: self.is_startup(),
            paused: self.is_paused(),
            game_over: self.is_game_over(),
        }
    }

    fn move_left(&mut self);
    fn move_right(&mut self);
    fn rotate_left(&mut self);
    fn rotate_right(&mut self);
    fn soft_drop(&mut self);
    fn hard_drop(&mut self);
    fn toggle_pause(&mut self);

    /// Leave the startup screen and start the game.
    fn run(&mut self);

    /// Advance the simulation by one step.
    fn advance(&mut self);
}

/// Row-major view of an engine cell buffer, one byte per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView<'a> {
    width: u32,
    height: u32,
    bytes: Cow<'a, [u8]>,
}

impl<'a> CellView<'a> {
    /// View over a buffer the engine owns.
    pub fn borrowed(width: u32, height: u32, bytes: &'a [u8]) -> Self {
        Self {
            width,
            height,
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// View over a copy taken from a foreign buffer (e.g. a JS typed array).
    pub fn owned(width: u32, height: u32, bytes: Vec<u8>) -> CellView<'static> {
        CellView {
            width,
            height,
            bytes: Cow::Owned(bytes),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer index of `(row, col)`.
    #[inline(always)]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Cell at `(row, col)`.
    ///
    /// A buffer shorter than `width * height` reads as empty past its end.
    pub fn get(&self, row: u32, col: u32) -> Cell {
        if row >= self.height || col >= self.width {
            return Cell::Empty;
        }
        self.bytes
            .get(self.index(row, col))
            .map_or(Cell::Empty, |&b| Cell::from_u8(b))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_view_is_row_major() {
        let bytes = [0u8, 2, 0, 0, 0, 0, 0, 8];
        let view = CellView::borrowed(4, 2, &bytes);
        assert_eq!(view.index(1, 3), 7);
        assert_eq!(view.get(0, 1), Cell::I);
        assert_eq!(view.get(1, 3), Cell::Z);
        assert_eq!(view.get(1, 0), Cell::Empty);
    }

    #[test]
    fn cell_view_out_of_range_reads_empty() {
        let view = CellView::owned(2, 2, vec![1, 1]);
        assert_eq!(view.get(0, 1), Cell::Wall);
        assert_eq!(view.get(1, 0), Cell::Empty);
        assert_eq!(view.get(5, 5), Cell::Empty);
    }
}
