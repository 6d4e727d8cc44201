//! In-memory engine double.
//!
//! `RecordingEngine` holds a settable cell buffer and screen flags and records
//! every command it receives. It implements no gameplay: the only state it
//! keeps besides the buffer is the flag bookkeeping a host needs to walk
//! through the startup, running and paused screens.

use serde::Serialize;

use crate::types::{Cell, EngineFlags};
use crate::{CellView, Engine};

/// A command received through the [`Engine`] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EngineCommand {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    SoftDrop,
    HardDrop,
    TogglePause,
    Run,
    Advance,
}

#[derive(Debug, Clone)]
pub struct RecordingEngine {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    flags: EngineFlags,
    commands: Vec<EngineCommand>,
    steps: u64,
}

impl RecordingEngine {
    /// Empty board on the startup screen.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty.as_u8(); (width as usize) * (height as usize)],
            flags: EngineFlags {
                startup: true,
                ..EngineFlags::default()
            },
            commands: Vec::new(),
            steps: 0,
        }
    }

    /// Empty board already running.
    pub fn running(width: u32, height: u32) -> Self {
        Self::new(width, height).with_flags(EngineFlags::RUNNING)
    }

    pub fn with_flags(mut self, flags: EngineFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn set_flags(&mut self, flags: EngineFlags) {
        self.flags = flags;
    }

    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        if row >= self.height || col >= self.width {
            return;
        }
        let i = (row as usize) * (self.width as usize) + (col as usize);
        self.cells[i] = cell.as_u8();
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell.as_u8());
    }

    /// Commands received so far, oldest first.
    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// Drain the command log.
    pub fn take_commands(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands other than `Advance`.
    pub fn inputs(&self) -> Vec<EngineCommand> {
        self.commands
            .iter()
            .copied()
            .filter(|c| *c != EngineCommand::Advance)
            .collect()
    }

    /// Number of `advance` calls.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Engine for RecordingEngine {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> CellView<'_> {
        CellView::borrowed(self.width, self.height, &self.cells)
    }

    fn is_startup(&self) -> bool {
        self.flags.startup
    }

    fn is_paused(&self) -> bool {
        self.flags.paused
    }

    fn is_game_over(&self) -> bool {
        self.flags.game_over
    }

    fn move_left(&mut self) {
        self.commands.push(EngineCommand::MoveLeft);
    }

    fn move_right(&mut self) {
        self.commands.push(EngineCommand::MoveRight);
    }

    fn rotate_left(&mut self) {
        self.commands.push(EngineCommand::RotateLeft);
    }

    fn rotate_right(&mut self) {
        self.commands.push(EngineCommand::RotateRight);
    }

    fn soft_drop(&mut self) {
        self.commands.push(EngineCommand::SoftDrop);
    }

    fn hard_drop(&mut self) {
        self.commands.push(EngineCommand::HardDrop);
    }

    fn toggle_pause(&mut self) {
        self.commands.push(EngineCommand::TogglePause);
        if !self.flags.startup && !self.flags.game_over {
            self.flags.paused = !self.flags.paused;
        }
    }

    fn run(&mut self) {
        self.commands.push(EngineCommand::Run);
        self.flags.startup = false;
    }

    fn advance(&mut self) {
        self.commands.push(EngineCommand::Advance);
        self.steps += 1;
    }
}
