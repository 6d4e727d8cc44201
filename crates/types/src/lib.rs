//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the input arbiter, the engine
//! boundary and the frame renderer. All types are plain data with no I/O, so
//! they can be used from a terminal host, a browser host or a test.
//!
//! # Timing
//!
//! The whole pipeline runs on a fixed tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Nominal tick rate |
//! | `TICK_MS` | 16 | Timer interval in whole milliseconds |
//! | `ACCEL_DELAY_FRAMES` | 10 | Held frames suppressed after the first `Accel` fire |
//! | `ACCEL_REPEAT_FRAMES` | 5 | `Accel` repeat period once the delay has passed |
//!
//! # Hold policies
//!
//! Frames are counted from the tick the key was first observed held (frame 0):
//!
//! | Policy | Fires at |
//! |--------|----------|
//! | `Never` | 0 |
//! | `Accel` | 0, 15, 20, 25, ... |
//! | `Smooth` | every frame |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, HoldPolicy, LogicalAction};
//!
//! let action = LogicalAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, LogicalAction::MoveLeft);
//! assert_eq!(action.policy(), HoldPolicy::Accel);
//!
//! assert!(HoldPolicy::Accel.fires_at(0));
//! assert!(!HoldPolicy::Accel.fires_at(10));
//! assert!(HoldPolicy::Accel.fires_at(15));
//!
//! assert_eq!(Cell::from_u8(2), Cell::I);
//! ```

use serde::{Deserialize, Serialize};

/// Nominal tick rate of the render loop.
pub const TICKS_PER_SECOND: u32 = 60;

/// Timer interval in milliseconds (1000 / 60, truncated).
pub const TICK_MS: u32 = 1000 / TICKS_PER_SECOND;

/// Held frames after the first `Accel` fire during which repeats are suppressed.
pub const ACCEL_DELAY_FRAMES: u32 = 10;

/// `Accel` repeat period in frames once the delay has elapsed.
pub const ACCEL_REPEAT_FRAMES: u32 = 5;

/// Side length of one board cell in pixels (the 1px gutter is extra).
pub const CELL_SIZE: u32 = 16;

/// Board width of the reference engine, walls included.
pub const DEFAULT_BOARD_WIDTH: u32 = 12;

/// Board height of the reference engine, floor included.
pub const DEFAULT_BOARD_HEIGHT: u32 = 23;

/// Canvas width for the default board: `(CELL_SIZE + 1) * 12 + 1`.
pub const CANVAS_WIDTH: u32 = (CELL_SIZE + 1) * DEFAULT_BOARD_WIDTH + 1;

/// Canvas height for the default board: `(CELL_SIZE + 1) * 23 + 1`.
pub const CANVAS_HEIGHT: u32 = (CELL_SIZE + 1) * DEFAULT_BOARD_HEIGHT + 1;

/// Logical game commands, independent of the physical key that asserts them.
///
/// `AnyKey` is synthetic: every physical key asserts it in addition to its
/// own mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicalAction {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    SoftDrop,
    HardDrop,
    TogglePause,
    AnyKey,
}

impl LogicalAction {
    /// Number of logical actions.
    pub const COUNT: usize = 8;

    /// Every action, in declaration order.
    pub const ALL: [LogicalAction; Self::COUNT] = [
        LogicalAction::MoveLeft,
        LogicalAction::MoveRight,
        LogicalAction::RotateLeft,
        LogicalAction::RotateRight,
        LogicalAction::SoftDrop,
        LogicalAction::HardDrop,
        LogicalAction::TogglePause,
        LogicalAction::AnyKey,
    ];

    /// Dense index in `0..COUNT`, usable for table storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The repeat policy bound to this action.
    ///
    /// The table is fixed; it is not configurable at runtime.
    pub const fn policy(self) -> HoldPolicy {
        match self {
            LogicalAction::MoveLeft | LogicalAction::MoveRight => HoldPolicy::Accel,
            LogicalAction::SoftDrop => HoldPolicy::Smooth,
            LogicalAction::RotateLeft
            | LogicalAction::RotateRight
            | LogicalAction::HardDrop
            | LogicalAction::TogglePause
            | LogicalAction::AnyKey => HoldPolicy::Never,
        }
    }

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::LogicalAction;
    ///
    /// assert_eq!(LogicalAction::from_str("softDrop"), Some(LogicalAction::SoftDrop));
    /// assert_eq!(LogicalAction::from_str("TOGGLEPAUSE"), Some(LogicalAction::TogglePause));
    /// assert_eq!(LogicalAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(LogicalAction::MoveLeft),
            "moveright" => Some(LogicalAction::MoveRight),
            "rotateleft" => Some(LogicalAction::RotateLeft),
            "rotateright" => Some(LogicalAction::RotateRight),
            "softdrop" => Some(LogicalAction::SoftDrop),
            "harddrop" => Some(LogicalAction::HardDrop),
            "togglepause" => Some(LogicalAction::TogglePause),
            "anykey" => Some(LogicalAction::AnyKey),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalAction::MoveLeft => "moveLeft",
            LogicalAction::MoveRight => "moveRight",
            LogicalAction::RotateLeft => "rotateLeft",
            LogicalAction::RotateRight => "rotateRight",
            LogicalAction::SoftDrop => "softDrop",
            LogicalAction::HardDrop => "hardDrop",
            LogicalAction::TogglePause => "togglePause",
            LogicalAction::AnyKey => "anyKey",
        }
    }
}

/// Repeat-while-held behaviour of a logical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldPolicy {
    /// Fire once per continuous hold.
    Never,
    /// Fire once, pause for `ACCEL_DELAY_FRAMES`, then repeat every
    /// `ACCEL_REPEAT_FRAMES`.
    Accel,
    /// Fire on every held frame.
    Smooth,
}

impl HoldPolicy {
    /// Whether an action held for `held_frames` frames fires on this frame.
    ///
    /// `held_frames` is 0 on the first tick the key is observed held.
    pub const fn fires_at(self, held_frames: u32) -> bool {
        match self {
            HoldPolicy::Never => held_frames == 0,
            HoldPolicy::Accel => {
                held_frames == 0
                    || (held_frames > ACCEL_DELAY_FRAMES
                        && held_frames % ACCEL_REPEAT_FRAMES == 0)
            }
            HoldPolicy::Smooth => true,
        }
    }
}

/// Screen-state flags reported by the engine each tick.
///
/// The flags are not mutually exclusive; consumers react to each one
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineFlags {
    pub startup: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl EngineFlags {
    /// Running: no flag set.
    pub const RUNNING: EngineFlags = EngineFlags {
        startup: false,
        paused: false,
        game_over: false,
    };

    pub fn any(&self) -> bool {
        self.startup || self.paused || self.game_over
    }
}

/// One cell of the engine's board buffer.
///
/// The discriminants are the engine's byte encoding.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    /// Walls, floor and any filler block.
    Wall = 1,
    I = 2,
    J = 3,
    L = 4,
    O = 5,
    S = 6,
    T = 7,
    Z = 8,
}

impl Cell {
    /// Number of cell tags.
    pub const COUNT: usize = 9;

    /// Decode an engine byte.
    ///
    /// Unknown bytes decode as `Wall` so they still render as occupied.
    pub const fn from_u8(byte: u8) -> Self {
        match byte {
            0 => Cell::Empty,
            2 => Cell::I,
            3 => Cell::J,
            4 => Cell::L,
            5 => Cell::O,
            6 => Cell::S,
            7 => Cell::T,
            8 => Cell::Z,
            _ => Cell::Wall,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
