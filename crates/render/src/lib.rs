//! Canvas "game renderer" module.
//!
//! A small, game-oriented rendering layer for the two stacked canvas layers:
//! the playfield (grid + cells) and the overlay (dimming + captions). Drawing
//! goes through the [`Surface`] trait, so everything here is pure and can be
//! unit-tested against a [`DrawList`].
//!
//! [`FrameCoordinator`] ties one frame together: input arbitration, one engine
//! step, then both layers.

pub mod color;
pub mod config;
pub mod coordinator;
pub mod draw_list;
pub mod layout;
pub mod overlay;
pub mod playfield;
pub mod surface;

pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use color::{Color, Palette};
pub use config::RenderConfig;
pub use coordinator::{FrameCoordinator, FrameReport, TickOutcome};
pub use draw_list::{DrawList, DrawOp, Segment};
pub use layout::BoardLayout;
pub use overlay::{OverlayPaint, OverlayPainter};
pub use playfield::{draw_cells, draw_grid, draw_playfield};
pub use surface::{FontSpec, Rect, Surface};
