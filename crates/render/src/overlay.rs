//! Overlay layer: screen-state dimming and captions.
//!
//! Each engine flag contributes independently:
//!
//! - startup: dim + `HIT` / `ANY KEY` (small font)
//! - paused: dim + `PAUSE`
//! - game over: `GAME` / `OVER`
//!
//! While any flag is set the overlay is cleared and repainted every frame.
//! On the first frame with no flag set it is cleared once, and then left alone
//! while the game keeps running.

use crate::config::RenderConfig;
use crate::layout::BoardLayout;
use crate::surface::{FontSpec, Surface};
use crate::types::EngineFlags;

pub const STARTUP_CAPTION: [&str; 2] = ["HIT", "ANY KEY"];
pub const PAUSE_CAPTION: [&str; 1] = ["PAUSE"];
pub const GAME_OVER_CAPTION: [&str; 2] = ["GAME", "OVER"];

/// What the painter did to the overlay this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPaint {
    /// Cleared and redrawn for at least one flag.
    Painted,
    /// Cleared on the way back to the running screen.
    Cleared,
    /// Left untouched.
    Untouched,
}

#[derive(Debug, Clone)]
pub struct OverlayPainter {
    /// The overlay may hold content from an earlier frame.
    dirty: bool,
}

impl Default for OverlayPainter {
    fn default() -> Self {
        // Nothing is known about the canvas before the first frame.
        Self { dirty: true }
    }
}

impl OverlayPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paint<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        layout: &BoardLayout,
        flags: EngineFlags,
        config: &RenderConfig,
    ) -> OverlayPaint {
        let canvas = layout.canvas_rect();

        if !flags.any() {
            if !self.dirty {
                return OverlayPaint::Untouched;
            }
            surface.clear_rect(canvas);
            self.dirty = false;
            return OverlayPaint::Cleared;
        }

        surface.clear_rect(canvas);
        self.dirty = true;

        let palette = &config.palette;
        if flags.startup {
            surface.fill_rect(canvas, palette.dim);
            draw_caption(surface, layout, &STARTUP_CAPTION, config.small_font(), config);
        }
        if flags.paused {
            surface.fill_rect(canvas, palette.dim);
            draw_caption(surface, layout, &PAUSE_CAPTION, config.font(), config);
        }
        if flags.game_over {
            draw_caption(surface, layout, &GAME_OVER_CAPTION, config.font(), config);
        }

        OverlayPaint::Painted
    }
}

/// Lines centered on the canvas, `line_height` apart.
fn draw_caption<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &BoardLayout,
    lines: &[&str],
    font: FontSpec<'_>,
    config: &RenderConfig,
) {
    let (cx, cy) = layout.center();
    let line_height = f64::from(config.line_height);
    let first = cy - line_height * (lines.len() as f64 - 1.0) / 2.0;

    for (i, line) in lines.iter().enumerate() {
        let y = first + line_height * i as f64;
        surface.fill_text(line, cx, y, font, config.palette.font);
    }
}
