//! Board geometry in canvas pixels.
//!
//! Cells are `cell_size` pixels square with a 1px gutter; the gutter before
//! column 0 and row 0 is the border. Grid line `i` sits on pixel
//! `i * (cell_size + 1) + 1`.

use crate::surface::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    cell_size: u32,
    width: u32,
    height: u32,
}

impl BoardLayout {
    /// `width` x `height` cells of `cell_size` pixels.
    pub const fn new(cell_size: u32, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cell size plus gutter.
    pub const fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    pub const fn canvas_width(&self) -> u32 {
        self.pitch() * self.width + 1
    }

    pub const fn canvas_height(&self) -> u32 {
        self.pitch() * self.height + 1
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas_width()),
            f64::from(self.canvas_height()),
        )
    }

    /// Pixel offset of grid line `i` (applies to both axes).
    pub const fn line_offset(&self, i: u32) -> u32 {
        i * self.pitch() + 1
    }

    /// Filled area of cell `(row, col)`.
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let size = f64::from(self.cell_size);
        Rect::new(
            f64::from(self.line_offset(col)),
            f64::from(self.line_offset(row)),
            size,
            size,
        )
    }

    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.canvas_width()) / 2.0,
            f64::from(self.canvas_height()) / 2.0,
        )
    }
}
