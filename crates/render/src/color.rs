//! Colors and the cell palette.

use std::fmt;

use crate::types::Cell;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// CSS form: `#RRGGBB` when opaque, `rgba(r, g, b, alpha)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

/// Board and overlay colors.
///
/// Piece colors are stored as a table indexed by the cell tag, so a cell's
/// color is a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub grid: Color,
    pub font: Color,
    /// Full-canvas dim behind overlay text.
    pub dim: Color,
    cells: [Color; Cell::COUNT],
}

impl Palette {
    pub const GRID: Color = Color::hex(0xCCCCCC);
    pub const EMPTY: Color = Color::hex(0xDDDDDD);
    pub const FILLER: Color = Color::hex(0x000000);
    pub const FONT: Color = Color::hex(0xFFFFFF);
    pub const DIM: Color = Color::hex(0x000000).with_alpha(128);

    pub const I: Color = Color::hex(0x00F0F0);
    pub const J: Color = Color::hex(0x0000FF);
    pub const L: Color = Color::hex(0xFF8800);
    pub const O: Color = Color::hex(0xFFFF00);
    pub const S: Color = Color::hex(0x88FF00);
    pub const T: Color = Color::hex(0xFF00FF);
    pub const Z: Color = Color::hex(0xFF0000);

    /// Color of `cell` in normal play.
    pub fn cell(&self, cell: Cell) -> Color {
        self.cells[cell.as_u8() as usize]
    }

    /// Color of `cell` on the game-over screen: empty stays empty, everything
    /// else collapses to the filler color.
    pub fn cell_game_over(&self, cell: Cell) -> Color {
        if cell.is_empty() {
            self.empty()
        } else {
            self.filler()
        }
    }

    pub fn empty(&self) -> Color {
        self.cell(Cell::Empty)
    }

    pub fn filler(&self) -> Color {
        self.cell(Cell::Wall)
    }

    pub fn set_cell(&mut self, cell: Cell, color: Color) {
        self.cells[cell.as_u8() as usize] = color;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Self::GRID,
            font: Self::FONT,
            dim: Self::DIM,
            // Indexed by the `Cell` discriminant.
            cells: [
                Self::EMPTY,
                Self::FILLER,
                Self::I,
                Self::J,
                Self::L,
                Self::O,
                Self::S,
                Self::T,
                Self::Z,
            ],
        }
    }
}
