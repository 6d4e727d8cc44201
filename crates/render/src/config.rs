//! Render configuration.

use crate::color::Palette;
use crate::layout::BoardLayout;
use crate::surface::FontSpec;
use crate::types::CELL_SIZE;

pub const DEFAULT_FONT_FAMILY: &str = "Press Start 2p";
pub const FONT_SIZE: u32 = 36;
pub const SMALL_FONT_SIZE: u32 = 18;
pub const LINE_HEIGHT: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub cell_size: u32,
    pub font_family: String,
    pub font_size: u32,
    pub small_font_size: u32,
    pub line_height: u32,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: FONT_SIZE,
            small_font_size: SMALL_FONT_SIZE,
            line_height: LINE_HEIGHT,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Layout of a `width` x `height` board at the configured cell size.
    pub fn layout(&self, width: u32, height: u32) -> BoardLayout {
        BoardLayout::new(self.cell_size, width, height)
    }

    pub fn font(&self) -> FontSpec<'_> {
        FontSpec {
            size_px: self.font_size,
            family: &self.font_family,
        }
    }

    pub fn small_font(&self) -> FontSpec<'_> {
        FontSpec {
            size_px: self.small_font_size,
            family: &self.font_family,
        }
    }
}
