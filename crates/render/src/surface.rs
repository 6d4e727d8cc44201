//! Drawing surface abstraction.
//!
//! A small subset of the 2D canvas API, enough for the playfield and overlay
//! layers. Coordinates are canvas pixels. The browser bridge implements it over
//! `CanvasRenderingContext2d`; [`DrawList`](crate::DrawList) records calls for
//! tests and headless hosts.

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Font selection for [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec<'a> {
    pub size_px: u32,
    pub family: &'a str,
}

impl FontSpec<'_> {
    /// CSS font shorthand, e.g. `36px "Press Start 2p"`.
    pub fn css(&self) -> String {
        format!("{}px \"{}\"", self.size_px, self.family)
    }
}

pub trait Surface {
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: crate::Color);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path with a 1px line.
    fn stroke(&mut self, color: crate::Color);

    /// Draw `text` centered horizontally and vertically on `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: FontSpec<'_>, color: crate::Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_css_quotes_family() {
        let font = FontSpec {
            size_px: 18,
            family: "Press Start 2p",
        };
        assert_eq!(font.css(), "18px \"Press Start 2p\"");
    }
}
