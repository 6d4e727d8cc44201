//! Recording surface.
//!
//! `DrawList` stores every call made against it. It is pure (no I/O) and is
//! what the tests, benches and the terminal probe render into.

use crate::color::Color;
use crate::surface::{FontSpec, Rect, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ClearRect(Rect),
    FillRect { rect: Rect, color: Color },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke(Color),
    FillText {
        text: String,
        x: f64,
        y: f64,
        size_px: u32,
        color: Color,
    },
}

/// A straight path segment from `MoveTo` to the following `LineTo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1
    }

    pub fn is_horizontal(&self) -> bool {
        self.y0 == self.y1
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Forget recorded calls, keeping the allocation.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Path segments, in recording order.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut pen: Option<(f64, f64)> = None;
        for op in &self.ops {
            match *op {
                DrawOp::BeginPath => pen = None,
                DrawOp::MoveTo { x, y } => pen = Some((x, y)),
                DrawOp::LineTo { x, y } => {
                    if let Some((x0, y0)) = pen {
                        out.push(Segment { x0, y0, x1: x, y1: y });
                    }
                    pen = Some((x, y));
                }
                _ => {}
            }
        }
        out
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::ClearRect(_)))
            .count()
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn stroke(&mut self, color: Color) {
        self.ops.push(DrawOp::Stroke(color));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: FontSpec<'_>, color: Color) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            size_px: font.size_px,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_pair_move_and_line() {
        let mut list = DrawList::new();
        list.begin_path();
        list.move_to(1.0, 0.0);
        list.line_to(1.0, 10.0);
        list.move_to(0.0, 1.0);
        list.line_to(10.0, 1.0);
        list.stroke(Color::rgb(0, 0, 0));

        let segs = list.segments();
        assert_eq!(segs.len(), 2);
        assert!(segs[0].is_vertical());
        assert!(segs[1].is_horizontal());
    }

    #[test]
    fn reset_keeps_nothing() {
        let mut list = DrawList::new();
        list.clear_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(list.clears(), 1);
        list.reset();
        assert!(list.is_empty());
    }
}
