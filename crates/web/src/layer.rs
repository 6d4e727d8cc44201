//! `Surface` over a 2D canvas context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::MountError;
use crate::render::{Color, FontSpec, Rect, Surface};

pub struct CanvasLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last styles pushed to the context, to skip redundant string formatting.
    fill: Option<Color>,
    stroke: Option<Color>,
    font_px: Option<u32>,
}

impl CanvasLayer {
    /// Look up `<canvas id=...>` and its 2D context.
    pub fn find(document: &Document, id: &str) -> Result<Self, MountError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::MissingElement(id.to_string()))?;
        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| MountError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| MountError::NoContext(id.to_string()))?;

        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(1.0);

        Ok(Self {
            canvas,
            ctx,
            fill: None,
            stroke: None,
            font_px: None,
        })
    }

    /// Set the backing size in pixels. Resizing resets the context state.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.canvas.width() == width && self.canvas.height() == height {
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_width(1.0);
        self.fill = None;
        self.stroke = None;
        self.font_px = None;
    }

    fn set_fill(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_string());
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color) {
        if self.stroke != Some(color) {
            self.ctx.set_stroke_style_str(&color.to_string());
            self.stroke = Some(color);
        }
    }
}

impl Surface for CanvasLayer {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self, color: Color) {
        self.set_stroke(color);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: FontSpec<'_>, color: Color) {
        self.set_fill(color);
        if self.font_px != Some(font.size_px) {
            self.ctx.set_font(&font.css());
            self.font_px = Some(font.size_px);
        }
        let _ = self.ctx.fill_text(text, x, y);
    }
}
