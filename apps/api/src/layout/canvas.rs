//! Thin pen over a [`DrawingBackend`]: binds the registered face so layout code only
//! deals in positions, sizes and alignment.

use crate::render::backend::{Align, DrawingBackend, DEFAULT_BASELINE_FACTOR};
use crate::render::fonts::CidFontFace;

/// Size, alignment and baseline correction for one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub align: Align,
    pub baseline_factor: f32,
}

impl TextStyle {
    /// Left-aligned run with the default baseline correction.
    pub const fn sized(size: f32) -> Self {
        Self {
            size,
            align: Align::Left,
            baseline_factor: DEFAULT_BASELINE_FACTOR,
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    pub const fn right(self) -> Self {
        Self {
            align: Align::Right,
            ..self
        }
    }

    pub const fn baseline(self, baseline_factor: f32) -> Self {
        Self {
            baseline_factor,
            ..self
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::sized(10.0)
    }
}

pub struct Canvas<'a, B: DrawingBackend> {
    backend: &'a mut B,
    face: &'static CidFontFace,
}

impl<'a, B: DrawingBackend> Canvas<'a, B> {
    pub fn new(backend: &'a mut B, face: &'static CidFontFace) -> Self {
        Self { backend, face }
    }

    pub fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        self.backend.set_font(self.face, style.size);
        self.backend
            .draw_text(x, y, text, style.align, style.baseline_factor);
    }

    /// Outlines a box given its bottom-left corner.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.backend.stroke_rect(x, y, width, height);
    }

    pub fn page_break(&mut self) {
        self.backend.new_page();
    }
}
