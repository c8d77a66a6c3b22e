//! The drawing surface the layout engine renders onto.
//!
//! All coordinates crossing this boundary are millimetres on an A4 page with the
//! origin at the bottom-left corner and y increasing upward. Implementations own any
//! conversion to their native unit.

use std::path::Path;

use crate::errors::RenderError;
use crate::render::fonts::CidFontFace;

/// A4 portrait, in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Points per millimetre (72pt per inch, 25.4mm per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Baseline correction used for ordinary labels and cell text.
pub const DEFAULT_BASELINE_FACTOR: f32 = 0.3;

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Primitive operations of a page-description backend.
pub trait DrawingBackend {
    /// Sets the face and size used by subsequent `draw_text` calls.
    fn set_font(&mut self, face: &'static CidFontFace, size_pt: f32);

    /// Draws one run of text. The baseline lands at `y_mm` minus
    /// `size × baseline_factor` points, which visually centres the run in a row.
    fn draw_text(&mut self, x_mm: f32, y_mm: f32, text: &str, align: Align, baseline_factor: f32);

    /// Strokes a rectangle given its bottom-left corner.
    fn stroke_rect(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32);

    /// Ends the current page and starts a fresh one.
    fn new_page(&mut self);

    /// Serializes the document to `destination`. Valid once per document.
    fn finish(&mut self, destination: &Path) -> Result<(), RenderError>;
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}
