//! Page layout controller — walks a template's blocks top to bottom, threading the
//! vertical cursor from one block to the next and breaking pages where the template
//! says so.
//!
//! Layout is pure arithmetic over the drawing primitives and has no failure path;
//! persisting the document is the caller's job.

use chrono::NaiveDate;
use tracing::debug;

use crate::layout::canvas::{Canvas, TextStyle};
use crate::layout::grid::render_grid;
use crate::layout::profile::draw_profile;
use crate::layout::template::{Block, SectionId, Template, TextBoxSpec};
use crate::layout::wrap::wrap_fixed;
use crate::render::backend::{DrawingBackend, PT_PER_MM};
use crate::render::fonts::CidFontFace;
use crate::resume::models::BasicInfo;

/// Body text size inside the free-text box.
const BOX_TEXT_SIZE: f32 = 8.0;
/// Line advance of the body text: 1.2 × size, in millimetres.
const BOX_LEADING_MM: f32 = BOX_TEXT_SIZE * 1.2 / PT_PER_MM;
const BOX_INSET: f32 = 3.0;
const BOX_LABEL_DROP: f32 = 5.0;
const BOX_FIRST_LINE_DROP: f32 = 10.5;

/// Everything the controller reads from a request.
pub trait SheetContent {
    fn basic(&self) -> &BasicInfo;

    /// Entries for a table section; sections the request does not carry are empty.
    fn entries(&self, id: SectionId) -> &[String];

    /// Free text for a text box section.
    fn free_text(&self, id: SectionId) -> &str;
}

/// Rows used by one table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionReport {
    pub id: SectionId,
    pub rows_filled: usize,
    pub rows_dropped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub pages: usize,
    pub sections: Vec<SectionReport>,
    /// Wrapped lines written across all text boxes.
    pub text_lines: usize,
}

/// Lays out `content` onto `backend` following `template`.
pub fn lay_out<B: DrawingBackend, C: SheetContent + ?Sized>(
    backend: &mut B,
    face: &'static CidFontFace,
    template: &Template,
    content: &C,
    issued_on: NaiveDate,
) -> LayoutReport {
    let mut canvas = Canvas::new(backend, face);
    let mut cursor = 0.0_f32;
    let mut report = LayoutReport {
        pages: 1,
        sections: Vec::new(),
        text_lines: 0,
    };

    for block in template.blocks {
        match block {
            Block::Profile => {
                cursor = draw_profile(&mut canvas, content.basic(), issued_on);
            }
            Block::Grid(spec) => {
                let outcome =
                    render_grid(&mut canvas, spec, cursor - spec.gap, content.entries(spec.id));
                if outcome.rows_dropped > 0 {
                    debug!(
                        section = ?spec.id,
                        capacity = spec.capacity,
                        dropped = outcome.rows_dropped,
                        "Entries beyond table capacity were not rendered"
                    );
                }
                report.sections.push(SectionReport {
                    id: spec.id,
                    rows_filled: outcome.rows_filled,
                    rows_dropped: outcome.rows_dropped,
                });
                cursor = outcome.bottom;
            }
            Block::PageBreak { top } => {
                canvas.page_break();
                report.pages += 1;
                cursor = *top;
            }
            Block::TextBox(spec) => {
                let top = cursor - spec.gap;
                report.text_lines += draw_text_box(&mut canvas, spec, top, content.free_text(spec.id));
                cursor = top - spec.height;
            }
        }
    }

    debug!(variant = ?template.variant, pages = report.pages, "Layout complete");
    report
}

/// Outlines the box, labels it and writes the wrapped text line by line.
///
/// Lines past the bottom edge are still drawn; the box does not clip.
fn draw_text_box<B: DrawingBackend>(
    canvas: &mut Canvas<'_, B>,
    spec: &TextBoxSpec,
    top: f32,
    text: &str,
) -> usize {
    canvas.rect(spec.x, top - spec.height, spec.width, spec.height);
    canvas.text(spec.x + BOX_INSET, top - BOX_LABEL_DROP, spec.label, TextStyle::sized(8.0));

    let body = TextStyle::sized(BOX_TEXT_SIZE).baseline(0.0);
    let lines = wrap_fixed(text, spec.char_limit);
    let mut baseline = top - BOX_FIRST_LINE_DROP;
    for line in &lines {
        canvas.text(spec.x + BOX_INSET, baseline, line, body);
        baseline -= BOX_LEADING_MM;
    }
    lines.len()
}
