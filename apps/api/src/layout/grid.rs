//! Grid renderer — draws one year / month / description table at a fixed capacity.
//!
//! Exactly `capacity` rows are outlined whatever the entry count. Entries past the
//! capacity are dropped without error; missing entries leave border-only rows.
//! Descriptions are never wrapped and may run past the cell edge.

use crate::layout::canvas::{Canvas, TextStyle};
use crate::layout::entry::parse_entry;
use crate::layout::template::GridSpec;
use crate::layout::PAGE_CENTER_X;
use crate::render::backend::DrawingBackend;

pub const ROW_HEIGHT: f32 = 7.0;
/// Year, month and description column widths.
pub const COLUMN_WIDTHS: [f32; 3] = [20.0, 10.0, 140.0];

/// Text baseline (before correction) sits this far below a row's top edge.
const TEXT_DROP: f32 = 5.0;
const DESCRIPTION_INSET: f32 = 3.0;

const CAPTION: TextStyle = TextStyle::sized(10.0).centered();
const HEADER: TextStyle = TextStyle::sized(8.0).centered();
const CELL: TextStyle = TextStyle::sized(10.0);

/// Where a grid ended and how its entries were consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOutcome {
    /// Bottom edge of the last row; the next block's cursor.
    pub bottom: f32,
    pub rows_filled: usize,
    pub rows_dropped: usize,
}

/// `(left edge, width)` of the year, month and description columns.
fn columns(x: f32) -> [(f32, f32); 3] {
    let mut left = x;
    COLUMN_WIDTHS.map(|width| {
        let col = (left, width);
        left += width;
        col
    })
}

/// Draws the caption, header row and `spec.capacity` body rows with the header's
/// top edge at `header_top`.
pub fn render_grid<B: DrawingBackend>(
    canvas: &mut Canvas<'_, B>,
    spec: &GridSpec,
    header_top: f32,
    entries: &[String],
) -> GridOutcome {
    let cols = columns(spec.x);
    let [(year_x, year_w), (month_x, month_w), (desc_x, _)] = cols;

    canvas.text(PAGE_CENTER_X, header_top + spec.caption_rise, spec.title, CAPTION);

    let labels = ["年", "月", spec.title];
    for ((left, width), label) in cols.iter().zip(labels) {
        canvas.rect(*left, header_top - ROW_HEIGHT, *width, ROW_HEIGHT);
        canvas.text(left + width / 2.0, header_top - TEXT_DROP, label, HEADER);
    }

    let mut row_top = header_top - ROW_HEIGHT;
    for i in 0..spec.capacity {
        let row_bottom = row_top - ROW_HEIGHT;
        for (left, width) in &cols {
            canvas.rect(*left, row_bottom, *width, ROW_HEIGHT);
        }

        if let Some(raw) = entries.get(i) {
            let entry = parse_entry(raw);
            let text_y = row_top - TEXT_DROP;
            if !entry.year.is_empty() {
                canvas.text(year_x + year_w / 2.0, text_y, entry.year, CELL.centered());
            }
            if !entry.month.is_empty() {
                canvas.text(month_x + month_w / 2.0, text_y, entry.month, CELL.centered());
            }
            canvas.text(desc_x + DESCRIPTION_INSET, text_y, entry.description, CELL);
        }

        row_top = row_bottom;
    }

    GridOutcome {
        bottom: row_top,
        rows_filled: entries.len().min(spec.capacity),
        rows_dropped: entries.len().saturating_sub(spec.capacity),
    }
}
