// Résumé layout engine: entry parsing, fixed-count wrapping, table grids and the
// page controller that sequences them per template.
// Everything here is synchronous and draws through the `DrawingBackend` trait only.

pub mod canvas;
pub mod entry;
pub mod grid;
pub mod page;
pub mod profile;
pub mod template;
pub mod wrap;

/// Horizontal centre of an A4 page, in millimetres.
pub const PAGE_CENTER_X: f32 = crate::render::backend::PAGE_WIDTH_MM / 2.0;

// Re-export the public API consumed by the resume generator.
pub use page::{lay_out, LayoutReport, SheetContent};
pub use template::{SectionId, Template, Variant};
