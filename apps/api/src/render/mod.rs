// Drawing backends for the résumé layout engine.
// The layout code depends only on the `DrawingBackend` trait; `PdfBackend` is the
// production surface, `RecordingBackend` captures primitives for tests.

pub mod backend;
pub mod fonts;
pub mod pdf;
#[cfg(test)]
pub mod recording;

pub use backend::{Align, DrawingBackend};
pub use fonts::{register_fonts, CidFontFace};
pub use pdf::PdfBackend;
