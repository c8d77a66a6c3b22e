//! Japanese résumé (履歴書) renderer.
//!
//! `layout` is the engine: entry parsing, fixed-count wrapping, table grids and the
//! page controller. `render` holds the drawing backends it targets. `resume` binds
//! request models to templates and exposes [`generate_resume_pdf`], and the HTTP
//! surface in `routes` serves it.

pub mod config;
pub mod errors;
pub mod layout;
pub mod render;
pub mod resume;
pub mod routes;
pub mod state;

pub use resume::generator::generate_resume_pdf;
