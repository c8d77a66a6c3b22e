//! Résumé generation — runs one render end to end and reports the result as text.
//!
//! Flow: resolve destination → lay out per the request's template → finalize the
//! document → status message. Only finalization can fail, and that failure is folded
//! into the message rather than returned as an error.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{error, info};

use crate::layout::lay_out;
use crate::render::{register_fonts, CidFontFace, DrawingBackend, PdfBackend};
use crate::resume::models::ResumeRequest;

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated { path: PathBuf },
    Failed { error: String },
}

impl GenerationOutcome {
    /// Human-readable status line returned to the caller.
    pub fn message(&self) -> String {
        match self {
            GenerationOutcome::Generated { path } => {
                format!("履歴書PDFを生成しました。\n保存先: {}", path.display())
            }
            GenerationOutcome::Failed { error } => {
                format!("PDFの保存中にエラーが発生しました: {error}")
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            GenerationOutcome::Generated { .. } => "generated",
            GenerationOutcome::Failed { .. } => "failed",
        }
    }
}

/// Renders `request` to a PDF under `output_dir` and returns the status message.
///
/// Never fails: a save error comes back as the failure message.
pub fn generate_resume_pdf<R: ResumeRequest + ?Sized>(request: &R, output_dir: &Path) -> String {
    let face = register_fonts();
    render_resume_pdf(request, face, output_dir, Local::now().date_naive()).message()
}

/// Renders onto a fresh [`PdfBackend`].
pub fn render_resume_pdf<R: ResumeRequest + ?Sized>(
    request: &R,
    face: &'static CidFontFace,
    output_dir: &Path,
    issued_on: NaiveDate,
) -> GenerationOutcome {
    let mut backend = PdfBackend::new();
    render_with(&mut backend, request, face, output_dir, issued_on)
}

/// Lays out and finalizes one document on any backend.
pub fn render_with<B: DrawingBackend, R: ResumeRequest + ?Sized>(
    backend: &mut B,
    request: &R,
    face: &'static CidFontFace,
    output_dir: &Path,
    issued_on: NaiveDate,
) -> GenerationOutcome {
    let destination = output_dir.join(request.output_filename());
    let template = request.variant().template();

    let report = lay_out(backend, face, template, request, issued_on);

    match backend.finish(&destination) {
        Ok(()) => {
            let path = std::path::absolute(&destination).unwrap_or(destination);
            info!(
                variant = ?template.variant,
                pages = report.pages,
                path = %path.display(),
                "Resume PDF generated"
            );
            GenerationOutcome::Generated { path }
        }
        Err(e) => {
            error!(path = %destination.display(), error = %e, "Resume PDF save failed");
            GenerationOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
