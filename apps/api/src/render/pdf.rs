//! PDF implementation of [`DrawingBackend`] on top of `pdf-writer`.
//!
//! Pages accumulate as content streams in memory; nothing touches the filesystem
//! until [`DrawingBackend::finish`], which assembles the object graph and writes
//! the file in one go.

use std::path::Path;

use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use tracing::{debug, warn};

use crate::errors::RenderError;
use crate::render::backend::{mm_to_pt, Align, DrawingBackend, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::render::fonts::CidFontFace;

const LINE_WIDTH_PT: f32 = 1.0;
const DEFLATE_LEVEL: u8 = 6;

/// In-memory PDF document under construction.
pub struct PdfBackend {
    finished_pages: Vec<Content>,
    current: Content,
    /// Faces referenced so far; index `i` is resource name `F{i+1}`.
    faces: Vec<&'static CidFontFace>,
    active_face: Option<usize>,
    font_size: f32,
    finished: bool,
}

impl PdfBackend {
    pub fn new() -> Self {
        Self {
            finished_pages: Vec::new(),
            current: fresh_page(),
            faces: Vec::new(),
            active_face: None,
            font_size: 10.0,
            finished: false,
        }
    }

    /// Assembles the complete document. Consumes the page buffers.
    fn build(&mut self) -> Vec<u8> {
        let mut pages = std::mem::take(&mut self.finished_pages);
        pages.push(std::mem::replace(&mut self.current, Content::new()));

        let mut next_id = 1;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let mut pdf = Pdf::new();
        let catalog_id = alloc();
        let pages_id = alloc();

        let font_refs: Vec<(String, Ref)> = self
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let type0_id = alloc();
                let cid_id = alloc();
                let descriptor_id = alloc();
                write_face(&mut pdf, face, type0_id, cid_id, descriptor_id);
                (format!("F{}", i + 1), type0_id)
            })
            .collect();

        let n = pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, content) in pages.into_iter().enumerate() {
            let raw = content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), DEFLATE_LEVEL);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        let media_box = Rect::new(0.0, 0.0, mm_to_pt(PAGE_WIDTH_MM), mm_to_pt(PAGE_HEIGHT_MM));
        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(media_box)
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (name, font_ref) in &font_refs {
                fonts.pair(Name(name.as_bytes()), *font_ref);
            }
        }

        debug!(pages = n, fonts = font_refs.len(), "Assembled PDF document");
        pdf.finish()
    }
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingBackend for PdfBackend {
    fn set_font(&mut self, face: &'static CidFontFace, size_pt: f32) {
        let index = match self.faces.iter().position(|f| std::ptr::eq(*f, face)) {
            Some(i) => i,
            None => {
                self.faces.push(face);
                self.faces.len() - 1
            }
        };
        self.active_face = Some(index);
        self.font_size = size_pt;
    }

    fn draw_text(&mut self, x_mm: f32, y_mm: f32, text: &str, align: Align, baseline_factor: f32) {
        let Some(index) = self.active_face else {
            warn!("draw_text called before set_font; run dropped");
            return;
        };
        let face = self.faces[index];
        let size = self.font_size;

        let width = face.measure_str(text, size);
        let anchor = mm_to_pt(x_mm);
        let x = match align {
            Align::Left => anchor,
            Align::Center => anchor - width / 2.0,
            Align::Right => anchor - width,
        };
        let y = mm_to_pt(y_mm) - size * baseline_factor;

        let resource = format!("F{}", index + 1);
        let encoded = face.encode_str(text);
        self.current
            .begin_text()
            .set_font(Name(resource.as_bytes()), size)
            .next_line(x, y)
            .show(Str(&encoded))
            .end_text();
    }

    fn stroke_rect(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        self.current.rect(
            mm_to_pt(x_mm),
            mm_to_pt(y_mm),
            mm_to_pt(width_mm),
            mm_to_pt(height_mm),
        );
        self.current.stroke();
    }

    fn new_page(&mut self) {
        let done = std::mem::replace(&mut self.current, fresh_page());
        self.finished_pages.push(done);
    }

    fn finish(&mut self, destination: &Path) -> Result<(), RenderError> {
        if self.finished {
            return Err(RenderError::Finished);
        }
        self.finished = true;

        let bytes = self.build();
        std::fs::write(destination, &bytes).map_err(|source| RenderError::Save {
            path: destination.to_path_buf(),
            source,
        })?;

        debug!(path = %destination.display(), bytes = bytes.len(), "PDF written");
        Ok(())
    }
}

fn fresh_page() -> Content {
    let mut content = Content::new();
    content.set_line_width(LINE_WIDTH_PT);
    content
}

/// Writes the Type0 font, its descendant CID font and the font descriptor.
fn write_face(pdf: &mut Pdf, face: &CidFontFace, type0_id: Ref, cid_id: Ref, descriptor_id: Ref) {
    let composite_name = format!("{}-{}", face.base_font, face.cmap);
    pdf.type0_font(type0_id)
        .base_font(Name(composite_name.as_bytes()))
        .encoding_predefined(Name(face.cmap.as_bytes()))
        .descendant_font(cid_id);

    let mut cid = pdf.cid_font(cid_id);
    cid.subtype(CidFontType::Type0)
        .base_font(Name(face.base_font.as_bytes()))
        .system_info(SystemInfo {
            registry: Str(face.registry.as_bytes()),
            ordering: Str(face.ordering.as_bytes()),
            supplement: face.supplement,
        })
        .font_descriptor(descriptor_id)
        .default_width(face.full_width as f32);
    let (first, last) = face.half_width_cids;
    cid.widths().same(first, last, face.half_width as f32);
    drop(cid);

    let [llx, lly, urx, ury] = face.bbox;
    pdf.font_descriptor(descriptor_id)
        .name(Name(face.base_font.as_bytes()))
        .flags(FontFlags::SYMBOLIC)
        .bbox(Rect::new(llx, lly, urx, ury))
        .italic_angle(0.0)
        .ascent(face.ascent)
        .descent(face.descent)
        .cap_height(face.cap_height)
        .stem_v(face.stem_v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::register_fonts;

    fn sample_document() -> PdfBackend {
        let mut backend = PdfBackend::new();
        backend.set_font(register_fonts(), 10.0);
        backend.draw_text(105.0, 280.0, "履 歴 書", Align::Center, 0.35);
        backend.stroke_rect(15.0, 245.0, 130.0, 25.0);
        backend
    }

    #[test]
    fn test_finish_writes_pdf_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut backend = sample_document();

        backend.finish(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"), "missing PDF header");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("HeiseiKakuGo-W5"));
        assert!(text.contains("UniJIS-UCS2-HW-H"));
    }

    #[test]
    fn test_page_break_yields_two_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.pdf");
        let mut backend = sample_document();
        backend.new_page();
        backend.stroke_rect(15.0, 100.0, 170.0, 80.0);

        backend.finish(&path).unwrap();

        let text = String::from_utf8_lossy(&std::fs::read(&path).unwrap()).into_owned();
        assert!(text.contains("/Count 2"), "expected two pages in page tree");
    }

    #[test]
    fn test_empty_document_is_one_blank_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        let mut backend = PdfBackend::new();

        backend.finish(&path).unwrap();

        let text = String::from_utf8_lossy(&std::fs::read(&path).unwrap()).into_owned();
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_finish_into_missing_directory_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("resume.pdf");
        let mut backend = sample_document();

        let err = backend.finish(&path).unwrap_err();

        assert!(matches!(err, RenderError::Save { .. }), "got {err:?}");
        assert!(!path.exists());
    }

    #[test]
    fn test_finish_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("once.pdf");
        let mut backend = sample_document();

        backend.finish(&path).unwrap();
        let err = backend.finish(&path).unwrap_err();

        assert!(matches!(err, RenderError::Finished));
    }
}
