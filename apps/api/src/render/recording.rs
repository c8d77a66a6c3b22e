//! In-memory backend that records every primitive, for layout tests.

use std::path::{Path, PathBuf};

use crate::errors::RenderError;
use crate::render::backend::{Align, DrawingBackend};
use crate::render::fonts::CidFontFace;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        page: usize,
        x: f32,
        y: f32,
        text: String,
        size: f32,
        align: Align,
        baseline_factor: f32,
    },
    Rect {
        page: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    NewPage,
    Finish(PathBuf),
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub ops: Vec<DrawOp>,
    page: usize,
    font_size: f32,
    fail_on_finish: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `finish` reports a permission error.
    pub fn failing() -> Self {
        Self {
            fail_on_finish: true,
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first text op whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text: t, .. } if t == text))
    }

    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }
}

impl DrawingBackend for RecordingBackend {
    fn set_font(&mut self, _face: &'static CidFontFace, size_pt: f32) {
        self.font_size = size_pt;
    }

    fn draw_text(&mut self, x_mm: f32, y_mm: f32, text: &str, align: Align, baseline_factor: f32) {
        self.ops.push(DrawOp::Text {
            page: self.page,
            x: x_mm,
            y: y_mm,
            text: text.to_string(),
            size: self.font_size,
            align,
            baseline_factor,
        });
    }

    fn stroke_rect(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        self.ops.push(DrawOp::Rect {
            page: self.page,
            x: x_mm,
            y: y_mm,
            width: width_mm,
            height: height_mm,
        });
    }

    fn new_page(&mut self) {
        self.page += 1;
        self.ops.push(DrawOp::NewPage);
    }

    fn finish(&mut self, destination: &Path) -> Result<(), RenderError> {
        if self.ops.iter().any(|op| matches!(op, DrawOp::Finish(_))) {
            return Err(RenderError::Finished);
        }
        if self.fail_on_finish {
            return Err(RenderError::Save {
                path: destination.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
            });
        }
        self.ops.push(DrawOp::Finish(destination.to_path_buf()));
        Ok(())
    }
}
