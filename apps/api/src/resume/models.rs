use serde::{Deserialize, Serialize};

use crate::layout::{SectionId, SheetContent, Variant};

pub const DEFAULT_OUTPUT_FILENAME: &str = "resume.pdf";

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

/// Identity and contact fields shared by both variants. Rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    pub name: String,
    /// Phonetic reading of the name (ふりがな).
    pub kana: String,
    pub gender: String,
    pub birth_date: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// A render request: the sheet content plus which template and file to produce.
pub trait ResumeRequest: SheetContent {
    fn variant(&self) -> Variant;
    fn output_filename(&self) -> &str;
}

/// Two-page layout with separate education, work and license tables.
///
/// Each history line is `"<year> <month> <description>"`; other shapes render as
/// description-only rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardResumeRequest {
    #[serde(flatten)]
    pub basic: BasicInfo,
    #[serde(default)]
    pub education_history: Vec<String>,
    #[serde(default)]
    pub work_history: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde(default)]
    pub motivation: String,
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
}

/// Single-page layout with education and work merged into one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactResumeRequest {
    #[serde(flatten)]
    pub basic: BasicInfo,
    #[serde(default)]
    pub education_work_history: Vec<String>,
    #[serde(default)]
    pub motivation: String,
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
}

impl SheetContent for StandardResumeRequest {
    fn basic(&self) -> &BasicInfo {
        &self.basic
    }

    fn entries(&self, id: SectionId) -> &[String] {
        match id {
            SectionId::Education => &self.education_history,
            SectionId::Work => &self.work_history,
            SectionId::Licenses => &self.licenses,
            SectionId::History | SectionId::Motivation => &[],
        }
    }

    fn free_text(&self, id: SectionId) -> &str {
        match id {
            SectionId::Motivation => &self.motivation,
            _ => "",
        }
    }
}

impl ResumeRequest for StandardResumeRequest {
    fn variant(&self) -> Variant {
        Variant::Standard
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }
}

impl SheetContent for CompactResumeRequest {
    fn basic(&self) -> &BasicInfo {
        &self.basic
    }

    fn entries(&self, id: SectionId) -> &[String] {
        match id {
            SectionId::History => &self.education_work_history,
            _ => &[],
        }
    }

    fn free_text(&self, id: SectionId) -> &str {
        match id {
            SectionId::Motivation => &self.motivation,
            _ => "",
        }
    }
}

impl ResumeRequest for CompactResumeRequest {
    fn variant(&self) -> Variant {
        Variant::Compact
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }
}
