//! Template descriptors — the ordered block lists that define each résumé variant.
//!
//! One engine serves both variants: the controller walks a descriptor list and each
//! block carries its own geometry. All values are millimetres.

use serde::{Deserialize, Serialize};

/// Which caller-supplied field a block draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Education,
    Work,
    Licenses,
    /// Education and work merged into one table.
    History,
    Motivation,
}

/// A repeating year / month / description table.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub id: SectionId,
    /// Caption above the table and header label of the description column.
    pub title: &'static str,
    pub x: f32,
    /// Distance from the cursor down to the header row's top edge.
    pub gap: f32,
    /// Caption baseline sits this far above the header row's top edge.
    pub caption_rise: f32,
    pub capacity: usize,
}

/// A bordered free-text box filled by the fixed-count wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxSpec {
    pub id: SectionId,
    pub label: &'static str,
    pub x: f32,
    pub width: f32,
    pub gap: f32,
    pub height: f32,
    pub char_limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Title, date stamp, photo box and the identity/contact rows.
    Profile,
    Grid(GridSpec),
    /// Ends the page; the cursor restarts at `top` on the next one.
    PageBreak { top: f32 },
    TextBox(TextBoxSpec),
}

/// The two supported layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Separate education, work and license tables over two pages.
    Standard,
    /// One merged history table on a single page.
    Compact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub variant: Variant,
    pub blocks: &'static [Block],
}

const TABLE_X: f32 = 15.0;

static STANDARD_BLOCKS: [Block; 6] = [
    Block::Profile,
    Block::Grid(GridSpec {
        id: SectionId::Education,
        title: "学歴",
        x: TABLE_X,
        gap: 5.0,
        caption_rise: 2.0,
        capacity: 10,
    }),
    Block::Grid(GridSpec {
        id: SectionId::Work,
        title: "職歴",
        x: TABLE_X,
        gap: 10.0,
        caption_rise: 2.0,
        capacity: 8,
    }),
    Block::PageBreak { top: 280.0 },
    Block::Grid(GridSpec {
        id: SectionId::Licenses,
        title: "免許・資格",
        x: TABLE_X,
        gap: 5.0,
        caption_rise: 5.0,
        capacity: 10,
    }),
    Block::TextBox(TextBoxSpec {
        id: SectionId::Motivation,
        label: MOTIVATION_LABEL,
        x: TABLE_X,
        width: 170.0,
        gap: 10.0,
        height: 80.0,
        char_limit: 55,
    }),
];

static COMPACT_BLOCKS: [Block; 3] = [
    Block::Profile,
    Block::Grid(GridSpec {
        id: SectionId::History,
        title: "学歴・職歴",
        x: TABLE_X,
        gap: 5.0,
        caption_rise: 2.0,
        capacity: 18,
    }),
    Block::TextBox(TextBoxSpec {
        id: SectionId::Motivation,
        label: MOTIVATION_LABEL,
        x: TABLE_X,
        width: 170.0,
        gap: 10.0,
        height: 35.0,
        char_limit: 50,
    }),
];

const MOTIVATION_LABEL: &str = "志望動機・自己PR・本人希望記入欄など";

pub static STANDARD: Template = Template {
    variant: Variant::Standard,
    blocks: &STANDARD_BLOCKS,
};

pub static COMPACT: Template = Template {
    variant: Variant::Compact,
    blocks: &COMPACT_BLOCKS,
};

impl Variant {
    pub fn template(self) -> &'static Template {
        match self {
            Variant::Standard => &STANDARD,
            Variant::Compact => &COMPACT,
        }
    }
}

impl Template {
    pub fn grids(&self) -> impl Iterator<Item = &GridSpec> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Grid(spec) => Some(spec),
            _ => None,
        })
    }

    pub fn page_count(&self) -> usize {
        1 + self
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak { .. }))
            .count()
    }
}
