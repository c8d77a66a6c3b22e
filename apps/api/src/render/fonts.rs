//! CJK font face used by every résumé page, plus its static advance-width table.
//!
//! The face is `HeiseiKakuGo-W5`, one of the Adobe-Japan1 CID fonts every PDF viewer
//! is expected to substitute, so nothing is embedded and no font file ships with the
//! service. Text is addressed through the predefined `UniJIS-UCS2-HW-H` CMap, which
//! maps ASCII onto the half-width CID range. Widths here mirror the `W` array the PDF
//! backend writes, so centred and right-aligned runs measure the same as they print.
//!
//! Registration is explicit: call [`register_fonts`] once at startup. Later calls are
//! no-ops that hand back the same face.

use std::sync::OnceLock;

use tracing::info;

// ────────────────────────────────────────────────────────────────────────────
// Font face
// ────────────────────────────────────────────────────────────────────────────

/// A non-embedded CID-keyed font addressed through a predefined Unicode CMap.
#[derive(Debug)]
pub struct CidFontFace {
    /// PostScript name of the descendant CID font.
    pub base_font: &'static str,
    /// Predefined CMap name (the Type0 encoding).
    pub cmap: &'static str,
    pub registry: &'static str,
    pub ordering: &'static str,
    pub supplement: i32,
    /// Inclusive CID range that prints at `half_width`.
    pub half_width_cids: (u16, u16),
    /// Advance widths in thousandths of an em.
    pub half_width: u16,
    pub full_width: u16,
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub stem_v: f32,
    /// Font bounding box `[llx, lly, urx, ury]` in glyph space.
    pub bbox: [f32; 4],
}

impl CidFontFace {
    /// Advance width of one character in thousandths of an em.
    ///
    /// Characters that the encoder drops (see [`CidFontFace::encode_str`]) measure zero.
    pub fn char_width(&self, c: char) -> u16 {
        if !is_encodable(c) {
            0
        } else if is_half_width(c) {
            self.half_width
        } else {
            self.full_width
        }
    }

    /// Measures the rendered width of a string in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size_pt / 1000.0
    }

    /// Encodes a string for the UCS-2 CMap: big-endian code units, one per character.
    ///
    /// Control characters (including the `\n` a wrapped line may end with) and
    /// characters outside the Basic Multilingual Plane have no CID and are skipped.
    pub fn encode_str(&self, s: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(s.len() * 2);
        for c in s.chars().filter(|c| is_encodable(*c)) {
            bytes.extend_from_slice(&(c as u16).to_be_bytes());
        }
        bytes
    }
}

fn is_encodable(c: char) -> bool {
    !c.is_control() && (c as u32) <= 0xFFFF
}

/// ASCII printables and half-width katakana land on half-width CIDs under `-HW-H`.
fn is_half_width(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{7E}' | '\u{FF61}'..='\u{FF9F}')
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// Heisei Kaku Gothic W5 — the standard Japanese gothic CID font.
static HEISEI_KAKU_GO_W5: CidFontFace = CidFontFace {
    base_font: "HeiseiKakuGo-W5",
    cmap: "UniJIS-UCS2-HW-H",
    registry: "Adobe",
    ordering: "Japan1",
    supplement: 2,
    half_width_cids: (231, 632),
    half_width: 500,
    full_width: 1000,
    ascent: 752.0,
    descent: -221.0,
    cap_height: 737.0,
    stem_v: 114.0,
    bbox: [-92.0, -250.0, 1010.0, 922.0],
};

static REGISTERED: OnceLock<&'static CidFontFace> = OnceLock::new();

/// Registers the process-wide résumé font and returns it.
///
/// Idempotent: only the first call logs; every call returns the same face.
pub fn register_fonts() -> &'static CidFontFace {
    REGISTERED.get_or_init(|| {
        info!(
            font = HEISEI_KAKU_GO_W5.base_font,
            cmap = HEISEI_KAKU_GO_W5.cmap,
            "Registered CJK font"
        );
        &HEISEI_KAKU_GO_W5
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
