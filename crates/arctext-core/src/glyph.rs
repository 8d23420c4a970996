#![forbid(unsafe_code)]

//! Glyph classification for the two-class width model.
//!
//! The circular layout engine does not consult real font metrics. Instead
//! every glyph falls into one of two width classes: ASCII letters and digits
//! are narrow, everything else (CJK, punctuation, whitespace, emoji, and any
//! multi-codepoint grapheme cluster) is wide. The class drives both the
//! glyph's angular width and the spacing inserted after it.
//!
//! Classification is a standalone predicate so it can be tested and swapped
//! (for example for a script-aware width table) without touching the
//! placement math.

use unicode_segmentation::UnicodeSegmentation;

/// Width class of a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Full-width treatment: CJK, punctuation, whitespace, emoji.
    Wide,
    /// Reduced-width treatment: ASCII letters and digits.
    Narrow,
}

impl GlyphClass {
    /// Classify one glyph (a grapheme cluster).
    #[inline]
    #[must_use]
    pub fn of(glyph: &str) -> Self {
        if is_narrow_glyph(glyph) {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Whether a glyph gets the narrow width treatment.
///
/// True iff the glyph is exactly one character matching `[0-9a-zA-Z]`.
#[inline]
#[must_use]
pub fn is_narrow_glyph(glyph: &str) -> bool {
    let mut chars = glyph.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_alphanumeric()
    )
}

/// Iterate the glyphs (extended grapheme clusters) of a string.
///
/// This is the unit the layout engine places: a ZWJ emoji sequence or a
/// combining-accent cluster is one glyph, never split.
pub fn glyphs(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}
