#![forbid(unsafe_code)]

//! Layout configuration and tuning constants.

use crate::geometry::Point;
use crate::glyph::GlyphClass;

/// Default circle radius in layout units.
pub const DEFAULT_RADIUS: f64 = 130.0;
/// Default nominal glyph size in layout units.
pub const DEFAULT_FONT_SIZE: f64 = 26.0;
/// Default linear spacing between adjacent glyphs along the arc.
pub const DEFAULT_LETTER_SPACING: f64 = 5.0;
/// Fraction of the wide width that a narrow glyph occupies.
///
/// Empirical tuning constant carried over from the original heuristic; no
/// derivation beyond "Latin letters and digits are visibly narrower".
pub const DEFAULT_NARROW_WIDTH_FACTOR: f64 = 0.65;
/// Fraction of the letter spacing applied after a narrow glyph.
///
/// Narrow glyphs need less trailing gap than wide ones at the same linear
/// spacing value to keep perceived spacing roughly uniform.
pub const DEFAULT_NARROW_SPACING_FACTOR: f64 = 0.5;

/// Configuration for one circular layout call.
///
/// Immutable once built; construct a fresh one per call. All distances are
/// in layout units, all derived widths in radians.
///
/// # Example
/// ```
/// use arctext_core::{LayoutConfig, Point};
///
/// let config = LayoutConfig::new(0.0, Point::new(100.0, 100.0))
///     .radius(200.0)
///     .font_size(32.0);
/// assert_eq!(config.radius, 200.0);
/// assert_eq!(config.letter_spacing, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Circle radius in layout units.
    pub radius: f64,
    /// Nominal glyph size in layout units.
    pub font_size: f64,
    /// Linear spacing between adjacent glyphs along the arc. Non-negative.
    pub letter_spacing: f64,
    /// Width fraction for narrow glyphs (see [`DEFAULT_NARROW_WIDTH_FACTOR`]).
    pub narrow_width_factor: f64,
    /// Spacing fraction after narrow glyphs (see [`DEFAULT_NARROW_SPACING_FACTOR`]).
    pub narrow_spacing_factor: f64,
    /// Circle center in the target coordinate space.
    pub center: Point,
}

impl LayoutConfig {
    /// Create a config with the given letter spacing and center, defaults
    /// for everything else.
    #[must_use]
    pub fn new(letter_spacing: f64, center: Point) -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing,
            narrow_width_factor: DEFAULT_NARROW_WIDTH_FACTOR,
            narrow_spacing_factor: DEFAULT_NARROW_SPACING_FACTOR,
            center,
        }
    }

    /// Set the circle radius.
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the nominal glyph size.
    #[must_use]
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the narrow glyph width fraction.
    #[must_use]
    pub fn narrow_width_factor(mut self, factor: f64) -> Self {
        self.narrow_width_factor = factor;
        self
    }

    /// Set the narrow glyph trailing spacing fraction.
    #[must_use]
    pub fn narrow_spacing_factor(mut self, factor: f64) -> Self {
        self.narrow_spacing_factor = factor;
        self
    }

    /// Angular width (radians) a glyph of the given class occupies.
    #[inline]
    #[must_use]
    pub fn angular_width(&self, class: GlyphClass) -> f64 {
        match class {
            GlyphClass::Wide => self.font_size / self.radius,
            GlyphClass::Narrow => self.font_size * self.narrow_width_factor / self.radius,
        }
    }

    /// Angular spacing (radians) inserted after a glyph of the given class.
    ///
    /// The engine omits this after the final glyph of a string.
    #[inline]
    #[must_use]
    pub fn angular_spacing(&self, class: GlyphClass) -> f64 {
        match class {
            GlyphClass::Wide => self.letter_spacing / self.radius,
            GlyphClass::Narrow => self.letter_spacing * self.narrow_spacing_factor / self.radius,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LETTER_SPACING, Point::ORIGIN)
    }
}
