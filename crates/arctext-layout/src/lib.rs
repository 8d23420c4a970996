#![forbid(unsafe_code)]

//! Circular text layout.
//!
//! Given a string and a [`LayoutConfig`], compute one [`Placement`] per
//! glyph so that the string reads left-to-right (clockwise) along a circle
//! and the whole string is centered on the top of the circle.
//!
//! The engine is a total, pure function: no host, no rendering, no hidden
//! state. Applying the placements to an actual surface is the caller's job.
//!
//! # Algorithm
//!
//! Two passes over the glyphs of the trimmed input:
//!
//! 1. *Measure*: sum each glyph's angular width plus its trailing spacing
//!    (none after the last glyph) into the total arc the string occupies.
//!    Widths come from the two-class model in [`arctext_core::glyph`].
//! 2. *Place*: start the first glyph's leading edge at
//!    `-PI/2 - total_arc / 2`, so the arc's midpoint sits exactly at the top
//!    of the circle, then walk the glyphs assigning each the center of its
//!    slot and advancing by width plus trailing spacing.
//!
//! # Example
//! ```
//! use arctext_core::Point;
//! use arctext_layout::layout_text;
//!
//! let records = layout_text("ABC", 5.0, Point::ORIGIN);
//! assert_eq!(records.len(), 3);
//! // Input order, clockwise.
//! assert!(records[0].angle < records[1].angle);
//! assert!(records[1].angle < records[2].angle);
//!
//! // Empty input is a zero-result outcome, not an error.
//! assert!(layout_text("   ", 5.0, Point::ORIGIN).is_empty());
//! ```

use std::f64::consts::FRAC_PI_2;

use arctext_core::{GlyphClass, LayoutConfig, Point, glyphs};
use tracing::trace;

/// One glyph's computed slot on the circle.
///
/// The sole output unit of the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The glyph (one extended grapheme cluster).
    pub glyph: String,
    /// Ordinal of the glyph in the trimmed input.
    pub index: usize,
    /// Center angle of the glyph's slot, radians. 0 is the positive x-axis,
    /// increasing clockwise in screen space.
    pub angle: f64,
    /// `center + radius * (cos angle, sin angle)`.
    pub position: Point,
    /// Rotation so the glyph's "up" points outward from the circle, tangent
    /// to the arc: `-(angle_degrees + 90)`. Zero at the top of the circle.
    pub rotation_degrees: f64,
}

/// Lay out text on a circle with the given letter spacing and center.
///
/// Convenience wrapper around [`layout_with_config`] using default radius
/// and font size. `letter_spacing` must be non-negative.
#[must_use]
pub fn layout_text(text: &str, letter_spacing: f64, center: Point) -> Vec<Placement> {
    layout_with_config(text, &LayoutConfig::new(letter_spacing, center))
}

/// Lay out text on a circle with full configuration.
///
/// Returns one [`Placement`] per glyph of the trimmed input, in input
/// order with strictly increasing angles. Empty or whitespace-only input
/// yields an empty Vec. Output is bit-reproducible for identical inputs.
#[must_use]
pub fn layout_with_config(text: &str, config: &LayoutConfig) -> Vec<Placement> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let items: Vec<&str> = glyphs(trimmed).collect();
    let total_arc = arc_of(&items, config);
    let mut leading_edge = -FRAC_PI_2 - total_arc / 2.0;
    trace!(
        glyph_count = items.len(),
        total_arc, "placing text on circle"
    );

    let mut records = Vec::with_capacity(items.len());
    for (index, glyph) in items.iter().enumerate() {
        let class = GlyphClass::of(glyph);
        let width = config.angular_width(class);
        let angle = leading_edge + width / 2.0;

        records.push(Placement {
            glyph: (*glyph).to_string(),
            index,
            angle,
            position: config.center.polar_offset(config.radius, angle),
            rotation_degrees: -(angle.to_degrees() + 90.0),
        });

        leading_edge += width;
        if index + 1 < items.len() {
            leading_edge += config.angular_spacing(class);
        }
    }
    records
}

/// Total arc (radians) the trimmed text will occupy.
///
/// The pre-measurement pass of the engine, exposed for callers that need
/// the extent without the placements.
#[must_use]
pub fn measure_arc(text: &str, config: &LayoutConfig) -> f64 {
    let items: Vec<&str> = glyphs(text.trim()).collect();
    arc_of(&items, config)
}

fn arc_of(items: &[&str], config: &LayoutConfig) -> f64 {
    let mut total = 0.0;
    for (index, glyph) in items.iter().enumerate() {
        let class = GlyphClass::of(glyph);
        total += config.angular_width(class);
        if index + 1 < items.len() {
            total += config.angular_spacing(class);
        }
    }
    total
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn spacing_strategy() -> impl Strategy<Value = f64> {
        0.0f64..50.0
    }

    proptest! {
        #[test]
        fn narrow_strings_center_mean_is_top(
            s in "[a-zA-Z0-9]{1,40}",
            spacing in spacing_strategy(),
        ) {
            let records = layout_text(&s, spacing, Point::ORIGIN);
            let mean = (records.first().unwrap().angle + records.last().unwrap().angle) / 2.0;
            prop_assert!((mean + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        }

        #[test]
        fn record_count_matches_input_length(
            s in "[a-zA-Z0-9 ]{1,40}",
            spacing in spacing_strategy(),
        ) {
            let records = layout_text(&s, spacing, Point::ORIGIN);
            prop_assert_eq!(records.len(), s.trim().chars().count());
        }

        #[test]
        fn total_gap_equals_measured_arc(
            s in "[a-zA-Z0-9]{2,30}",
            spacing in spacing_strategy(),
        ) {
            let config = LayoutConfig::new(spacing, Point::ORIGIN);
            let records = layout_with_config(&s, &config);
            let first = records.first().unwrap();
            let last = records.last().unwrap();
            // All narrow: span = arc, endpoints are half a narrow width in.
            let narrow = config.angular_width(arctext_core::GlyphClass::Narrow);
            let span = last.angle - first.angle + narrow;
            prop_assert!((span - measure_arc(&s, &config)).abs() < 1e-9);
        }
    }
}
