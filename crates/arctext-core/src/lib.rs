#![forbid(unsafe_code)]

//! Core primitives for arctext.
//!
//! This crate provides the pieces shared by the layout engine and its
//! callers:
//!
//! - [`Point`] - a 2D point in screen-space coordinates (y grows downward)
//! - [`GlyphClass`] - the two-class width model (wide vs narrow glyphs)
//! - [`LayoutConfig`] - circle radius, glyph size, spacing, and tuning
//!   constants for one layout call
//!
//! # Example
//! ```
//! use arctext_core::{GlyphClass, LayoutConfig, Point, is_narrow_glyph};
//!
//! // Latin letters and digits are narrow; everything else is wide.
//! assert!(is_narrow_glyph("A"));
//! assert!(is_narrow_glyph("7"));
//! assert_eq!(GlyphClass::of("文"), GlyphClass::Wide);
//! assert_eq!(GlyphClass::of("!"), GlyphClass::Wide);
//!
//! // Configs are cheap, copyable, and built per call.
//! let config = LayoutConfig::new(5.0, Point::ORIGIN);
//! assert_eq!(config.radius, 130.0);
//! assert!(config.angular_width(GlyphClass::Narrow) < config.angular_width(GlyphClass::Wide));
//! ```

pub mod config;
pub mod geometry;
pub mod glyph;

pub use config::{
    DEFAULT_FONT_SIZE, DEFAULT_LETTER_SPACING, DEFAULT_NARROW_SPACING_FACTOR,
    DEFAULT_NARROW_WIDTH_FACTOR, DEFAULT_RADIUS, LayoutConfig,
};
pub use geometry::Point;
pub use glyph::{GlyphClass, glyphs, is_narrow_glyph};
