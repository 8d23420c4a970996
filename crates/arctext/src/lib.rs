#![forbid(unsafe_code)]

//! arctext public facade crate.
//!
//! Circular text layout: arrange the glyphs of a string evenly around a
//! circle so the string is centered on the top and reads clockwise. This
//! crate re-exports the engine and primitives and adds the orchestration
//! layer: request/response types, markdown table batching, and the
//! [`TextSurface`] capability for applying placements to a real surface.
//!
//! # Example
//! ```
//! use arctext::{GenerateRequest, Point, generate};
//!
//! let request = GenerateRequest::new("Hello 世界");
//! let result = generate(&request, Point::ORIGIN);
//! assert_eq!(result.item_count(), 1);
//! assert_eq!(result.summary(), "generated 1 item(s)");
//!
//! // A markdown table becomes one circular text per cell.
//! let request = GenerateRequest::new("| H |\n| --- |\n| a |\n| b |");
//! let result = generate(&request, Point::ORIGIN);
//! assert_eq!(result.item_count(), 2);
//! ```

pub mod generate;
pub mod surface;

// --- Core re-exports -------------------------------------------------------

pub use arctext_core::{
    DEFAULT_FONT_SIZE, DEFAULT_LETTER_SPACING, DEFAULT_NARROW_SPACING_FACTOR,
    DEFAULT_NARROW_WIDTH_FACTOR, DEFAULT_RADIUS, GlyphClass, LayoutConfig, Point, glyphs,
    is_narrow_glyph,
};

// --- Engine re-exports -----------------------------------------------------

pub use arctext_layout::{Placement, layout_text, layout_with_config, measure_arc};

// --- Markdown re-exports ---------------------------------------------------

pub use arctext_markdown::extract_table_cells;

// --- Orchestration ---------------------------------------------------------

pub use generate::{
    GenerateRequest, GenerateResult, GeneratedItem, ITEM_GAP, ITEM_WIDTH_ESTIMATE, generate,
    row_item_centers,
};
pub use surface::{BatchOutcome, ItemFailure, SurfaceError, TextSurface, apply, apply_batch};
