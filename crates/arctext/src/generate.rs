#![forbid(unsafe_code)]

//! Request/response orchestration.
//!
//! [`generate`] is the transport-agnostic entry point: it decides whether
//! an input is a markdown table (one circular text per cell, laid out in a
//! row) or a single text item, invokes the layout engine per item, and
//! returns the full placement plan plus a count suitable for user-facing
//! status reporting. Each engine call is hermetic; row placement of the
//! items is handled here, not in the engine.

use arctext_core::{DEFAULT_LETTER_SPACING, LayoutConfig, Point};
use arctext_layout::{Placement, layout_with_config};
use arctext_markdown::extract_table_cells;
use tracing::debug;

/// Estimated horizontal footprint of one generated item, layout units.
pub const ITEM_WIDTH_ESTIMATE: f64 = 280.0;
/// Horizontal gap between adjacent items in a row.
pub const ITEM_GAP: f64 = 50.0;

/// A generation request: raw input text plus optional letter spacing.
///
/// `letter_spacing` of `None` means "use the default" (5.0); the default is
/// applied here, not in the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Raw input text; may be a markdown table.
    pub text: String,
    /// Linear spacing between adjacent glyphs. Non-negative when present.
    pub letter_spacing: Option<f64>,
}

impl GenerateRequest {
    /// Create a request with default letter spacing.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            letter_spacing: None,
        }
    }

    /// Set an explicit letter spacing.
    #[must_use]
    pub fn letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }
}

/// One logical item of a generation: the source string, the circle center
/// it was laid out around, and its placements.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedItem {
    /// The text this item was generated from (a cell, or the whole input).
    pub source: String,
    /// Circle center for this item.
    pub center: Point,
    /// Ordered placements; empty when the source trimmed to nothing.
    pub placements: Vec<Placement>,
}

/// The full outcome of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Config shared by all items (centers differ per item).
    pub config: LayoutConfig,
    /// Items in row order, left to right.
    pub items: Vec<GeneratedItem>,
}

impl GenerateResult {
    /// Number of items that produced at least one placement.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| !item.placements.is_empty())
            .count()
    }

    /// True when nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Human-readable outcome for status reporting.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.item_count() {
            0 => "nothing generated".to_string(),
            n => format!("generated {n} item(s)"),
        }
    }
}

/// Centers for `count` items laid out left-to-right in a row centered on
/// `origin`.
///
/// Items are spaced [`ITEM_WIDTH_ESTIMATE`] + [`ITEM_GAP`] apart and the
/// whole row is centered horizontally on the origin; every item shares the
/// origin's y.
#[must_use]
pub fn row_item_centers(count: usize, origin: Point) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let total_width = count as f64 * ITEM_WIDTH_ESTIMATE + (count - 1) as f64 * ITEM_GAP;
    let mut x = origin.x - total_width / 2.0 + ITEM_WIDTH_ESTIMATE / 2.0;
    (0..count)
        .map(|_| {
            let center = Point::new(x, origin.y);
            x += ITEM_WIDTH_ESTIMATE + ITEM_GAP;
            center
        })
        .collect()
}

/// Produce the placement plan for a request, centered on `origin`.
///
/// If the input is a markdown table with at least one cell, each cell
/// becomes one item in a row centered on the origin; otherwise the whole
/// input is a single item at the origin. Empty input yields an empty plan.
#[must_use]
pub fn generate(request: &GenerateRequest, origin: Point) -> GenerateResult {
    let letter_spacing = request.letter_spacing.unwrap_or(DEFAULT_LETTER_SPACING);
    let config = LayoutConfig::new(letter_spacing, origin);

    let cells = extract_table_cells(&request.text).unwrap_or_default();
    if !cells.is_empty() {
        debug!(cells = cells.len(), "generating from table cells");
        let centers = row_item_centers(cells.len(), origin);
        let items = cells
            .into_iter()
            .zip(centers)
            .map(|(cell, center)| {
                let item_config = LayoutConfig { center, ..config };
                let placements = layout_with_config(&cell, &item_config);
                GeneratedItem {
                    source: cell,
                    center,
                    placements,
                }
            })
            .collect();
        return GenerateResult { config, items };
    }

    let trimmed = request.text.trim();
    if trimmed.is_empty() {
        return GenerateResult {
            config,
            items: Vec::new(),
        };
    }

    debug!("generating from whole text");
    let placements = layout_with_config(trimmed, &config);
    GenerateResult {
        config,
        items: vec![GeneratedItem {
            source: trimmed.to_string(),
            center: origin,
            placements,
        }],
    }
}
