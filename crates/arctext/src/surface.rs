#![forbid(unsafe_code)]

//! Applying placement plans to a text surface.
//!
//! The engine produces data; something still has to turn each
//! [`Placement`] into a visible text primitive. [`TextSurface`] is the
//! minimal capability a rendering collaborator must offer: acquire its
//! resources once per batch ([`TextSurface::prepare`], the only step that
//! may hit `ResourceUnavailable`, e.g. font loading) and instantiate one
//! positioned, rotated glyph ([`TextSurface::place_glyph`]).
//!
//! [`apply_batch`] contains failures per item: one failing item is recorded
//! and the remaining items are still attempted.

use std::fmt;

use arctext_core::LayoutConfig;
use arctext_layout::Placement;
use tracing::warn;

use crate::generate::{GenerateResult, GeneratedItem};

/// Errors a surface can raise while applying placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// A required resource (font, canvas, device) could not be acquired.
    ResourceUnavailable {
        /// What failed to load.
        resource: String,
    },
    /// The surface refused one placement.
    PlacementRejected {
        /// Index of the rejected placement within its item.
        index: usize,
        /// Surface-provided reason.
        reason: String,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { resource } => {
                write!(f, "resource unavailable: {resource}")
            }
            Self::PlacementRejected { index, reason } => {
                write!(f, "placement {index} rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Capability for instantiating placed glyphs on some rendering surface.
pub trait TextSurface {
    /// Acquire resources for a batch (fonts, styles). Called once before
    /// any glyph is placed. Default: nothing to acquire.
    fn prepare(&mut self, config: &LayoutConfig) -> Result<(), SurfaceError> {
        let _ = config;
        Ok(())
    }

    /// Create one text primitive at the placement's position and rotation.
    fn place_glyph(&mut self, placement: &Placement) -> Result<(), SurfaceError>;
}

/// Apply one item's placements to a surface.
///
/// Returns the number of glyphs placed. Fails fast within the item: the
/// surface is left with the glyphs placed before the failure.
pub fn apply<S: TextSurface + ?Sized>(
    item: &GeneratedItem,
    surface: &mut S,
) -> Result<usize, SurfaceError> {
    for placement in &item.placements {
        surface.place_glyph(placement)?;
    }
    Ok(item.placements.len())
}

/// One item's failure within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Index of the item in [`GenerateResult::items`].
    pub item: usize,
    /// The surface error that stopped it.
    pub error: SurfaceError,
}

/// Outcome of applying a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// Items fully applied with at least one glyph.
    pub applied: usize,
    /// Items that failed, in order. Failed items do not stop later ones.
    pub failures: Vec<ItemFailure>,
    /// Set when [`TextSurface::prepare`] failed; no items were attempted.
    pub setup_error: Option<SurfaceError>,
}

/// Apply every item of a generation result to a surface.
///
/// `prepare` runs once; if it fails the whole batch is reported as not
/// attempted via `setup_error`. After that, each item is applied
/// independently: a failure is recorded and the next item is still tried.
pub fn apply_batch<S: TextSurface + ?Sized>(
    result: &GenerateResult,
    surface: &mut S,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    if let Err(error) = surface.prepare(&result.config) {
        warn!(%error, "surface preparation failed");
        outcome.setup_error = Some(error);
        return outcome;
    }

    for (index, item) in result.items.iter().enumerate() {
        match apply(item, surface) {
            Ok(placed) if placed > 0 => outcome.applied += 1,
            Ok(_) => {}
            Err(error) => {
                warn!(item = index, %error, "item failed, continuing batch");
                outcome.failures.push(ItemFailure { item: index, error });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GenerateRequest, generate};
    use arctext_core::Point;

    /// Records every placed glyph.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        prepared: usize,
        glyphs: Vec<String>,
    }

    impl TextSurface for RecordingSurface {
        fn prepare(&mut self, _config: &LayoutConfig) -> Result<(), SurfaceError> {
            self.prepared += 1;
            Ok(())
        }

        fn place_glyph(&mut self, placement: &Placement) -> Result<(), SurfaceError> {
            self.glyphs.push(placement.glyph.clone());
            Ok(())
        }
    }

    /// Rejects a specific glyph, accepts everything else.
    #[derive(Debug)]
    struct RejectingSurface {
        poison: &'static str,
        glyphs: Vec<String>,
    }

    impl TextSurface for RejectingSurface {
        fn place_glyph(&mut self, placement: &Placement) -> Result<(), SurfaceError> {
            if placement.glyph == self.poison {
                return Err(SurfaceError::PlacementRejected {
                    index: placement.index,
                    reason: "unsupported glyph".to_string(),
                });
            }
            self.glyphs.push(placement.glyph.clone());
            Ok(())
        }
    }

    /// Fails resource acquisition, like a missing font.
    #[derive(Debug)]
    struct FontlessSurface;

    impl TextSurface for FontlessSurface {
        fn prepare(&mut self, _config: &LayoutConfig) -> Result<(), SurfaceError> {
            Err(SurfaceError::ResourceUnavailable {
                resource: "font Inter Regular".to_string(),
            })
        }

        fn place_glyph(&mut self, _placement: &Placement) -> Result<(), SurfaceError> {
            panic!("place_glyph must not run when prepare fails");
        }
    }

    const TABLE: &str = "| H |\n| --- |\n| ab |\n| xy |\n| pq |";

    #[test]
    fn apply_places_every_glyph_in_order() {
        let result = generate(&GenerateRequest::new("abc"), Point::ORIGIN);
        let mut surface = RecordingSurface::default();
        let placed = apply(&result.items[0], &mut surface).unwrap();
        assert_eq!(placed, 3);
        assert_eq!(surface.glyphs, vec!["a", "b", "c"]);
    }

    #[test]
    fn apply_batch_prepares_once_and_applies_all_items() {
        let result = generate(&GenerateRequest::new(TABLE), Point::ORIGIN);
        let mut surface = RecordingSurface::default();
        let outcome = apply_batch(&result, &mut surface);
        assert_eq!(surface.prepared, 1);
        assert_eq!(outcome.applied, 3);
        assert!(outcome.failures.is_empty());
        assert!(outcome.setup_error.is_none());
        assert_eq!(surface.glyphs, vec!["a", "b", "x", "y", "p", "q"]);
    }

    #[test]
    fn failing_item_does_not_stop_the_batch() {
        let result = generate(&GenerateRequest::new(TABLE), Point::ORIGIN);
        // Poison 'x': the second item ("xy") fails, first and third succeed.
        let mut surface = RejectingSurface {
            poison: "x",
            glyphs: Vec::new(),
        };
        let outcome = apply_batch(&result, &mut surface);
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].item, 1);
        assert!(matches!(
            outcome.failures[0].error,
            SurfaceError::PlacementRejected { index: 0, .. }
        ));
        // Third item still placed after the failure.
        assert_eq!(surface.glyphs, vec!["a", "b", "p", "q"]);
    }

    #[test]
    fn prepare_failure_aborts_before_any_item() {
        let result = generate(&GenerateRequest::new(TABLE), Point::ORIGIN);
        let outcome = apply_batch(&result, &mut FontlessSurface);
        assert_eq!(outcome.applied, 0);
        assert!(outcome.failures.is_empty());
        assert_eq!(
            outcome.setup_error,
            Some(SurfaceError::ResourceUnavailable {
                resource: "font Inter Regular".to_string()
            })
        );
    }

    #[test]
    fn empty_plan_applies_nothing() {
        let result = generate(&GenerateRequest::new(""), Point::ORIGIN);
        let mut surface = RecordingSurface::default();
        let outcome = apply_batch(&result, &mut surface);
        assert_eq!(outcome.applied, 0);
        assert!(surface.glyphs.is_empty());
    }

    #[test]
    fn surface_error_display_is_descriptive() {
        let err = SurfaceError::ResourceUnavailable {
            resource: "font".to_string(),
        };
        assert_eq!(err.to_string(), "resource unavailable: font");
        let err = SurfaceError::PlacementRejected {
            index: 4,
            reason: "off-canvas".to_string(),
        };
        assert_eq!(err.to_string(), "placement 4 rejected: off-canvas");
    }
}
