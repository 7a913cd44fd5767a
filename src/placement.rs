//! Placement geometry: which base pixels the watermark covers and how they
//! map to watermark-local coordinates.
//!
//! The two methods differ only in geometry, never in blending, so the
//! compositor runs one uniform scan against a [`PlacementPlan`] regardless of
//! which was chosen.

use crate::error::{Error, Result};

/// The placement method token chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMethod {
    /// Place the watermark once at a fixed position.
    Single,
    /// Tile the watermark across the whole base image.
    Grid,
}

impl PlacementMethod {
    /// Parse a placement method token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChoice`] for anything other than `single` or
    /// `grid`.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "grid" => Ok(Self::Grid),
            _ => Err(Error::InvalidChoice {
                what: "position method",
                token: token.to_string(),
            }),
        }
    }
}

/// A fully resolved placement, carrying only the data its method needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One copy at a fixed offset, already range-checked so the watermark
    /// rectangle lies entirely inside the base image.
    Single {
        /// Left edge of the watermark rectangle.
        x: u32,
        /// Top edge of the watermark rectangle.
        y: u32,
    },
    /// Seamless modular tiling over the entire base image.
    Grid,
}

/// Placement resolved against the watermark's dimensions.
///
/// Answers the two geometric questions the compositor asks per pixel:
/// is this coordinate covered, and where in the watermark does it land.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPlan {
    placement: Placement,
    wm_width: u32,
    wm_height: u32,
}

impl PlacementPlan {
    /// Bind a placement to the watermark's dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either watermark dimension is zero; the loader never
    /// produces such an image.
    #[must_use]
    pub fn new(placement: Placement, wm_width: u32, wm_height: u32) -> Self {
        assert!(
            wm_width > 0 && wm_height > 0,
            "watermark dimensions must be nonzero"
        );
        Self {
            placement,
            wm_width,
            wm_height,
        }
    }

    /// Whether the watermark covers the base-image coordinate `(x, y)`.
    #[must_use]
    pub fn covers(&self, x: u32, y: u32) -> bool {
        match self.placement {
            Placement::Single { x: px, y: py } => {
                (px..px + self.wm_width).contains(&x) && (py..py + self.wm_height).contains(&y)
            }
            Placement::Grid => true,
        }
    }

    /// Map a covered base-image coordinate to its watermark-local coordinate.
    ///
    /// Callers must only pass coordinates for which [`covers`](Self::covers)
    /// holds; for `Single` this is checked in debug builds.
    #[must_use]
    pub fn map_to_watermark(&self, x: u32, y: u32) -> (u32, u32) {
        match self.placement {
            Placement::Single { x: px, y: py } => {
                debug_assert!(self.covers(x, y), "({x}, {y}) is outside the watermark");
                (x - px, y - py)
            }
            Placement::Grid => (x % self.wm_width, y % self.wm_height),
        }
    }
}
