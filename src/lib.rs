//! Apply watermark images onto photos via weighted per-pixel blending.
//!
//! A watermark is composited onto a base image either once at a fixed
//! position or tiled across the whole image, with a configurable blend
//! weight and an optional transparency rule (the watermark's alpha channel,
//! or a chroma-key color for opaque watermarks). The accompanying binary
//! collects the parameters interactively and aborts on the first invalid
//! input.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use watermark_overlay::{
//!     apply_watermark, load_image, save_image, BlendConfig, ImageRole, OutputFormat,
//!     Placement, PlacementPlan, TransparencyRule,
//! };
//!
//! # fn main() -> watermark_overlay::Result<()> {
//! let base = load_image(Path::new("photo.jpg"), ImageRole::Base)?;
//! let logo = load_image(Path::new("logo.png"), ImageRole::Watermark)?;
//!
//! let plan = PlacementPlan::new(Placement::Grid, logo.width(), logo.height());
//! let config = BlendConfig::new(TransparencyRule::Opaque, 20);
//!
//! let out = apply_watermark(&base, &logo, &plan, &config);
//! save_image(&out, Path::new("out.png"), OutputFormat::Png)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod blending;
mod engine;
pub mod error;
pub mod params;
pub mod placement;

pub use blending::{BlendConfig, TransparencyRule};
pub use engine::{apply_watermark, load_image, save_image, SourceImage};
pub use error::{Error, ImageRole, Result};
pub use params::{
    check_dimensions, parse_position, parse_transparency_color, parse_weight, OutputFormat, YesNo,
};
pub use placement::{Placement, PlacementMethod, PlacementPlan};
