//! Per-pixel blend arithmetic and transparency rules.
//!
//! Covered pixels are combined by integer linear interpolation:
//! `out = (weight * watermark + (100 - weight) * base) / 100`
//! per channel, with truncating division. A [`TransparencyRule`] decides
//! per pixel whether to blend at all or pass the base pixel through.

use image::{Rgb, Rgba};

/// Fully opaque alpha value.
const OPAQUE_ALPHA: u8 = 255;

/// How watermark transparency is interpreted, chosen once per run.
///
/// Alpha-channel and chroma-key transparency are mutually exclusive: the
/// alpha rule is only offered for translucent watermarks, the chroma key
/// only for opaque ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparencyRule {
    /// No transparency: every covered pixel blends.
    Opaque,
    /// Binary alpha rule: blend only pixels whose alpha is exactly 255.
    ///
    /// Partial alpha means full pass-through, never proportional blending.
    AlphaBinary,
    /// Chroma key: pixels whose RGB exactly matches the key pass through.
    ChromaKey(Rgb<u8>),
}

impl TransparencyRule {
    /// Whether a watermark pixel takes part in blending under this rule.
    #[must_use]
    pub fn blends(&self, pixel: Rgba<u8>) -> bool {
        match self {
            Self::Opaque => true,
            Self::AlphaBinary => pixel[3] == OPAQUE_ALPHA,
            Self::ChromaKey(key) => Rgb([pixel[0], pixel[1], pixel[2]]) != *key,
        }
    }
}

/// Immutable blend parameters, built once from validated input.
#[derive(Debug, Clone, Copy)]
pub struct BlendConfig {
    /// The transparency rule in effect.
    pub rule: TransparencyRule,
    /// Watermark weight percentage in `[0, 100]`.
    pub weight: u8,
}

impl BlendConfig {
    /// Build a config from a rule and a validated weight percentage.
    #[must_use]
    pub fn new(rule: TransparencyRule, weight: u8) -> Self {
        debug_assert!(weight <= 100, "weight must be a percentage");
        Self { rule, weight }
    }

    /// Combine a covered base pixel with its watermark pixel.
    ///
    /// Pass-through pixels return the base unchanged; otherwise each RGB
    /// channel is interpolated independently. The output never carries alpha.
    #[must_use]
    pub fn composite(&self, base: Rgb<u8>, watermark: Rgba<u8>) -> Rgb<u8> {
        if !self.rule.blends(watermark) {
            return base;
        }

        let weight = u32::from(self.weight);
        let mut out = [0u8; 3];
        for ch in 0..3 {
            let blended =
                (weight * u32::from(watermark[ch]) + (100 - weight) * u32::from(base[ch])) / 100;
            #[allow(clippy::cast_possible_truncation)]
            {
                out[ch] = blended as u8;
            }
        }
        Rgb(out)
    }
}
