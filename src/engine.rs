//! Image loading, encoding, and the full-image compositing scan.

use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

use crate::blending::BlendConfig;
use crate::error::{Error, ImageRole, Result};
use crate::params::OutputFormat;
use crate::placement::PlacementPlan;

/// A decoded input image, classified by transparency mode at load time.
///
/// The loader guarantees exactly 3 color components and a bit depth of
/// 24 (RGB) or 32 (RGBA); no other pixel layout reaches the compositor.
#[derive(Debug, Clone)]
pub enum SourceImage {
    /// 24-bit RGB image with no alpha channel.
    Opaque(RgbImage),
    /// 32-bit RGBA image carrying a meaningful alpha channel.
    Translucent(RgbaImage),
}

impl SourceImage {
    /// Classify a decoded image, rejecting unsupported pixel layouts.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedColorDepth`] for grayscale layouts (component
    /// count is not 3); [`Error::UnsupportedBitDepth`] for RGB(A) layouts
    /// deeper than 8 bits per channel.
    pub fn from_dynamic(img: DynamicImage, role: ImageRole) -> Result<Self> {
        match img {
            DynamicImage::ImageRgb8(buf) => Ok(Self::Opaque(buf)),
            DynamicImage::ImageRgba8(buf) => Ok(Self::Translucent(buf)),
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => Err(Error::UnsupportedColorDepth { role }),
            _ => Err(Error::UnsupportedBitDepth { role }),
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        match self {
            Self::Opaque(buf) => buf.width(),
            Self::Translucent(buf) => buf.width(),
        }
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            Self::Opaque(buf) => buf.height(),
            Self::Translucent(buf) => buf.height(),
        }
    }

    /// Whether the image carries a meaningful alpha channel.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        matches!(self, Self::Translucent(_))
    }

    /// Read the pixel at `(x, y)`; opaque images report alpha 255.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds. The placement contract
    /// makes that unreachable; hitting it is a programmer error, not a
    /// user-input error.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        match self {
            Self::Opaque(buf) => {
                let p = buf.get_pixel(x, y);
                Rgba([p[0], p[1], p[2], 255])
            }
            Self::Translucent(buf) => *buf.get_pixel(x, y),
        }
    }
}

/// Load and classify an input image.
///
/// # Errors
///
/// [`Error::NotFound`] if the path does not exist; [`Error::Image`] if
/// decoding fails; otherwise the classification errors of
/// [`SourceImage::from_dynamic`].
pub fn load_image(path: &Path, role: ImageRole) -> Result<SourceImage> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let img = image::open(path)?;
    SourceImage::from_dynamic(img, role)
}

/// Encode the output image according to its validated format.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_image(img: &RgbImage, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jpg => {
            let file = std::fs::File::create(path)?;
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 100);
            encoder.encode_image(img)?;
        }
        OutputFormat::Png => {
            img.save_with_format(path, format.image_format())?;
        }
    }
    Ok(())
}

/// Compute the output pixel for one base-image coordinate.
fn output_pixel(
    base: &SourceImage,
    watermark: &SourceImage,
    plan: &PlacementPlan,
    config: &BlendConfig,
    x: u32,
    y: u32,
) -> Rgb<u8> {
    let src = base.pixel(x, y);
    let base_rgb = Rgb([src[0], src[1], src[2]]);
    if plan.covers(x, y) {
        let (wx, wy) = plan.map_to_watermark(x, y);
        config.composite(base_rgb, watermark.pixel(wx, wy))
    } else {
        base_rgb
    }
}

/// Composite the watermark onto the base image.
///
/// Scans every output coordinate exactly once: covered pixels are blended
/// per the config, everything else passes through unchanged. The output is
/// always a 24-bit RGB grid with the base image's dimensions.
///
/// With the `cli` feature, rows are computed in parallel; each output pixel
/// depends only on its own coordinate, so the result is identical either way.
#[must_use]
pub fn apply_watermark(
    base: &SourceImage,
    watermark: &SourceImage,
    plan: &PlacementPlan,
    config: &BlendConfig,
) -> RgbImage {
    let (width, height) = (base.width(), base.height());
    let mut out = RgbImage::new(width, height);

    #[cfg(feature = "cli")]
    {
        use rayon::prelude::*;
        let row_len = width as usize * 3;
        let buf: &mut [u8] = &mut out;
        buf.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
            #[allow(clippy::cast_possible_truncation)]
            let y = y as u32;
            for x in 0..width {
                let px = output_pixel(base, watermark, plan, config, x, y);
                let i = x as usize * 3;
                row[i..i + 3].copy_from_slice(&px.0);
            }
        });
    }

    #[cfg(not(feature = "cli"))]
    {
        for y in 0..height {
            for x in 0..width {
                out.put_pixel(x, y, output_pixel(base, watermark, plan, config, x, y));
            }
        }
    }

    out
}
