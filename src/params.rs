//! Parameter parsing and range validation.
//!
//! Each function takes one raw input line and returns either a validated
//! typed value or the specific [`Error`] describing why it was rejected.
//! There is no retry loop: the caller aborts the run on the first failure.

use image::Rgb;

use crate::engine::SourceImage;
use crate::error::{Error, Result};

/// A validated yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
}

impl YesNo {
    /// Parse a yes/no token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChoice`] for anything other than `yes` or `no`.
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(Error::InvalidChoice {
                what: "yes/no",
                token: token.to_string(),
            }),
        }
    }

    /// Whether the answer was affirmative.
    #[must_use]
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

/// Output encoding, derived from the output filename's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG encoding (`.jpg` suffix).
    Jpg,
    /// PNG encoding (`.png` suffix).
    Png,
}

impl OutputFormat {
    /// Derive the output format from a filename suffix.
    ///
    /// The suffix match is case-sensitive: only `.jpg` and `.png` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOutputExtension`] for any other suffix.
    pub fn from_filename(filename: &str) -> Result<Self> {
        if filename.ends_with(".jpg") {
            Ok(Self::Jpg)
        } else if filename.ends_with(".png") {
            Ok(Self::Png)
        } else {
            Err(Error::UnsupportedOutputExtension(filename.to_string()))
        }
    }

    /// The corresponding `image` crate format.
    #[must_use]
    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

/// Split a line into exactly `expected` integers.
///
/// Wrong token count and non-numeric tokens are both [`Error::MalformedInput`];
/// range checks are the caller's job.
fn parse_integers(line: &str, expected: usize, what: &'static str) -> Result<Vec<i64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(Error::MalformedInput(what));
    }
    tokens
        .iter()
        .map(|t| t.parse::<i64>().map_err(|_| Error::MalformedInput(what)))
        .collect()
}

/// Parse a watermark position "x y" and range-check it.
///
/// Valid positions are `x in [0, max_x]`, `y in [0, max_y]`, where the maxima
/// are the base dimensions minus the watermark dimensions.
///
/// # Errors
///
/// [`Error::MalformedInput`] unless the line is exactly two integers;
/// [`Error::OutOfRange`] if either coordinate falls outside its interval
/// (negative values included).
pub fn parse_position(line: &str, max_x: u32, max_y: u32) -> Result<(u32, u32)> {
    let coords = parse_integers(line, 2, "position")?;
    let (x, y) = (coords[0], coords[1]);
    if !(0..=i64::from(max_x)).contains(&x) || !(0..=i64::from(max_y)).contains(&y) {
        return Err(Error::OutOfRange("position"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok((x as u32, y as u32))
}

/// Parse a transparency color "R G B" with each channel in `[0, 255]`.
///
/// # Errors
///
/// [`Error::MalformedInput`] unless the line is exactly three integers;
/// [`Error::OutOfRange`] if any channel falls outside `[0, 255]`.
pub fn parse_transparency_color(line: &str) -> Result<Rgb<u8>> {
    let channels = parse_integers(line, 3, "transparency color")?;
    if channels.iter().any(|&c| !(0..=255).contains(&c)) {
        return Err(Error::OutOfRange("transparency color"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(Rgb([
        channels[0] as u8,
        channels[1] as u8,
        channels[2] as u8,
    ]))
}

/// Parse the blend weight percentage, an integer in `[0, 100]`.
///
/// # Errors
///
/// [`Error::MalformedInput`] if the line is not a single integer;
/// [`Error::OutOfRange`] if it falls outside `[0, 100]`.
pub fn parse_weight(line: &str) -> Result<u8> {
    let weight: i64 = line
        .trim()
        .parse()
        .map_err(|_| Error::MalformedInput("transparency percentage"))?;
    if !(0..=100).contains(&weight) {
        return Err(Error::OutOfRange("transparency percentage"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(weight as u8)
}

/// Reject watermarks wider or taller than the base image.
///
/// Runs immediately after both images load, before any further prompt.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the watermark exceeds the base in
/// either dimension.
pub fn check_dimensions(base: &SourceImage, watermark: &SourceImage) -> Result<()> {
    if watermark.width() > base.width() || watermark.height() > base.height() {
        return Err(Error::DimensionMismatch {
            width: base.width(),
            height: base.height(),
            wm_width: watermark.width(),
            wm_height: watermark.height(),
        });
    }
    Ok(())
}
