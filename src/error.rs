//! Error types for the watermark-overlay crate.

use std::path::PathBuf;

/// Which of the two input images an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The base image receiving the watermark.
    Base,
    /// The watermark image being applied.
    Watermark,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "image"),
            Self::Watermark => write!(f, "watermark"),
        }
    }
}

/// Errors that can occur while validating parameters or processing images.
///
/// Every variant is terminal for the run: the first failure is reported once
/// and no output file is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The given path does not exist on disk.
    #[error("the file {} doesn't exist", .0.display())]
    NotFound(PathBuf),

    /// The decoded image does not have exactly 3 color components.
    #[error("the number of {role} color components isn't 3")]
    UnsupportedColorDepth {
        /// Which image failed the check.
        role: ImageRole,
    },

    /// The decoded image is not 24-bit RGB or 32-bit RGBA.
    #[error("the {role} isn't 24 or 32-bit")]
    UnsupportedBitDepth {
        /// Which image failed the check.
        role: ImageRole,
    },

    /// The watermark is wider or taller than the base image.
    #[error(
        "the watermark's dimensions ({wm_width}x{wm_height}) are larger \
         than the image ({width}x{height})"
    )]
    DimensionMismatch {
        /// Base image width in pixels.
        width: u32,
        /// Base image height in pixels.
        height: u32,
        /// Watermark width in pixels.
        wm_width: u32,
        /// Watermark height in pixels.
        wm_height: u32,
    },

    /// An input line had the wrong token count or a non-numeric token.
    #[error("the {0} input is invalid")]
    MalformedInput(&'static str),

    /// A numeric input was outside its valid interval.
    #[error("the {0} input is out of range")]
    OutOfRange(&'static str),

    /// A choice token did not match any recognized alternative.
    #[error("the {what} input {token:?} is invalid")]
    InvalidChoice {
        /// Which choice was being made (e.g. "position method").
        what: &'static str,
        /// The unrecognized token.
        token: String,
    },

    /// The output filename does not end in a recognized extension.
    #[error("the output file extension isn't \"jpg\" or \"png\"")]
    UnsupportedOutputExtension(String),

    /// An I/O error occurred while reading input or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image decoding or encoding.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
