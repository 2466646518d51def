use std::path::PathBuf;

use thiserror::Error;

/// Error type for histogram, substitution and edge pipeline operations
///
/// The core scans are total functions; every variant here is a
/// fail-fast check on caller-supplied parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Replacement image has a zero dimension
    ///
    /// Tiling samples the replacement at `(x % width, y % height)`, so both
    /// dimensions must be non-zero.
    #[error("Replacement image must have non-zero dimensions, got {width}x{height}")]
    InvalidReplacementSize { width: u32, height: u32 },

    /// Bucket count does not split the 8-bit channel range evenly
    #[error("Buckets per channel must be in 1..=256 and divide 256 evenly, got {0}")]
    InvalidBucketCount(u32),

    /// Operation requires an image with non-zero dimensions
    #[error("Image dimensions must be non-zero")]
    EmptyImage,

    /// Invalid parameter provided to the operation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Error type for the image decode/encode collaborator
///
/// Decode and encode failures stay distinguishable so that callers never
/// mistake a failed read for an empty image.
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// The file is missing, unreadable or in an unsupported format
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image could not be written to the given path
    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
