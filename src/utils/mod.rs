//! Internal utility functions for dominant-overlay.
//!
//! This module contains the scan bounds and validation shared by the
//! histogram, substitution and edge operations.

use crate::error::OverlayError;

/// Width and height of the region visited by the histogram and substitution scans.
///
/// NOTE: the last column and the last row are excluded from both scans
/// (`x < width - 1`, `y < height - 1`). Composites produced with this crate
/// depend on that boundary, so it is kept as is. Whether it was meant to
/// avoid an edge artifact or is an off-by-one is unknown.
///
/// Degenerate images (a zero or one-pixel dimension) yield an empty region.
#[inline]
pub fn scan_extent(width: u32, height: u32) -> (u32, u32) {
    (width.saturating_sub(1), height.saturating_sub(1))
}

/// Validates that an image has non-zero dimensions.
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `OverlayError::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), OverlayError> {
    if width == 0 || height == 0 {
        Err(OverlayError::EmptyImage)
    } else {
        Ok(())
    }
}

/// Validates that a replacement image can be tiled.
///
/// # Returns
///
/// `Ok(())` if both dimensions are non-zero, otherwise
/// `OverlayError::InvalidReplacementSize`
pub fn validate_replacement_size(width: u32, height: u32) -> Result<(), OverlayError> {
    if width == 0 || height == 0 {
        Err(OverlayError::InvalidReplacementSize { width, height })
    } else {
        Ok(())
    }
}
