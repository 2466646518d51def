//! Test utilities for dominant-overlay
//!
//! This module provides common fixtures for testing histogram and
//! substitution operations. It is only compiled when running tests.

use std::path::PathBuf;

use image::Rgb;

use crate::Image;

/// Creates a test RGB image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values:
/// - (0,0): [200, 150, 100]
/// - (1,0): [100, 200, 150]
/// - (0,1): [150, 100, 200]
/// - (1,1): [50, 75, 25]
///
/// Only (0,0) lies inside the scanned region of a 2x2 image.
pub fn create_test_rgb_image() -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgb([200, 150, 100]));
    image.put_pixel(1, 0, Rgb([100, 200, 150]));
    image.put_pixel(0, 1, Rgb([150, 100, 200]));
    image.put_pixel(1, 1, Rgb([50, 75, 25]));
    image
}

/// Creates a 5x5 black image with a solid [200, 10, 10] block at x, y in 1..=3.
///
/// The block lies entirely inside the scanned 4x4 region, so its bucket
/// (3, 0, 0) holds 9 counts against 7 for black.
pub fn create_block_image() -> Image<Rgb<u8>> {
    Image::from_fn(5, 5, |x, y| {
        if (1..=3).contains(&x) && (1..=3).contains(&y) {
            Rgb([200, 10, 10])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Creates an image whose pixels encode their own coordinates.
///
/// Pixel (x, y) is `[x, y, 255 - x]` (coordinates below 256), which makes
/// every pixel distinct and far from mid-gray.
pub fn create_indexed_image(width: u32, height: u32) -> Image<Rgb<u8>> {
    Image::from_fn(width, height, |x, y| {
        Rgb([x as u8, y as u8, 255 - x as u8])
    })
}

/// Path for a scratch image file in the system temp directory.
#[allow(dead_code)]
pub fn temp_image_path(filename: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "dominant_overlay_{}_{}",
        std::process::id(),
        filename
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgb_image_with_valid_input_creates_image() {
        let image = create_test_rgb_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgb([200, 150, 100]));
        assert_eq!(image.get_pixel(1, 1), &Rgb([50, 75, 25]));
    }

    #[test]
    fn create_block_image_places_block_inside_border() {
        let image = create_block_image();
        assert_eq!(image.dimensions(), (5, 5));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(2, 2), &Rgb([200, 10, 10]));
        assert_eq!(image.get_pixel(4, 3), &Rgb([0, 0, 0]));
    }

    #[test]
    fn create_indexed_image_encodes_coordinates() {
        let image = create_indexed_image(3, 4);
        assert_eq!(image.get_pixel(2, 1), &Rgb([2, 1, 253]));
        assert_eq!(image.get_pixel(0, 3), &Rgb([0, 3, 255]));
    }
}
