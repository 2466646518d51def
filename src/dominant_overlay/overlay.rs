use crate::dominant_overlay::config::HistogramConfig;
use crate::dominant_overlay::histogram::ColorHistogramExt;
use crate::dominant_overlay::substitute::SubstituteColor;
use crate::{Image, OverlayResult};
use image::Rgb;

/// 前景画像の支配色を背景画像のピクセルで置き換えた合成画像を作成するトレイト
pub trait CreateOverlay: Sized {
    /// Creates a composite in which the dominant color of `self` is replaced
    /// by the corresponding, tiled pixels of `background`
    ///
    /// The histogram is built from the unmodified foreground; substitution is
    /// applied to a copy, so `self` is never changed.
    ///
    /// # Errors
    ///
    /// * `OverlayError::InvalidReplacementSize` - `background` has a zero dimension
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dominant_overlay::{CreateOverlay, HistogramConfig, Image};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let foreground: Image<Rgb<u8>> = Image::from_pixel(10, 10, Rgb([0, 200, 0]));
    /// let background: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([90, 60, 30]));
    ///
    /// let overlay = foreground.create_overlay(&background, &HistogramConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    fn create_overlay(&self, background: &Self, config: &HistogramConfig) -> OverlayResult<Self>;
}

impl CreateOverlay for Image<Rgb<u8>> {
    fn create_overlay(&self, background: &Self, config: &HistogramConfig) -> OverlayResult<Self> {
        let histogram = self.color_histogram(config);
        let dominant = histogram.dominant_color();

        log::debug!(
            "dominant color {dominant:?} in bucket {:?} ({} scanned pixels, {} buckets per channel)",
            histogram.dominant_bucket(),
            histogram.total(),
            config.buckets_per_channel()
        );

        let mut overlay = self.clone();
        let replaced = overlay.substitute_color(dominant, background, config)?;
        log::debug!("replaced {replaced} pixels with background");

        Ok(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_block_image, create_indexed_image};
    use crate::OverlayError;

    #[test]
    fn create_overlay_replaces_dominant_block() {
        let foreground = create_block_image();
        let background: Image<Rgb<u8>> = Image::from_pixel(2, 2, Rgb([10, 200, 250]));

        let overlay = foreground
            .create_overlay(&background, &HistogramConfig::default())
            .unwrap();

        for y in 1..=3 {
            for x in 1..=3 {
                assert_eq!(overlay.get_pixel(x, y), &Rgb([10, 200, 250]));
            }
        }
        // black lies outside the window around (224, 32, 32)
        assert_eq!(overlay.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(overlay.get_pixel(4, 4), &Rgb([0, 0, 0]));
    }

    #[test]
    fn create_overlay_does_not_modify_foreground() {
        let foreground = create_block_image();
        let original = foreground.clone();
        let background = create_indexed_image(3, 3);

        let _ = foreground
            .create_overlay(&background, &HistogramConfig::default())
            .unwrap();

        assert_eq!(foreground, original);
    }

    #[test]
    fn create_overlay_uses_tiled_background() {
        let foreground: Image<Rgb<u8>> = Image::from_pixel(7, 7, Rgb([0, 200, 0]));
        let background = create_indexed_image(2, 3);

        let overlay = foreground
            .create_overlay(&background, &HistogramConfig::default())
            .unwrap();

        assert_eq!(overlay.get_pixel(5, 4), background.get_pixel(1, 1));
        assert_eq!(overlay.get_pixel(6, 6), &Rgb([0, 200, 0]));
    }

    #[test]
    fn create_overlay_with_empty_background_fails() {
        let foreground = create_block_image();
        let background: Image<Rgb<u8>> = Image::new(0, 4);

        let result = foreground.create_overlay(&background, &HistogramConfig::default());

        assert_eq!(
            result,
            Err(OverlayError::InvalidReplacementSize {
                width: 0,
                height: 4
            })
        );
    }
}
