use crate::dominant_overlay::config::HistogramConfig;
use crate::dominant_overlay::dominant_color::DominantColor;
use crate::utils::{scan_extent, validate_replacement_size};
use crate::{Image, OverlayResult};
use image::{Pixel, Rgb};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Trait for replacing pixels close to a color with pixels from a tiled replacement image
pub trait SubstituteColor {
    /// Replaces, in place, every scanned pixel whose channels all lie within
    /// `config.tolerance()` of `color`
    ///
    /// A matching pixel at `(x, y)` takes the value of the replacement pixel at
    /// `(x % replacement.width(), y % replacement.height())`, so a smaller
    /// replacement repeats across the image and a larger one is only sampled
    /// in its top-left region. The last row and column are never touched.
    ///
    /// # Returns
    ///
    /// Number of substituted pixels
    ///
    /// # Errors
    ///
    /// * `OverlayError::InvalidReplacementSize` - the replacement has a zero
    ///   dimension; checked before any pixel is modified
    ///
    /// # Examples
    ///
    /// ```
    /// use dominant_overlay::{DominantColor, HistogramConfig, Image, SubstituteColor};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut target: Image<Rgb<u8>> = Image::from_pixel(3, 3, Rgb([220, 30, 30]));
    /// let replacement: Image<Rgb<u8>> = Image::from_pixel(1, 1, Rgb([0, 0, 255]));
    ///
    /// let replaced = target.substitute_color(
    ///     DominantColor::new(224, 32, 32),
    ///     &replacement,
    ///     &HistogramConfig::default(),
    /// )?;
    /// assert_eq!(replaced, 4);
    /// assert_eq!(target.get_pixel(0, 0), &Rgb([0, 0, 255]));
    /// assert_eq!(target.get_pixel(2, 2), &Rgb([220, 30, 30]));
    /// # Ok(())
    /// # }
    /// ```
    fn substitute_color(
        &mut self,
        color: DominantColor,
        replacement: &Self,
        config: &HistogramConfig,
    ) -> OverlayResult<u64>;

    /// Same as [`SubstituteColor::substitute_color`] but leaves `self`
    /// untouched and returns the substituted copy
    fn substituted_color(
        &self,
        color: DominantColor,
        replacement: &Self,
        config: &HistogramConfig,
    ) -> OverlayResult<Self>
    where
        Self: Sized + Clone,
    {
        let mut output = self.clone();
        output.substitute_color(color, replacement, config)?;
        Ok(output)
    }
}

impl SubstituteColor for Image<Rgb<u8>> {
    fn substitute_color(
        &mut self,
        color: DominantColor,
        replacement: &Self,
        config: &HistogramConfig,
    ) -> OverlayResult<u64> {
        validate_replacement_size(replacement.width(), replacement.height())?;

        let (scan_width, scan_height) = scan_extent(self.width(), self.height());
        if scan_width == 0 || scan_height == 0 {
            return Ok(0);
        }

        let row_len = self.width() as usize * usize::from(Rgb::<u8>::CHANNEL_COUNT);
        let tolerance = config.tolerance();

        #[cfg(feature = "rayon")]
        let replaced: u64 = self
            .par_chunks_mut(row_len)
            .take(scan_height as usize)
            .enumerate()
            .map(|(y, row)| {
                substitute_row(y as u32, row, scan_width, color, replacement, tolerance)
            })
            .sum();

        #[cfg(not(feature = "rayon"))]
        let replaced: u64 = self
            .chunks_mut(row_len)
            .take(scan_height as usize)
            .enumerate()
            .map(|(y, row)| {
                substitute_row(y as u32, row, scan_width, color, replacement, tolerance)
            })
            .sum();

        log::trace!(
            "substituted {replaced} of {} scanned pixels near {color:?}",
            u64::from(scan_width) * u64::from(scan_height)
        );

        Ok(replaced)
    }
}

/// Substitutes the scanned part of one image row, returning the number of replaced pixels
fn substitute_row(
    y: u32,
    row: &mut [u8],
    scan_width: u32,
    color: DominantColor,
    replacement: &Image<Rgb<u8>>,
    tolerance: u32,
) -> u64 {
    let tile_y = y % replacement.height();
    let mut replaced = 0;

    for (x, channels) in row
        .chunks_exact_mut(usize::from(Rgb::<u8>::CHANNEL_COUNT))
        .take(scan_width as usize)
        .enumerate()
    {
        let pixel = Rgb::from_slice_mut(channels);
        if color.matches(pixel, tolerance) {
            *pixel = *replacement.get_pixel(x as u32 % replacement.width(), tile_y);
            replaced += 1;
        }
    }

    replaced
}
