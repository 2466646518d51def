use crate::dominant_overlay::histogram::{Bucket, ColorHistogram};
use image::Rgb;

/// Representative color of the most occupied histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DominantColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DominantColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Whether every channel of `pixel` lies inside the inclusive window
    /// `[dominant - tolerance, dominant + tolerance]`
    ///
    /// The window is checked per channel independently and is wider than a
    /// single bucket: with the default tolerance of 64 it spans 129 values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dominant_overlay::DominantColor;
    /// use image::Rgb;
    ///
    /// let color = DominantColor::new(96, 96, 96);
    /// assert!(color.matches(&Rgb([160, 32, 96]), 64));
    /// assert!(!color.matches(&Rgb([161, 96, 96]), 64));
    /// ```
    #[inline]
    pub fn matches(&self, pixel: &Rgb<u8>, tolerance: u32) -> bool {
        let Rgb([r, g, b]) = *pixel;
        within_window(r, self.r, tolerance)
            && within_window(g, self.g, tolerance)
            && within_window(b, self.b, tolerance)
    }
}

#[inline]
fn within_window(value: u8, center: u8, tolerance: u32) -> bool {
    u32::from(value.abs_diff(center)) <= tolerance
}

impl From<Rgb<u8>> for DominantColor {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Self::new(r, g, b)
    }
}

impl From<DominantColor> for Rgb<u8> {
    fn from(color: DominantColor) -> Self {
        color.to_rgb()
    }
}

impl ColorHistogram {
    /// Bucket with the highest count
    ///
    /// The running maximum starts at bucket `(0, 0, 0)` and is only replaced
    /// on a strictly greater count, so ties resolve to the bucket visited
    /// first in row-major order and an all-zero histogram yields `(0, 0, 0)`.
    pub fn dominant_bucket(&self) -> Bucket {
        let mut best = (0, 0, 0);
        let mut best_count = self.get(0, 0, 0);

        for (bucket, count) in self.iter() {
            if count > best_count {
                best = bucket;
                best_count = count;
            }
        }

        best
    }

    /// Representative color of the dominant bucket: each channel is the
    /// midpoint of its bucket index
    pub fn dominant_color(&self) -> DominantColor {
        let (r, g, b) = self.dominant_bucket();
        let config = self.config();
        DominantColor::new(
            config.bucket_midpoint(r),
            config.bucket_midpoint(g),
            config.bucket_midpoint(b),
        )
    }
}
