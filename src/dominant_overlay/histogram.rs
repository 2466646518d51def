use crate::dominant_overlay::config::HistogramConfig;
use crate::utils::scan_extent;
use crate::Image;
use image::Rgb;
use itertools::iproduct;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Bucket index triple `(r, g, b)`
pub type Bucket = (usize, usize, usize);

/// Three-dimensional color occupancy histogram
///
/// Counts are stored flat in row-major `(r, g, b)` order, so iterating the
/// storage visits red buckets slowest and blue buckets fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: Vec<u64>,
    config: HistogramConfig,
}

impl ColorHistogram {
    /// Creates an all-zero histogram at the resolution of `config`
    pub fn new(config: &HistogramConfig) -> Self {
        let n = config.buckets_per_channel() as usize;
        Self {
            counts: vec![0; n * n * n],
            config: *config,
        }
    }

    #[inline]
    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    #[inline]
    pub fn buckets_per_channel(&self) -> usize {
        self.config.buckets_per_channel() as usize
    }

    #[inline]
    fn offset(&self, r: usize, g: usize, b: usize) -> usize {
        let n = self.buckets_per_channel();
        assert!(
            r < n && g < n && b < n,
            "bucket ({r}, {g}, {b}) out of range for {n} buckets per channel"
        );
        (r * n + g) * n + b
    }

    /// Count stored for bucket `(r, g, b)`
    ///
    /// # Panics
    ///
    /// Panics if any index is not below `buckets_per_channel()`.
    pub fn get(&self, r: usize, g: usize, b: usize) -> u64 {
        self.counts[self.offset(r, g, b)]
    }

    /// Overwrites the count of bucket `(r, g, b)`
    ///
    /// # Panics
    ///
    /// Panics if any index is not below `buckets_per_channel()`.
    pub fn set(&mut self, r: usize, g: usize, b: usize, count: u64) {
        let offset = self.offset(r, g, b);
        self.counts[offset] = count;
    }

    /// Adds one to the count of bucket `(r, g, b)`
    pub fn increment(&mut self, r: usize, g: usize, b: usize) {
        let offset = self.offset(r, g, b);
        self.counts[offset] += 1;
    }

    /// Records one pixel in the bucket its channels quantize to
    #[inline]
    pub fn record(&mut self, pixel: &Rgb<u8>) {
        let Rgb([r, g, b]) = *pixel;
        self.increment(
            self.config.bucket_index(r),
            self.config.bucket_index(g),
            self.config.bucket_index(b),
        );
    }

    /// Adds every count of `other` into `self`
    ///
    /// # Panics
    ///
    /// Panics if the two histograms have different resolutions.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            self.config, other.config,
            "cannot merge histograms of different resolutions"
        );
        self.counts
            .iter_mut()
            .zip(&other.counts)
            .for_each(|(count, added)| *count += added);
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates over `((r, g, b), count)` in row-major order: r, then g, then b
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, u64)> + '_ {
        let n = self.buckets_per_channel();
        iproduct!(0..n, 0..n, 0..n).zip(self.counts.iter().copied())
    }
}

/// Trait for building a quantized color histogram from an image
pub trait ColorHistogramExt {
    /// Builds a color histogram of the image
    ///
    /// Every pixel inside the scanned region contributes one count to the
    /// bucket its `(R, G, B)` channels quantize to. The last row and the last
    /// column are not part of the scanned region, so the total count is
    /// `(height - 1) * (width - 1)` for any non-empty image.
    ///
    /// # Examples
    ///
    /// ```
    /// use dominant_overlay::{ColorHistogramExt, HistogramConfig, Image};
    /// use image::Rgb;
    ///
    /// let image: Image<Rgb<u8>> = Image::from_pixel(4, 3, Rgb([200, 10, 10]));
    /// let histogram = image.color_histogram(&HistogramConfig::default());
    /// assert_eq!(histogram.get(3, 0, 0), 6);
    /// assert_eq!(histogram.total(), 6);
    /// ```
    fn color_histogram(&self, config: &HistogramConfig) -> ColorHistogram;
}

impl ColorHistogramExt for Image<Rgb<u8>> {
    #[cfg(not(feature = "rayon"))]
    fn color_histogram(&self, config: &HistogramConfig) -> ColorHistogram {
        let (scan_width, scan_height) = scan_extent(self.width(), self.height());
        let mut histogram = ColorHistogram::new(config);

        iproduct!(0..scan_height, 0..scan_width)
            .for_each(|(y, x)| histogram.record(self.get_pixel(x, y)));

        histogram
    }

    #[cfg(feature = "rayon")]
    fn color_histogram(&self, config: &HistogramConfig) -> ColorHistogram {
        let (scan_width, scan_height) = scan_extent(self.width(), self.height());

        (0..scan_height)
            .into_par_iter()
            .fold(
                || ColorHistogram::new(config),
                |mut histogram, y| {
                    (0..scan_width).for_each(|x| histogram.record(self.get_pixel(x, y)));
                    histogram
                },
            )
            .reduce(
                || ColorHistogram::new(config),
                |mut merged, histogram| {
                    merged.merge(&histogram);
                    merged
                },
            )
    }
}
