use crate::error::OverlayError;

/// Number of distinct values of an 8-bit channel
const CHANNEL_LEVELS: u32 = 256;

/// Quantization settings shared by histogram building, dominant color
/// selection and color substitution.
///
/// Each 8-bit channel is split into `buckets_per_channel` equal buckets of
/// width `256 / buckets_per_channel`. The same width is used as the
/// substitution tolerance around the dominant color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistogramConfig {
    buckets_per_channel: u32,
}

impl HistogramConfig {
    /// 4 buckets per channel, 64 values per bucket
    pub const DEFAULT_BUCKETS_PER_CHANNEL: u32 = 4;

    /// Creates a configuration with the given number of buckets per channel
    ///
    /// # Errors
    ///
    /// * `OverlayError::InvalidBucketCount` - the count is zero, larger than
    ///   256, or does not divide 256 evenly
    ///
    /// # Examples
    ///
    /// ```
    /// use dominant_overlay::HistogramConfig;
    ///
    /// let config = HistogramConfig::new(8).unwrap();
    /// assert_eq!(config.bucket_size(), 32);
    /// assert!(HistogramConfig::new(3).is_err());
    /// ```
    pub fn new(buckets_per_channel: u32) -> Result<Self, OverlayError> {
        if buckets_per_channel == 0
            || buckets_per_channel > CHANNEL_LEVELS
            || CHANNEL_LEVELS % buckets_per_channel != 0
        {
            return Err(OverlayError::InvalidBucketCount(buckets_per_channel));
        }

        Ok(Self {
            buckets_per_channel,
        })
    }

    #[inline]
    pub fn buckets_per_channel(&self) -> u32 {
        self.buckets_per_channel
    }

    /// Width of one bucket in channel values
    #[inline]
    pub fn bucket_size(&self) -> u32 {
        CHANNEL_LEVELS / self.buckets_per_channel
    }

    /// Maps a channel value to its bucket index (floor division)
    #[inline]
    pub fn bucket_index(&self, value: u8) -> usize {
        (u32::from(value) / self.bucket_size()) as usize
    }

    /// Representative channel value of a bucket: its midpoint
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid bucket index.
    #[inline]
    pub fn bucket_midpoint(&self, index: usize) -> u8 {
        assert!(
            index < self.buckets_per_channel as usize,
            "bucket index {index} out of range for {} buckets",
            self.buckets_per_channel
        );
        let size = self.bucket_size();
        // (n - 1) * size + size / 2 never exceeds 255
        (index as u32 * size + size / 2) as u8
    }

    /// Half-width of the inclusive substitution window around a dominant channel value
    #[inline]
    pub fn tolerance(&self) -> u32 {
        self.bucket_size()
    }
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            buckets_per_channel: Self::DEFAULT_BUCKETS_PER_CHANNEL,
        }
    }
}
