use crate::utils::validate_non_empty_image;
use crate::{Image, OverlayError, OverlayResult};
use image::{imageops, GrayImage, Rgb};
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;

/// Parameters of the background edge pipeline
///
/// Defaults reproduce a 7x7 Gaussian with sigma 2.0 followed by Canny with
/// hysteresis thresholds 20 and 60.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDetectionParams {
    /// Mirror the image left to right before processing
    pub flip_horizontal: bool,
    /// Width and height of the Gaussian kernel; must be odd
    pub kernel_size: u32,
    /// Standard deviation of the Gaussian blur
    pub sigma: f32,
    /// Lower hysteresis threshold of the Canny detector
    pub low_threshold: f32,
    /// Upper hysteresis threshold of the Canny detector
    pub high_threshold: f32,
}

impl Default for EdgeDetectionParams {
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            kernel_size: 7,
            sigma: 2.0,
            low_threshold: 20.0,
            high_threshold: 60.0,
        }
    }
}

impl EdgeDetectionParams {
    fn validate(&self) -> OverlayResult<()> {
        validate_kernel_size(self.kernel_size)?;
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(OverlayError::InvalidParameter(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if !self.low_threshold.is_finite() || !self.high_threshold.is_finite() {
            return Err(OverlayError::InvalidParameter(
                "edge thresholds must be finite".to_string(),
            ));
        }
        if self.low_threshold > self.high_threshold {
            return Err(OverlayError::InvalidParameter(format!(
                "low threshold ({}) must not exceed high threshold ({})",
                self.low_threshold, self.high_threshold
            )));
        }
        Ok(())
    }
}

/// 背景画像のエッジ検出パイプラインを提供するトレイト
pub trait DetectEdges {
    /// Flips (optionally), converts to grayscale, blurs and runs Canny edge detection
    ///
    /// # Returns
    ///
    /// Binary edge map: 255 on edges, 0 elsewhere
    ///
    /// # Errors
    ///
    /// * `OverlayError::EmptyImage` - the image has a zero dimension
    /// * `OverlayError::InvalidParameter` - the kernel size is zero or even,
    ///   sigma is not positive, a threshold is not finite, or the low
    ///   threshold exceeds the high threshold
    fn detect_edges(&self, params: &EdgeDetectionParams) -> OverlayResult<GrayImage>;
}

impl DetectEdges for Image<Rgb<u8>> {
    fn detect_edges(&self, params: &EdgeDetectionParams) -> OverlayResult<GrayImage> {
        validate_non_empty_image(self.width(), self.height())?;
        params.validate()?;

        let gray = if params.flip_horizontal {
            to_grayscale(&flip_horizontal(self))
        } else {
            to_grayscale(self)
        };
        let blurred = gaussian_blur(&gray, params.kernel_size, params.sigma)?;

        Ok(canny_edges(
            &blurred,
            params.low_threshold,
            params.high_threshold,
        ))
    }
}

/// Mirrors an image left to right
pub fn flip_horizontal(image: &Image<Rgb<u8>>) -> Image<Rgb<u8>> {
    imageops::flip_horizontal(image)
}

/// Converts an RGB image to 8-bit luminance
pub fn to_grayscale(image: &Image<Rgb<u8>>) -> GrayImage {
    imageops::grayscale(image)
}

/// Gaussian blur with a `kernel_size` x `kernel_size` kernel of standard deviation `sigma`
///
/// Borders are padded by continuity.
///
/// # Errors
///
/// * `OverlayError::InvalidParameter` - the kernel size is zero or even, or
///   sigma is not positive and finite
pub fn gaussian_blur(
    image: &GrayImage,
    kernel_size: u32,
    sigma: f32,
) -> OverlayResult<GrayImage> {
    let kernel = gaussian_kernel(kernel_size, sigma)?;
    Ok(separable_filter_equal(image, &kernel))
}

/// Normalized 1-D Gaussian with `kernel_size` taps centred on the middle tap
fn gaussian_kernel(kernel_size: u32, sigma: f32) -> OverlayResult<Vec<f32>> {
    validate_kernel_size(kernel_size)?;
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(OverlayError::InvalidParameter(format!(
            "sigma must be positive and finite, got {sigma}"
        )));
    }

    let radius = (kernel_size / 2) as f32;
    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let offset = i as f32 - radius;
            (-(offset * offset) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    kernel.iter_mut().for_each(|weight| *weight /= sum);

    Ok(kernel)
}

fn validate_kernel_size(kernel_size: u32) -> OverlayResult<()> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(OverlayError::InvalidParameter(format!(
            "kernel size must be odd and non-zero, got {kernel_size}"
        )));
    }
    Ok(())
}

/// Canny edge detection with hysteresis thresholds
pub fn canny_edges(image: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(image, low_threshold, high_threshold)
}
