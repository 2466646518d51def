mod dominant_overlay;
mod error;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use dominant_overlay::config::HistogramConfig;
pub use dominant_overlay::dominant_color::DominantColor;
pub use dominant_overlay::edges::{
    canny_edges, flip_horizontal, gaussian_blur, to_grayscale, DetectEdges, EdgeDetectionParams,
};
pub use dominant_overlay::histogram::{ColorHistogram, ColorHistogramExt};
pub use dominant_overlay::io::{decode_image, encode_image};
pub use dominant_overlay::overlay::CreateOverlay;
pub use dominant_overlay::substitute::SubstituteColor;
pub use error::{ImageIoError, OverlayError};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Result type used by the histogram, substitution and edge operations
pub type OverlayResult<T> = Result<T, OverlayError>;
