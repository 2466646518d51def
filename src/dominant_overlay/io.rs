use std::path::Path;

use crate::error::ImageIoError;
use crate::Image;
use image::{EncodableLayout, Pixel, PixelWithColorType, Rgb};

/// Decodes the image at `path` into 8-bit RGB
///
/// Any color type the enabled codecs can read is converted to RGB; alpha is dropped.
///
/// # Errors
///
/// * `ImageIoError::Decode` - the file is missing, unreadable or its format
///   is not supported by the enabled codec features
pub fn decode_image<Q: AsRef<Path>>(path: Q) -> Result<Image<Rgb<u8>>, ImageIoError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| ImageIoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_rgb8())
}

/// Encodes `image` to `path`; the format follows the file extension
///
/// # Errors
///
/// * `ImageIoError::Encode` - the extension is unknown, the codec is not
///   enabled, or the file cannot be written
pub fn encode_image<P, Q>(image: &Image<P>, path: Q) -> Result<(), ImageIoError>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    image.save(path).map_err(|source| ImageIoError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "encoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}
