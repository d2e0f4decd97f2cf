//! One-call writers for the image shapes that come up while debugging a
//! pipeline: arbitrary buffers, scalar intensity maps, multi-channel images
//! reduced to RGB, and cropped regions.
//!
//! Every writer picks the file format from the extension of `path`, exactly as
//! [`ImageBuffer::save`] does.

use std::path::Path;

use image::{
    EncodableLayout, ImageBuffer, Luma, Pixel, PixelWithColorType, Primitive, Rgb, RgbImage,
    imageops::crop_imm, math::Rect,
};
use imageproc::definitions::Image;
use num_traits::ToPrimitive;
use tracing::{debug, warn};

use crate::copy::largest_possible_region;
use crate::error::{HelperError, Result};
use crate::rescale::rescale_intensity;

/// Writes `image` to `path` without any conversion.
///
/// # Errors
///
/// Returns [`HelperError::Write`] if the file cannot be created or the format
/// does not support the pixel type.
pub fn write_image<P>(image: &Image<P>, path: impl AsRef<Path>) -> Result<()>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    let path = path.as_ref();
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "writing image"
    );
    image.save(path).map_err(|e| HelperError::write(path, e))
}

/// Rescales a single-channel image onto `[0, 255]` and writes it as 8-bit gray.
///
/// # Errors
///
/// Returns [`HelperError::NotScalar`] without touching the file system when
/// `P` has more than one channel, and [`HelperError::Write`] if encoding fails.
pub fn write_scaled_scalar_image<P>(image: &Image<P>, path: impl AsRef<Path>) -> Result<()>
where
    P: Pixel,
{
    if P::CHANNEL_COUNT > 1 {
        warn!(
            channels = P::CHANNEL_COUNT,
            "cannot write scaled scalar image with vector image input"
        );
        return Err(HelperError::NotScalar {
            channels: P::CHANNEL_COUNT,
        });
    }

    let scalar: Image<Luma<P::Subpixel>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            Luma([image.get_pixel(x, y).channels()[0]])
        });
    write_image(&rescale_intensity(&scalar), path)
}

/// Converts one channel value to `u8`, truncating toward zero and saturating.
///
/// Integer values above 255 clamp to 255 instead of wrapping modulo 256.
fn channel_to_u8<T: Primitive>(value: T) -> u8 {
    match value.to_f64() {
        Some(v) if !v.is_nan() => v.trunc().clamp(0.0, 255.0) as u8,
        _ => 0,
    }
}

/// Builds an 8-bit RGB image from the first three channels of every pixel.
///
/// Channels past the third are dropped. Values outside `[0, 255]` saturate, so
/// a `u16` channel of 300 becomes 255 rather than wrapping to 44.
///
/// # Errors
///
/// Returns [`HelperError::TooFewChannels`] if `P` has fewer than three channels.
///
/// # Examples
///
/// ```
/// use image::{Rgb, Rgba, RgbaImage};
/// use image_write_helpers::write::truncate_to_rgb;
///
/// let rgba = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
/// let rgb = truncate_to_rgb(&rgba).unwrap();
///
/// assert_eq!(rgb.get_pixel(1, 1), &Rgb([10, 20, 30]));
/// ```
pub fn truncate_to_rgb<P>(image: &Image<P>) -> Result<RgbImage>
where
    P: Pixel,
{
    if P::CHANNEL_COUNT < 3 {
        return Err(HelperError::TooFewChannels {
            channels: P::CHANNEL_COUNT,
        });
    }

    Ok(RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let channels = image.get_pixel(x, y).channels();
        Rgb([
            channel_to_u8(channels[0]),
            channel_to_u8(channels[1]),
            channel_to_u8(channels[2]),
        ])
    }))
}

/// Writes the first three channels of `image` as an 8-bit RGB file.
///
/// # Errors
///
/// See [`truncate_to_rgb`] and [`write_image`].
pub fn write_rgb_image<P>(image: &Image<P>, path: impl AsRef<Path>) -> Result<()>
where
    P: Pixel,
{
    let rgb = truncate_to_rgb(image)?;
    write_image(&rgb, path)
}

/// Copies `region` out of `image` into a new buffer whose origin is the
/// region's corner.
///
/// # Arguments
///
/// * `image` - The source image. It is only borrowed.
/// * `region` - The area to copy, in pixel coordinates of `image`. It must have
///   non-zero width and height and lie entirely inside the image.
///
/// # Returns
///
/// A new `region.width` x `region.height` buffer of the same pixel type, where
/// pixel `(0, 0)` is the source pixel `(region.x, region.y)`.
///
/// # Errors
///
/// Returns [`HelperError::RegionOutOfBounds`] if the region has zero area or
/// is not fully contained in the image.
pub fn extract_region<P>(image: &Image<P>, region: Rect) -> Result<Image<P>>
where
    P: Pixel + 'static,
{
    let bounds = largest_possible_region(image);
    let right = region.x.checked_add(region.width);
    let bottom = region.y.checked_add(region.height);

    let inside = matches!(
        (right, bottom),
        (Some(r), Some(b)) if r <= bounds.width && b <= bounds.height
    );
    if region.width == 0 || region.height == 0 || !inside {
        return Err(HelperError::RegionOutOfBounds {
            region,
            width: bounds.width,
            height: bounds.height,
        });
    }

    Ok(crop_imm(image, region.x, region.y, region.width, region.height).to_image())
}

/// Crops `region` out of `image` and writes it with the input's pixel type.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `region` - The area to write; see [`extract_region`] for the bounds rules.
/// * `path` - Destination file. The extension selects the encoder.
///
/// # Errors
///
/// See [`extract_region`] and [`write_image`]. Nothing is written when the
/// region is rejected.
pub fn write_region<P>(image: &Image<P>, region: Rect, path: impl AsRef<Path>) -> Result<()>
where
    P: PixelWithColorType + 'static,
    [P::Subpixel]: EncodableLayout,
{
    let cropped = extract_region(image, region)?;
    write_image(&cropped, path)
}
