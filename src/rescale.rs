use image::{GrayImage, Luma, Primitive};
use imageproc::definitions::Image;
use num_traits::ToPrimitive;

const OUTPUT_MINIMUM: f64 = 0.0;
const OUTPUT_MAXIMUM: f64 = 255.0;

/// Linear map `(v - minimum) * 255 / span` taking the input intensity range
/// onto `[0, 255]`. A zero `span` sends every value to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IntensityTransform {
    minimum: f64,
    span: f64,
}

impl IntensityTransform {
    fn from_range(min: f64, max: f64) -> Self {
        // A constant non-zero image is divided by its own value, so it still
        // lands on the output minimum.
        let span = if max != min { max - min } else { max };
        Self { minimum: min, span }
    }

    fn apply(&self, value: f64) -> u8 {
        if self.span == 0.0 {
            return OUTPUT_MINIMUM as u8;
        }
        // Dividing last keeps integer endpoints exact, so `max` maps to 255
        // rather than 254.999...
        let mapped =
            (value - self.minimum) * (OUTPUT_MAXIMUM - OUTPUT_MINIMUM) / self.span + OUTPUT_MINIMUM;
        if mapped.is_nan() {
            return OUTPUT_MINIMUM as u8;
        }
        mapped.trunc().clamp(OUTPUT_MINIMUM, OUTPUT_MAXIMUM) as u8
    }
}

/// Stretches a single-channel image of any primitive subpixel type onto the
/// full 8-bit range.
///
/// The smallest finite intensity becomes 0 and the largest becomes 255, with a
/// linear map in between whose result is truncated toward zero. A constant
/// image (including one made only of non-finite values) maps to all zeros.
///
/// # Arguments
///
/// * `image` - A single-channel image. Non-finite values are left out of the
///   min/max search; afterwards NaN maps to 0 and infinities saturate.
///
/// # Returns
///
/// A `GrayImage` with the same dimensions as `image`.
///
/// # Examples
///
/// ```
/// use image::{ImageBuffer, Luma};
/// use image_write_helpers::rescale::rescale_intensity;
///
/// let depth: ImageBuffer<Luma<u16>, Vec<u16>> =
///     ImageBuffer::from_raw(3, 1, vec![1000, 1500, 2000]).unwrap();
///
/// let gray = rescale_intensity(&depth);
///
/// assert_eq!(gray.as_raw(), &vec![0, 127, 255]);
/// ```
pub fn rescale_intensity<T>(image: &Image<Luma<T>>) -> GrayImage
where
    T: Primitive,
{
    let mut range: Option<(f64, f64)> = None;
    for value in image.pixels().filter_map(|p| p.0[0].to_f64()) {
        if !value.is_finite() {
            continue;
        }
        range = Some(match range {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }

    let (min, max) = range.unwrap_or((0.0, 0.0));
    let transform = IntensityTransform::from_range(min, max);

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let value = image.get_pixel(x, y).0[0].to_f64().unwrap_or(f64::NAN);
        Luma([transform.apply(value)])
    })
}
