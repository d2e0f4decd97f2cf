use image::{ImageBuffer, Pixel, math::Rect};
use imageproc::definitions::Image;

/// Returns the region covering the whole of `image`, anchored at the origin.
pub fn largest_possible_region<P: Pixel>(image: &Image<P>) -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: image.width(),
        height: image.height(),
    }
}

/// Copies every pixel of `input` into `output`.
///
/// `output` is first resized to the largest possible region of `input`, so any
/// previous contents and dimensions are discarded. Afterwards the two buffers
/// compare equal but share no storage.
///
/// # Arguments
///
/// * `input` - The image to copy from.
/// * `output` - The destination buffer. It is reallocated only when its
///   dimensions differ from `input`.
///
/// # Examples
///
/// ```
/// use image::{GrayImage, Luma};
/// use image_write_helpers::copy::deep_copy;
///
/// let input = GrayImage::from_pixel(4, 3, Luma([7]));
/// let mut output = GrayImage::new(1, 1);
///
/// deep_copy(&input, &mut output);
///
/// assert_eq!(output.dimensions(), (4, 3));
/// assert_eq!(output, input);
/// ```
pub fn deep_copy<P: Pixel>(input: &Image<P>, output: &mut Image<P>) {
    let region = largest_possible_region(input);
    if output.dimensions() != (region.width, region.height) {
        *output = ImageBuffer::new(region.width, region.height);
    }

    for (dst, src) in output.pixels_mut().zip(input.pixels()) {
        *dst = *src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_region_spans_whole_image() {
        let img = RgbImage::new(12, 5);
        let expected = Rect {
            x: 0,
            y: 0,
            width: 12,
            height: 5,
        };
        assert_eq!(largest_possible_region(&img), expected);
    }

    #[test]
    fn test_copy_resizes_output() {
        let input = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]));
        let mut output = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));

        deep_copy(&input, &mut output);

        assert_eq!(output.dimensions(), (3, 2));
        assert_eq!(output, input);
    }

    #[test]
    fn test_copy_is_independent_of_input() {
        let mut input = GrayImage::from_pixel(2, 2, Luma([10]));
        let mut output = GrayImage::new(2, 2);

        deep_copy(&input, &mut output);
        input.put_pixel(0, 0, Luma([99]));

        assert_eq!(output.get_pixel(0, 0), &Luma([10]));
    }

    #[test]
    fn test_copy_of_empty_image() {
        let input = GrayImage::new(0, 0);
        let mut output = GrayImage::from_pixel(3, 3, Luma([1]));

        deep_copy(&input, &mut output);

        assert_eq!(output.dimensions(), (0, 0));
        assert!(output.as_raw().is_empty());
    }
}
