//! Error type shared by the copy and write helpers.

use std::path::PathBuf;

use image::math::Rect;
use thiserror::Error;

/// Errors that can occur while preparing or writing an image.
#[derive(Error, Debug)]
pub enum HelperError {
    /// The encoder failed, or the file could not be created.
    #[error("failed to write image to {}", .path.display())]
    Write {
        /// Destination that was being written.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A multi-component image was passed where one channel is required.
    #[error("cannot write scaled scalar image from a {channels}-channel input")]
    NotScalar { channels: u8 },

    /// The input does not have enough channels to fill an RGB pixel.
    #[error("cannot build an RGB image from a {channels}-channel input")]
    TooFewChannels { channels: u8 },

    /// The requested region is empty or reaches outside the image.
    #[error("region {region:?} does not fit inside a {width}x{height} image")]
    RegionOutOfBounds {
        region: Rect,
        width: u32,
        height: u32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelperError>;

impl HelperError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = HelperError::NotScalar { channels: 3 };
        assert_eq!(
            err.to_string(),
            "cannot write scaled scalar image from a 3-channel input"
        );

        let err = HelperError::RegionOutOfBounds {
            region: Rect {
                x: 5,
                y: 5,
                width: 10,
                height: 10,
            },
            width: 8,
            height: 8,
        };
        assert!(err.to_string().ends_with("does not fit inside a 8x8 image"));
    }
}
