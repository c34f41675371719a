//! Error types for segmentation and recognition.

use thiserror::Error;

use crate::bbox::Aabb;

/// Errors that can occur while segmenting or recognizing a frame.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Raster {width}x{height} needs {expected} bytes, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Raster dimensions {width}x{height} overflow the address space")]
    DimensionOverflow { width: usize, height: usize },

    #[error("Channel {channel} out of range for {bytes_per_pixel} bytes per pixel")]
    ChannelOutOfRange {
        channel: usize,
        bytes_per_pixel: usize,
    },

    #[error("Crop {bounds:?} exceeds raster {width}x{height}")]
    CropOutOfBounds {
        bounds: Aabb,
        width: usize,
        height: usize,
    },

    #[error("Classifier failed: {0}")]
    Classifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
