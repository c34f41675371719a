//! Single-channel rasters from interleaved frames.
//!
//! The filter stage hands back a 4-byte-per-pixel texture whose first byte
//! carries the binarized value. [`extract_channel`] pulls that byte out into
//! the 1-byte-per-pixel layout the extractor consumes.

use crate::error::{Error, Result};

/// Bytes per pixel of the filtered texture read back from the GPU.
pub const TEXTURE_BYTES_PER_PIXEL: usize = 4;

/// Copy byte `channel` of every pixel of an interleaved frame.
pub fn extract_channel(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    channel: usize,
) -> Result<Vec<u8>> {
    if channel >= bytes_per_pixel {
        return Err(Error::ChannelOutOfRange {
            channel,
            bytes_per_pixel,
        });
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(bytes_per_pixel))
        .ok_or(Error::DimensionOverflow { width, height })?;

    if data.len() != expected {
        return Err(Error::SizeMismatch {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    Ok(data
        .chunks_exact(bytes_per_pixel)
        .map(|pixel| pixel[channel])
        .collect())
}

/// 255 where `value >= threshold`, 0 elsewhere.
///
/// CPU stand-in for the GPU threshold filter.
pub fn binarize(gray: &[u8], threshold: u8) -> Vec<u8> {
    gray.iter()
        .map(|&v| if v >= threshold { 255 } else { 0 })
        .collect()
}
