//! Borrowed view over a binarized single-channel frame.

use crate::error::{Error, Result};

/// One byte per pixel, row-major. Zero is background, anything else is
/// foreground.
#[derive(Debug, Clone, Copy)]
pub struct BinaryRaster<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> BinaryRaster<'a> {
    /// Wrap `data` as a `width` x `height` raster.
    ///
    /// Fails if `data.len()` is not exactly `width * height`; the buffer is
    /// never truncated or padded.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(Error::DimensionOverflow { width, height })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }
}
