//! Synthetic frames for tests and benchmarks.

use crate::raster::BinaryRaster;

/// Owned binary frame that tests draw into.
#[derive(Debug, Clone)]
pub struct TestFrame {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl TestFrame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height],
            width,
            height,
        }
    }

    /// Parse ASCII art: `#` is foreground, anything else background.
    pub fn from_art(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut frame = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged art row {}", y);
            for (x, c) in row.bytes().enumerate() {
                if c == b'#' {
                    frame.set(x, y);
                }
            }
        }
        frame
    }

    pub fn set(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 255;
    }

    /// Fill the inclusive rectangle `[x0, x1] x [y0, y1]`.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> &mut Self {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y);
            }
        }
        self
    }

    pub fn raster(&self) -> BinaryRaster<'_> {
        BinaryRaster::new(&self.data, self.width, self.height)
            .expect("TestFrame buffer always matches its dimensions")
    }
}

/// Frame filled with squares of side `size` on a regular grid, separated by
/// `gap` background pixels and kept `margin` pixels away from every edge.
pub fn square_grid(width: usize, height: usize, size: usize, gap: usize, margin: usize) -> TestFrame {
    let mut frame = TestFrame::new(width, height);
    let step = size + gap;
    let mut y = margin;
    while y + size + margin <= height {
        let mut x = margin;
        while x + size + margin <= width {
            frame.fill_rect(x, y, x + size - 1, y + size - 1);
            x += step;
        }
        y += step;
    }
    frame
}
