//! Connected component labeling using union-find.
//!
//! Two raster-scan passes over a [`BinaryRaster`]:
//! 1. Forward scan looking only at the top and left neighbors. A pixel with
//!    no labeled neighbor opens a new provisional label; a pixel with both
//!    inherits the top label and records that top and left are equivalent.
//! 2. Every provisional label is replaced by its canonical root, and the
//!    root's bounding box is grown to include the pixel.
//!
//! Diagonal contact never joins two components.


use common::Buffer2;

use crate::bbox::Aabb;
use crate::raster::BinaryRaster;
use crate::union_find::DisjointSet;

/// Label of background pixels.
pub const UNLABELED: u32 = u32::MAX;

// ============================================================================
// LabelMap
// ============================================================================

/// A 2D label map plus per-component bounding boxes.
#[derive(Debug)]
pub struct LabelMap {
    labels: Buffer2<u32>,
    num_provisional: usize,
    // Indexed by canonical label. `None` for labels that were merged away.
    boxes: Vec<Option<Aabb>>,
}

impl LabelMap {
    /// Label all foreground pixels of `raster`.
    pub fn from_raster(raster: &BinaryRaster<'_>) -> Self {
        let mut labels = Buffer2::new_filled(raster.width(), raster.height(), UNLABELED);

        let mut uf = label_provisional(raster, &mut labels);
        let num_provisional = uf.len();
        let boxes = resolve_labels(&mut labels, &mut uf);

        Self {
            labels,
            num_provisional,
            boxes,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.labels.height()
    }

    /// Canonical labels, row-major. Background is [`UNLABELED`].
    #[inline]
    pub fn labels(&self) -> &[u32] {
        self.labels.pixels()
    }

    /// Canonical label at `(x, y)`, `None` for background.
    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> Option<u32> {
        let label = self.labels[(x, y)];
        (label != UNLABELED).then_some(label)
    }

    /// Number of provisional labels handed out by the first pass.
    #[inline]
    pub fn num_provisional(&self) -> usize {
        self.num_provisional
    }

    /// Number of connected components (excluding background).
    pub fn num_components(&self) -> usize {
        self.boxes.iter().flatten().count()
    }

    /// Bounding box of every component, ascending by canonical label.
    pub fn components(&self) -> impl Iterator<Item = (u32, Aabb)> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter_map(|(label, bbox)| bbox.map(|b| (label as u32, b)))
    }
}

// ============================================================================
// Passes
// ============================================================================

/// First pass: assign provisional labels and record equivalences.
fn label_provisional(raster: &BinaryRaster<'_>, labels: &mut Buffer2<u32>) -> DisjointSet {
    let width = raster.width();
    let height = raster.height();
    let mut uf = DisjointSet::with_capacity(width.max(16));

    for y in 0..height {
        for x in 0..width {
            if !raster.is_foreground(x, y) {
                continue;
            }

            let top = if y > 0 { labels[(x, y - 1)] } else { UNLABELED };
            let left = if x > 0 { labels[(x - 1, y)] } else { UNLABELED };

            labels[(x, y)] = match (top != UNLABELED, left != UNLABELED) {
                (false, false) => uf.make_set(),
                (true, false) => top,
                (false, true) => left,
                (true, true) => {
                    uf.union(top, left);
                    top
                }
            };
        }
    }

    uf
}

/// Second pass: rewrite labels to their roots and grow each root's box.
fn resolve_labels(labels: &mut Buffer2<u32>, uf: &mut DisjointSet) -> Vec<Option<Aabb>> {
    let width = labels.width();
    let height = labels.height();
    let mut boxes: Vec<Option<Aabb>> = vec![None; uf.len()];

    for y in 0..height {
        for x in 0..width {
            let provisional = labels[(x, y)];
            if provisional == UNLABELED {
                continue;
            }

            let root = uf.find(provisional);
            labels[(x, y)] = root;

            boxes[root as usize]
                .get_or_insert(Aabb::from_point(x, y))
                .include(x, y);
        }
    }

    boxes
}
