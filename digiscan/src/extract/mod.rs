//! Component extraction: labeling, filtering and display mapping.
//!
//! Turns a [`BinaryRaster`] into [`Region`]s, one per connected foreground
//! component that survives two filters:
//! - **Boundary**: the min or max corner of the bounding box lies within
//!   `boundary_margin` of an edge. Only the two corners are tested, not the
//!   whole box.
//! - **Area**: the shrunk extents `(max - min) / shrink_factor` multiply to
//!   less than `min_area`.
//!
//! Survivors are mapped to display space by `min / scale + offset`.


use rayon::prelude::*;
use serde::Serialize;

use crate::bbox::Aabb;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::labeling::LabelMap;
use crate::raster::BinaryRaster;

/// A candidate digit region in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Bounding box of the component in raster pixels.
    pub bounds: Aabb,
}

/// Counts from each extraction stage, for tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionDiagnostics {
    /// Provisional labels opened by the first labeling pass.
    pub provisional_labels: usize,
    /// Connected components after label resolution.
    pub components: usize,
    /// Components with a bounding-box corner inside the edge margin.
    pub rejected_boundary: usize,
    /// Components below the minimum normalized area.
    pub rejected_area: usize,
    /// Regions returned.
    pub accepted: usize,
}

/// Regions plus stage counts.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub regions: Vec<Region>,
    pub diagnostics: ExtractionDiagnostics,
}

/// Outcome of filtering one component.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Accept(Region),
    Boundary,
    Area,
}

// =============================================================================
// ComponentExtractor
// =============================================================================

/// Extracts candidate digit regions from binarized frames.
///
/// Holds only configuration; every call allocates its own label grid and
/// disjoint-set, so one extractor can serve many threads.
///
/// # Example
///
/// ```rust,ignore
/// use digiscan::{BinaryRaster, ComponentExtractor};
///
/// let raster = BinaryRaster::new(&alpha, width, height)?;
/// let regions = ComponentExtractor::new().extract(&raster);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentExtractor {
    config: ExtractorConfig,
}

impl ComponentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// If `config` fails [`ExtractorConfig::validate`].
    pub fn from_config(config: ExtractorConfig) -> Self {
        config.validate();
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Regions of all accepted components, ascending by canonical label.
    pub fn extract(&self, raster: &BinaryRaster<'_>) -> Vec<Region> {
        self.extract_with_diagnostics(raster).regions
    }

    /// Validate `data` as a `width` x `height` raster, then extract.
    pub fn extract_bytes(&self, data: &[u8], width: usize, height: usize) -> Result<Vec<Region>> {
        let raster = BinaryRaster::new(data, width, height)?;
        Ok(self.extract(&raster))
    }

    pub fn extract_with_diagnostics(&self, raster: &BinaryRaster<'_>) -> ExtractionResult {
        let label_map = LabelMap::from_raster(raster);

        let mut diagnostics = ExtractionDiagnostics {
            provisional_labels: label_map.num_provisional(),
            ..Default::default()
        };
        let mut regions = Vec::new();

        for (_, bbox) in label_map.components() {
            diagnostics.components += 1;
            match self.judge(&bbox, raster.width(), raster.height()) {
                Verdict::Accept(region) => regions.push(region),
                Verdict::Boundary => diagnostics.rejected_boundary += 1,
                Verdict::Area => diagnostics.rejected_area += 1,
            }
        }
        diagnostics.accepted = regions.len();

        tracing::debug!(
            "Extracted {} regions from {}x{} raster ({} components, {} at boundary, {} too small)",
            diagnostics.accepted,
            raster.width(),
            raster.height(),
            diagnostics.components,
            diagnostics.rejected_boundary,
            diagnostics.rejected_area
        );

        ExtractionResult {
            regions,
            diagnostics,
        }
    }

    /// Extract every raster in parallel. Output order matches input order.
    pub fn extract_all(&self, rasters: &[BinaryRaster<'_>]) -> Vec<Vec<Region>> {
        rasters.par_iter().map(|raster| self.extract(raster)).collect()
    }

    fn judge(&self, bbox: &Aabb, width: usize, height: usize) -> Verdict {
        let margin = self.config.boundary_margin;
        if is_boundary_point(bbox.x_min, bbox.y_min, width, height, margin)
            || is_boundary_point(bbox.x_max, bbox.y_max, width, height, margin)
        {
            return Verdict::Boundary;
        }

        let shrink = self.config.shrink_factor;
        let region_width = bbox.extent_x() as f64 / shrink;
        let region_height = bbox.extent_y() as f64 / shrink;
        if region_width * region_height < self.config.min_area {
            return Verdict::Area;
        }

        let scale = self.config.scale;
        let offset = self.config.offset;
        Verdict::Accept(Region {
            x: bbox.x_min as f64 / scale + offset.x,
            y: bbox.y_min as f64 / scale + offset.y,
            width: region_width,
            height: region_height,
            bounds: *bbox,
        })
    }
}

/// True if `(x, y)` lies within `margin` of any edge of a `width` x `height`
/// raster. `x < width` and `y < height` must hold.
#[inline]
fn is_boundary_point(x: usize, y: usize, width: usize, height: usize, margin: usize) -> bool {
    x <= margin || width - x <= margin || y <= margin || height - y <= margin
}
