//! Configuration for component extraction.
//!
//! The defaults are the values the capture pipeline was calibrated against:
//! a 5 px edge margin, a 1.2 shrink factor, a minimum normalized area of 10
//! and a half-resolution raster mapped back to display space with a
//! `(2, 5)` offset. Change them together or not at all.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Policy constants for filtering components and mapping them to display
/// coordinates.
///
/// # Example
///
/// ```rust,ignore
/// use digiscan::ExtractorConfig;
///
/// let mut config = ExtractorConfig::default();
/// config.scale = 1.0;
/// config.offset = glam::DVec2::ZERO;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    // -- Filtering --
    /// Components with a bounding-box corner this close to an edge are
    /// rejected as capture artifacts.
    pub boundary_margin: usize,
    /// Raw pixel extents are divided by this before the area test and
    /// before reporting.
    pub shrink_factor: f64,
    /// Minimum normalized `width * height` of an accepted component.
    pub min_area: f64,

    // -- Display mapping --
    /// Raster coordinates are divided by this to reach display space.
    pub scale: f64,
    /// Added to the scaled top-left corner.
    pub offset: DVec2,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            boundary_margin: 5,
            shrink_factor: 1.2,
            min_area: 10.0,
            scale: 2.0,
            offset: DVec2::new(2.0, 5.0),
        }
    }
}

impl ExtractorConfig {
    /// Same filters, but regions reported in raster coordinates.
    pub fn raster_space() -> Self {
        Self {
            scale: 1.0,
            offset: DVec2::ZERO,
            ..Self::default()
        }
    }

    /// Validate the configuration, panicking if invalid.
    pub fn validate(&self) {
        assert!(
            self.shrink_factor.is_finite() && self.shrink_factor > 0.0,
            "shrink_factor must be positive, got {}",
            self.shrink_factor
        );
        assert!(
            self.min_area.is_finite() && self.min_area >= 0.0,
            "min_area must be non-negative, got {}",
            self.min_area
        );
        assert!(
            self.scale.is_finite() && self.scale > 0.0,
            "scale must be positive, got {}",
            self.scale
        );
        assert!(
            self.offset.is_finite(),
            "offset must be finite, got {}",
            self.offset
        );
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_calibration() {
        let config = ExtractorConfig::default();
        assert_eq!(config.boundary_margin, 5);
        assert_eq!(config.shrink_factor, 1.2);
        assert_eq!(config.min_area, 10.0);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.offset, DVec2::new(2.0, 5.0));
        config.validate();
    }

    #[test]
    fn test_raster_space_keeps_filters() {
        let config = ExtractorConfig::raster_space();
        assert_eq!(config.boundary_margin, 5);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.offset, DVec2::ZERO);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ExtractorConfig::from_json(r#"{ "scale": 4.0, "offset": [0.0, 1.5] }"#)
            .unwrap();
        assert_eq!(config.scale, 4.0);
        assert_eq!(config.offset, DVec2::new(0.0, 1.5));
        assert_eq!(config.boundary_margin, 5);
        assert_eq!(config.shrink_factor, 1.2);
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        assert!(ExtractorConfig::from_json(r#"{ "boundary_margin": -3 }"#).is_err());
    }

    #[test]
    #[should_panic(expected = "shrink_factor must be positive")]
    fn test_validate_rejects_zero_shrink() {
        let config = ExtractorConfig {
            shrink_factor: 0.0,
            ..Default::default()
        };
        config.validate();
    }

    #[test]
    #[should_panic(expected = "scale must be positive")]
    fn test_validate_rejects_negative_scale() {
        let config = ExtractorConfig {
            scale: -2.0,
            ..Default::default()
        };
        config.validate();
    }
}
