//! Digiscan - digit segmentation for binarized camera frames.
//!
//! The core is a two-pass connected-component labeler backed by a
//! union-find: foreground blobs of a thresholded frame become bounding
//! boxes, boxes near the frame edge or too small to hold a digit are
//! dropped, and the rest are mapped back to display coordinates. Around it
//! sit the pieces the capture pipeline needs to get from a filtered texture
//! to classified digits.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use digiscan::{BinaryRaster, ComponentExtractor};
//!
//! let raster = BinaryRaster::new(&alpha, width, height)?;
//! let regions = ComponentExtractor::new().extract(&raster);
//!
//! for region in &regions {
//!     println!("{:.1} {:.1} {:.1}x{:.1}", region.x, region.y, region.width, region.height);
//! }
//! ```

pub mod bbox;
pub mod channel;
pub mod config;
pub mod crop;
pub mod error;
pub mod extract;
pub mod labeling;
pub mod raster;
pub mod recognize;
pub mod union_find;

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(any(test, feature = "bench"))]
pub mod testing;

pub use bbox::Aabb;
pub use channel::{binarize, extract_channel};
pub use config::ExtractorConfig;
pub use crop::{classifier_input, crop, fit_to_canvas};
pub use error::{Error, Result};
pub use extract::{ComponentExtractor, ExtractionDiagnostics, ExtractionResult, Region};
pub use labeling::LabelMap;
pub use raster::BinaryRaster;
pub use recognize::{Classification, Classifier, Recognition, RecognitionResult, Recognizer};
pub use union_find::DisjointSet;
