//! Segment a frame and classify every candidate region.
//!
//! The digit network itself lives outside this crate behind the
//! [`Classifier`] trait. [`Recognizer`] runs extraction, prepares one
//! classifier input per region and calls the classifier synchronously.

use image::GrayImage;
use serde::Serialize;

use crate::channel::{extract_channel, TEXTURE_BYTES_PER_PIXEL};
use crate::crop::classifier_input;
use crate::error::Result;
use crate::extract::{ComponentExtractor, Region};
use crate::raster::BinaryRaster;

/// Output of the digit network for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub digit: u8,
    pub confidence: f32,
}

/// Digit classifier over a `CLASSIFIER_INPUT_SIZE` square grayscale image.
pub trait Classifier {
    fn classify(&self, input: &GrayImage) -> Result<Classification>;
}

impl<F> Classifier for F
where
    F: Fn(&GrayImage) -> Result<Classification>,
{
    fn classify(&self, input: &GrayImage) -> Result<Classification> {
        self(input)
    }
}

/// A classified region together with the image the classifier saw.
#[derive(Debug, Clone)]
pub struct Recognition {
    pub region: Region,
    pub classification: Classification,
    pub input: GrayImage,
}

/// Everything found in one frame.
#[derive(Debug, Clone, Default)]
pub struct RecognitionResult {
    /// All extracted regions, for overlay drawing.
    pub regions: Vec<Region>,
    /// Regions the classifier accepted, in `regions` order.
    pub recognitions: Vec<Recognition>,
}

#[derive(Debug, Clone)]
pub struct Recognizer<C> {
    extractor: ComponentExtractor,
    classifier: C,
}

impl<C: Classifier> Recognizer<C> {
    pub fn new(classifier: C) -> Self {
        Self::with_extractor(ComponentExtractor::new(), classifier)
    }

    pub fn with_extractor(extractor: ComponentExtractor, classifier: C) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    #[inline]
    pub fn extractor(&self) -> &ComponentExtractor {
        &self.extractor
    }

    /// Extract regions from `raster` and classify each one.
    ///
    /// A classifier error drops that region from `recognitions` and is
    /// logged; the remaining regions are still classified.
    pub fn recognize(&self, raster: &BinaryRaster<'_>) -> Result<RecognitionResult> {
        let regions = self.extractor.extract(raster);
        let mut recognitions = Vec::with_capacity(regions.len());

        for region in &regions {
            let input = classifier_input(raster, &region.bounds)?;
            match self.classifier.classify(&input) {
                Ok(classification) => recognitions.push(Recognition {
                    region: *region,
                    classification,
                    input,
                }),
                Err(e) => {
                    tracing::warn!("Skipping region {:?}: {}", region.bounds, e);
                }
            }
        }

        tracing::debug!(
            "Recognized {} of {} regions",
            recognitions.len(),
            regions.len()
        );

        Ok(RecognitionResult {
            regions,
            recognitions,
        })
    }

    /// Recognize digits in a filtered 4-byte-per-pixel texture whose first
    /// channel holds the binarized value.
    pub fn recognize_texture(
        &self,
        texture: &[u8],
        width: usize,
        height: usize,
    ) -> Result<RecognitionResult> {
        let binary = extract_channel(texture, width, height, TEXTURE_BYTES_PER_PIXEL, 0)?;
        let raster = BinaryRaster::new(&binary, width, height)?;
        self.recognize(&raster)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::crop::CLASSIFIER_INPUT_SIZE;
    use crate::error::Error;
    use crate::testing::TestFrame;

    /// Reports the lit pixel count modulo 10 as the digit.
    fn counting_classifier(input: &GrayImage) -> Result<Classification> {
        let lit = input.pixels().filter(|p| p[0] > 127).count();
        Ok(Classification {
            digit: (lit % 10) as u8,
            confidence: 0.9,
        })
    }

    fn two_digit_frame() -> TestFrame {
        let mut frame = TestFrame::new(80, 60);
        frame.fill_rect(10, 10, 19, 29);
        frame.fill_rect(40, 12, 49, 31);
        frame
    }

    #[test]
    fn test_recognize_classifies_each_region() {
        let frame = two_digit_frame();
        let recognizer = Recognizer::new(counting_classifier);

        let result = recognizer.recognize(&frame.raster()).unwrap();

        assert_eq!(result.regions.len(), 2);
        assert_eq!(result.recognitions.len(), 2);
        for (recognition, region) in result.recognitions.iter().zip(&result.regions) {
            assert_eq!(recognition.region, *region);
            assert_eq!(
                recognition.input.dimensions(),
                (CLASSIFIER_INPUT_SIZE, CLASSIFIER_INPUT_SIZE)
            );
            assert_eq!(recognition.classification.confidence, 0.9);
        }
    }

    #[test]
    fn test_recognize_blank_frame() {
        let frame = TestFrame::new(32, 32);
        let calls = Cell::new(0);
        let classifier = |_: &GrayImage| -> Result<Classification> {
            calls.set(calls.get() + 1);
            Ok(Classification {
                digit: 0,
                confidence: 1.0,
            })
        };

        let result = Recognizer::new(classifier).recognize(&frame.raster()).unwrap();

        assert!(result.regions.is_empty());
        assert!(result.recognitions.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_classifier_failure_skips_region() {
        let frame = two_digit_frame();
        let calls = Cell::new(0);
        let classifier = |_: &GrayImage| -> Result<Classification> {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(Error::Classifier("network unavailable".into()))
            } else {
                Ok(Classification {
                    digit: 7,
                    confidence: 0.5,
                })
            }
        };

        let result = Recognizer::new(classifier).recognize(&frame.raster()).unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(result.regions.len(), 2);
        assert_eq!(result.recognitions.len(), 1);
        assert_eq!(result.recognitions[0].classification.digit, 7);
        assert_eq!(result.recognitions[0].region, result.regions[1]);
    }

    #[test]
    fn test_recognize_texture_reads_first_channel() {
        let frame = two_digit_frame();
        let texture: Vec<u8> = frame
            .data
            .iter()
            .flat_map(|&v| [v, 0, 0, 255])
            .collect();
        let recognizer = Recognizer::new(counting_classifier);

        let from_texture = recognizer.recognize_texture(&texture, 80, 60).unwrap();
        let from_raster = recognizer.recognize(&frame.raster()).unwrap();

        assert_eq!(from_texture.regions, from_raster.regions);
    }

    #[test]
    fn test_recognize_texture_rejects_bad_size() {
        let recognizer = Recognizer::new(counting_classifier);
        let err = recognizer.recognize_texture(&[0; 10], 2, 2).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { expected: 16, .. }));
    }
}
