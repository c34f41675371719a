//! Classifier input preparation.
//!
//! Each accepted component is cut out of the raster and aspect-fitted into a
//! `DIGIT_FIT_SIZE` box anchored at the top-left of a black
//! `CLASSIFIER_INPUT_SIZE` square, the layout the digit network was trained
//! on.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};

use crate::bbox::Aabb;
use crate::error::{Error, Result};
use crate::raster::BinaryRaster;

/// Side of the square image the classifier consumes.
pub const CLASSIFIER_INPUT_SIZE: u32 = 28;

/// Longest side of the digit inside the classifier input.
pub const DIGIT_FIT_SIZE: u32 = 24;

/// Copy the inclusive rectangle `bounds` out of `raster`.
pub fn crop(raster: &BinaryRaster<'_>, bounds: &Aabb) -> Result<GrayImage> {
    if bounds.x_max >= raster.width() || bounds.y_max >= raster.height() {
        return Err(Error::CropOutOfBounds {
            bounds: *bounds,
            width: raster.width(),
            height: raster.height(),
        });
    }

    let data = raster.data();
    let stride = raster.width();
    Ok(GrayImage::from_fn(
        bounds.width() as u32,
        bounds.height() as u32,
        |x, y| {
            let src_x = bounds.x_min + x as usize;
            let src_y = bounds.y_min + y as usize;
            Luma([data[src_y * stride + src_x]])
        },
    ))
}

/// Scale `image` so its longer side is `fit_size`, keep the aspect ratio,
/// and center it inside the `fit_size` box at the origin of a black
/// `canvas_size` square.
///
/// # Panics
/// If `fit_size` is 0 or larger than `canvas_size`.
pub fn fit_to_canvas(image: &GrayImage, fit_size: u32, canvas_size: u32) -> GrayImage {
    assert!(
        fit_size > 0 && fit_size <= canvas_size,
        "fit_size ({}) must be in 1..={}",
        fit_size,
        canvas_size
    );

    let mut canvas = GrayImage::new(canvas_size, canvas_size);
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return canvas;
    }

    let scale = fit_size as f64 / width.max(height) as f64;
    let fit_width = ((width as f64 * scale).round() as u32).clamp(1, fit_size);
    let fit_height = ((height as f64 * scale).round() as u32).clamp(1, fit_size);

    let resized = imageops::resize(image, fit_width, fit_height, FilterType::Triangle);
    let left = (fit_size - fit_width) / 2;
    let top = (fit_size - fit_height) / 2;
    imageops::overlay(&mut canvas, &resized, left as i64, top as i64);

    canvas
}

/// Crop `bounds` and fit it into a standard classifier input.
pub fn classifier_input(raster: &BinaryRaster<'_>, bounds: &Aabb) -> Result<GrayImage> {
    let cropped = crop(raster, bounds)?;
    Ok(fit_to_canvas(
        &cropped,
        DIGIT_FIT_SIZE,
        CLASSIFIER_INPUT_SIZE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFrame;

    #[test]
    fn test_crop_copies_inclusive_bounds() {
        let frame = TestFrame::from_art(&["......", ".##...", ".#....", "......"]);
        let cropped = crop(&frame.raster(), &Aabb::new(1, 2, 1, 2)).unwrap();

        assert_eq!(cropped.dimensions(), (2, 2));
        assert_eq!(cropped.as_raw(), &vec![255, 255, 255, 0]);
    }

    #[test]
    fn test_crop_rejects_out_of_bounds() {
        let frame = TestFrame::new(10, 8);
        let err = crop(&frame.raster(), &Aabb::new(2, 10, 0, 3)).unwrap_err();
        assert!(matches!(err, Error::CropOutOfBounds { width: 10, .. }));

        assert!(crop(&frame.raster(), &Aabb::new(0, 9, 0, 8)).is_err());
        assert!(crop(&frame.raster(), &Aabb::new(0, 9, 0, 7)).is_ok());
    }

    #[test]
    fn test_fit_tall_digit() {
        // 10x20 solid block fits as 12x24, centered horizontally in the box.
        let block = GrayImage::from_pixel(10, 20, Luma([255]));
        let canvas = fit_to_canvas(&block, DIGIT_FIT_SIZE, CLASSIFIER_INPUT_SIZE);

        assert_eq!(canvas.dimensions(), (28, 28));
        assert!(canvas.get_pixel(12, 12)[0] >= 250);
        assert!(canvas.get_pixel(6, 0)[0] >= 250);
        assert!(canvas.get_pixel(17, 23)[0] >= 250);
        assert_eq!(canvas.get_pixel(5, 12)[0], 0);
        assert_eq!(canvas.get_pixel(18, 12)[0], 0);
        // Outside the fit box.
        assert_eq!(canvas.get_pixel(12, 25)[0], 0);
        assert_eq!(canvas.get_pixel(26, 5)[0], 0);
    }

    #[test]
    fn test_fit_wide_digit() {
        let block = GrayImage::from_pixel(24, 6, Luma([255]));
        let canvas = fit_to_canvas(&block, DIGIT_FIT_SIZE, CLASSIFIER_INPUT_SIZE);

        // Scale 1: rows 9..15 inside the box are lit.
        assert!(canvas.get_pixel(0, 9)[0] >= 250);
        assert!(canvas.get_pixel(23, 14)[0] >= 250);
        assert_eq!(canvas.get_pixel(10, 8)[0], 0);
        assert_eq!(canvas.get_pixel(10, 15)[0], 0);
    }

    #[test]
    fn test_fit_empty_image_gives_black_canvas() {
        let canvas = fit_to_canvas(&GrayImage::new(0, 5), 24, 28);
        assert!(canvas.pixels().all(|p| p[0] == 0));
    }

    #[test]
    #[should_panic(expected = "fit_size")]
    fn test_fit_rejects_oversized_box() {
        fit_to_canvas(&GrayImage::new(3, 3), 30, 28);
    }

    #[test]
    fn test_classifier_input_from_raster() {
        let mut frame = TestFrame::new(40, 40);
        frame.fill_rect(10, 8, 19, 27);
        let input = classifier_input(&frame.raster(), &Aabb::new(10, 19, 8, 27)).unwrap();

        assert_eq!(input.dimensions(), (CLASSIFIER_INPUT_SIZE, CLASSIFIER_INPUT_SIZE));
        assert!(input.get_pixel(12, 12)[0] >= 250);

        let path = common::test_utils::test_output_path("crop", "classifier_input.png");
        input.save(&path).unwrap();
    }
}
