use crate::utils::PassportError;
use image::imageops::FilterType;
use image::{DynamicImage, ImageOutputFormat};
use imageproc::contrast::{otsu_level, threshold};
use std::io::Cursor;
use std::path::Path;

// Nominal dimensions of the MRZ strip handed to OCR.
const MRZ_STRIP_WIDTH: u32 = 1110;
const MRZ_STRIP_HEIGHT: u32 = 140;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Load an image and return PNG-encoded pixels of the preprocessed MRZ
    /// strip, ready for the OCR engine.
    pub fn process_image(image_path: &Path) -> Result<Vec<u8>, PassportError> {
        let img = image::open(image_path).map_err(|e| {
            PassportError::ImageProcessingError(format!("Failed to open image: {}", e))
        })?;
        Self::preprocess(&img)
    }

    /// Resize to the nominal strip dimensions, grayscale, and binarize.
    pub fn preprocess(img: &DynamicImage) -> Result<Vec<u8>, PassportError> {
        let resized = img.resize_exact(MRZ_STRIP_WIDTH, MRZ_STRIP_HEIGHT, FilterType::Triangle);
        let gray = resized.to_luma8();
        let binarized = threshold(&gray, otsu_level(&gray));

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(binarized)
            .write_to(&mut buffer, ImageOutputFormat::Png)
            .map_err(|e| {
                PassportError::ImageProcessingError(format!("Failed to encode image: {}", e))
            })?;
        Ok(buffer.into_inner())
    }
}
