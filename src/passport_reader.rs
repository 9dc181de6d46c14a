use crate::decoding::MrzDecoder;
use crate::models::PassportRecord;
use crate::processing::{ImageProcessor, OcrEngine};
use crate::utils::PassportError;
use log::info;
use std::path::Path;

/// End-to-end pipeline: passport image -> preprocessed MRZ strip -> OCR ->
/// decoded record. The OCR engine is owned by the caller and injected here.
pub struct PassportReader {
    engine: OcrEngine,
}

impl PassportReader {
    pub fn new(engine: OcrEngine) -> Self {
        PassportReader { engine }
    }

    pub fn read(&self, image_path: &Path) -> Result<PassportRecord, PassportError> {
        info!("Processing passport image at {:?}", image_path);
        let processed = ImageProcessor::process_image(image_path)?;

        let lines = self.engine.recognize_mrz_lines(&processed)?;
        info!("OCR recognized {} candidate MRZ line(s)", lines.len());

        MrzDecoder::decode(&lines)
    }
}
