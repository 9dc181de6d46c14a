use crate::utils::PassportError;
use log::debug;
use std::io::Write;
use tempfile::NamedTempFile;
use tesseract::Tesseract;

/// Character repertoire of the machine readable zone.
pub const MRZ_CHAR_WHITELIST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789<";

// Real MRZ lines are 44 characters; anything much shorter is page furniture
// the OCR engine picked up around the zone.
const MIN_CANDIDATE_LENGTH: usize = 30;

/// OCR collaborator for the MRZ strip.
///
/// Constructed once by the calling layer and passed into whatever
/// orchestrates decoding; there is no process-wide engine.
pub struct OcrEngine {
    language: String,
    datapath: Option<String>,
}

impl OcrEngine {
    pub fn new() -> Self {
        OcrEngine {
            language: "eng".to_string(),
            datapath: None,
        }
    }

    /// Point the engine at a non-default tessdata directory.
    pub fn with_datapath(mut self, datapath: impl Into<String>) -> Self {
        self.datapath = Some(datapath.into());
        self
    }

    /// Run OCR over a preprocessed MRZ strip and return the candidate MRZ
    /// lines in reading order. May return fewer than two lines; deciding
    /// what that means is the decoder's job.
    pub fn recognize_mrz_lines(&self, image_data: &[u8]) -> Result<Vec<String>, PassportError> {
        let mut temp_file = NamedTempFile::new()
            .map_err(|e| PassportError::OcrError(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(image_data)
            .map_err(|e| PassportError::OcrError(format!("Failed to write temp file: {}", e)))?;

        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| PassportError::OcrError("Non-UTF-8 temp file path".to_string()))?;

        let text = Tesseract::new(self.datapath.as_deref(), Some(&self.language))
            .map_err(|e| PassportError::OcrError(format!("Tesseract init error: {}", e)))?
            .set_image(image_path)
            .map_err(|e| PassportError::OcrError(format!("Tesseract set image error: {}", e)))?
            .set_variable("tessedit_char_whitelist", MRZ_CHAR_WHITELIST)
            .map_err(|e| PassportError::OcrError(format!("Tesseract set variable error: {}", e)))?
            .get_text()
            .map_err(|e| PassportError::OcrError(format!("Tesseract error: {}", e)))?;

        debug!("MRZ OCR result:\n{}", text);

        Ok(filter_mrz_lines(&text))
    }
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only the recognized lines that plausibly belong to the machine
/// readable zone.
pub fn filter_mrz_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_CANDIDATE_LENGTH && line.contains('<'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_mrz_shaped_lines() {
        let text = "PASSPORT\n\nP<UTODOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<\nL898902C36UTO7408122F1204159ZE184226B<<<<<10\nsignature";
        let lines = filter_mrz_lines(text);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("P<UTO"));
        assert!(lines[1].starts_with("L898902C3"));
    }

    #[test]
    fn test_filter_drops_long_lines_without_filler() {
        let text = "THIS LINE IS LONG BUT HAS NO FILLER CHARACTER AT ALL";
        assert!(filter_mrz_lines(text).is_empty());
    }

    #[test]
    fn test_filter_trims_surrounding_whitespace() {
        let text = "  P<UTODOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<  ";
        let lines = filter_mrz_lines(text);
        assert_eq!(lines, vec!["P<UTODOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<"]);
    }
}
