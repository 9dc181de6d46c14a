use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    /// The OCR collaborator recognized fewer than the two MRZ lines a TD3
    /// document carries. Nothing is decoded in this case.
    #[error("insufficient input: OCR recognized {lines} MRZ line(s), expected 2")]
    InsufficientInput { lines: usize },

    #[error("Image processing error: {0}")]
    ImageProcessingError(String),

    #[error("OCR error: {0}")]
    OcrError(String),
}
