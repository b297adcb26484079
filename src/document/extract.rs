//! Text sources for PDF and plain text inputs.

use std::path::Path;

use tracing::debug;

use super::TextSource;
use crate::error::{RedactorError, RedactorResult};

/// Reads the text layer of a PDF with `pdf-extract`.
///
/// Scanned PDFs without a text layer produce little or no text; those need an
/// OCR-backed [`TextSource`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn new() -> Self {
        Self
    }

    /// Extracts text from PDF bytes already in memory.
    pub fn extract_from_bytes(&self, bytes: &[u8], origin: &Path) -> RedactorResult<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| RedactorError::TextExtraction {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, input: &Path) -> RedactorResult<String> {
        let bytes = std::fs::read(input).map_err(|e| RedactorError::io(input, e))?;
        let text = self.extract_from_bytes(&bytes, input)?;
        debug!(path = %input.display(), chars = text.len(), "extracted PDF text layer");
        Ok(text)
    }

    fn name(&self) -> &str {
        "PdfText"
    }
}

/// Reads a file as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PlainTextSource {
    fn extract_text(&self, input: &Path) -> RedactorResult<String> {
        let bytes = std::fs::read(input).map_err(|e| RedactorError::io(input, e))?;
        String::from_utf8(bytes).map_err(|e| RedactorError::InvalidInput {
            parameter: input.display().to_string(),
            reason: format!("not valid UTF-8: {}", e.utf8_error()),
        })
    }

    fn name(&self) -> &str {
        "PlainText"
    }
}
