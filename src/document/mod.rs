//! Collaborators on either side of the redactor.
//!
//! A [`TextSource`] turns an uploaded document into plain text (PDF text
//! layer, a plain text file, or an OCR engine supplied by the caller). A
//! [`DocumentRenderer`] turns final text back into a downloadable document.

pub mod extract;
pub mod render;

pub use extract::{PdfTextSource, PlainTextSource};
pub use render::{wrap_lines, PdfRenderer};

use std::path::Path;

use crate::error::RedactorResult;

/// A4 page width in millimetres.
pub const A4_WIDTH_MM: f32 = 210.0;
/// A4 page height in millimetres.
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Produces plain text from a document on disk.
pub trait TextSource: Send + Sync {
    /// Extracts all text from `input`. The result may contain extraction
    /// noise; it is handed to the redactor as-is.
    fn extract_text(&self, input: &Path) -> RedactorResult<String>;

    /// Returns a human-readable name for this source.
    fn name(&self) -> &str;
}

/// Turns text into a page-formatted document.
pub trait DocumentRenderer: Send + Sync {
    /// Renders `text` and returns the encoded document.
    fn render(&self, text: &str) -> RedactorResult<Vec<u8>>;

    /// Returns a human-readable name for this renderer.
    fn name(&self) -> &str;
}

/// Picks a text source from the file extension: `.pdf` files use the text
/// layer, everything else is read as UTF-8 text.
pub fn source_for_path(path: &Path) -> Box<dyn TextSource> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => Box::new(PdfTextSource::new()),
        _ => Box::new(PlainTextSource::new()),
    }
}
