//! Redaction pipeline and the service that feeds it documents.
//!
//! [`Redactor`] is the pure text-to-text core. [`RedactionService`] wires it
//! to a [`TextSource`] on the way in and, for PDF output, a
//! [`DocumentRenderer`] on the way out.

pub mod redactor;

pub use redactor::{redact, RedactionOutcome, RedactionReport, Redactor, StageCount};

use std::path::Path;

use tracing::info;

use crate::config::RedactorConfig;
use crate::document::{source_for_path, DocumentRenderer, PdfRenderer, TextSource};
use crate::error::{RedactorError, RedactorResult};

/// Output format chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Pdf,
}

impl OutputFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Self::Pdf,
            _ => Self::Text,
        }
    }
}

/// Redaction service coordinating extraction, redaction and rendering.
pub struct RedactionService {
    redactor: Redactor,
    renderer: Box<dyn DocumentRenderer>,
}

impl RedactionService {
    /// Creates a service from a redactor and a renderer for PDF output.
    pub fn new(redactor: Redactor, renderer: Box<dyn DocumentRenderer>) -> Self {
        Self { redactor, renderer }
    }

    /// Builds the redactor and renderer described by `config`.
    pub fn from_config(config: &RedactorConfig) -> RedactorResult<Self> {
        Ok(Self::new(
            config.build_redactor()?,
            Box::new(PdfRenderer::from_config(&config.render)),
        ))
    }

    /// Service over the built-in rules with default rendering.
    pub fn with_defaults() -> RedactorResult<Self> {
        Self::from_config(&RedactorConfig::default())
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Redacts text already in memory.
    pub fn redact_text(&self, text: &str) -> RedactorResult<RedactionOutcome> {
        self.redactor.redact_with_report(text)
    }

    /// Extracts the text of `input`, redacts it, and writes it to `output`.
    ///
    /// `.pdf` outputs are rendered as a document; anything else receives the
    /// redacted text as UTF-8.
    pub fn redact_file(&self, input: &Path, output: &Path) -> RedactorResult<RedactionReport> {
        let source = source_for_path(input);
        let text = self.extract_text(input, source.as_ref())?;
        let outcome = self.redact_text(&text)?;

        match OutputFormat::for_path(output) {
            OutputFormat::Pdf => self.render_to(&outcome.text, output)?,
            OutputFormat::Text => {
                std::fs::write(output, &outcome.text)
                    .map_err(|e| RedactorError::io(output, e))?;
            }
        }

        info!(
            input = %input.display(),
            output = %output.display(),
            source = source.name(),
            replaced = outcome.report.total_replaced(),
            "redacted document"
        );
        Ok(outcome.report)
    }

    /// Extracts text from `input` using the source picked by its extension.
    pub fn extract_text(&self, input: &Path, source: &dyn TextSource) -> RedactorResult<String> {
        if !input.exists() {
            return Err(RedactorError::io(
                input,
                std::io::Error::new(std::io::ErrorKind::NotFound, "Input file does not exist"),
            ));
        }
        source.extract_text(input)
    }

    /// Renders `text` as a document and writes it to `output`.
    pub fn render_to(&self, text: &str, output: &Path) -> RedactorResult<()> {
        let bytes = self.renderer.render(text)?;
        std::fs::write(output, &bytes).map_err(|e| RedactorError::io(output, e))?;
        info!(output = %output.display(), bytes = bytes.len(), "rendered document");
        Ok(())
    }
}
