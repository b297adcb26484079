//! PDF rendering with `printpdf`.
//!
//! Text is laid out like a multi-line cell: paragraphs are word-wrapped to the
//! printable width and flow onto new A4 pages as needed. Helvetica has no
//! metrics available here, so the line width is estimated from an average
//! glyph width of half an em.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use super::{DocumentRenderer, A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::config::RenderConfig;
use crate::error::{RedactorError, RedactorResult};

const PT_TO_MM: f32 = 25.4 / 72.0;
const AVG_GLYPH_EM: f32 = 0.5;

/// Renders text onto A4 pages using the built-in Helvetica font.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    settings: RenderConfig,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    pub fn from_config(settings: &RenderConfig) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Estimated number of characters that fit on one line.
    pub fn chars_per_line(&self) -> usize {
        let usable = A4_WIDTH_MM - 2.0 * self.settings.margin_mm;
        let glyph = self.settings.font_size * AVG_GLYPH_EM * PT_TO_MM;
        ((usable / glyph).floor() as usize).max(1)
    }

    /// Number of lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = A4_HEIGHT_MM - 2.0 * self.settings.margin_mm;
        ((usable / self.settings.line_height_mm).floor() as usize).max(1)
    }

    /// Splits `text` into pages of wrapped lines. Always returns at least one
    /// page.
    pub fn paginate(&self, text: &str) -> Vec<Vec<String>> {
        let lines = wrap_lines(text, self.chars_per_line());
        if lines.is_empty() {
            return vec![Vec::new()];
        }
        lines
            .chunks(self.lines_per_page())
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, text: &str) -> RedactorResult<Vec<u8>> {
        let settings = &self.settings;
        let pages = self.paginate(text);

        let (doc, first_page, first_layer) = PdfDocument::new(
            &settings.title,
            Mm(A4_WIDTH_MM),
            Mm(A4_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RedactorError::Rendering {
                message: format!("Failed to load Helvetica: {}", e),
            })?;

        let top = A4_HEIGHT_MM - settings.margin_mm - settings.font_size * PT_TO_MM;
        for (index, lines) in pages.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1")
            };
            let current_layer = doc.get_page(page).get_layer(layer);

            for (row, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let y = top - row as f32 * settings.line_height_mm;
                current_layer.use_text(
                    line.as_str(),
                    settings.font_size,
                    Mm(settings.margin_mm),
                    Mm(y),
                    &font,
                );
            }
        }

        let bytes = doc.save_to_bytes().map_err(|e| RedactorError::Rendering {
            message: format!("Failed to serialize PDF: {}", e),
        })?;
        debug!(pages = pages.len(), bytes = bytes.len(), "rendered PDF");
        Ok(bytes)
    }

    fn name(&self) -> &str {
        "Pdf"
    }
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Every input line (including blank ones) starts a new output line. Words
/// longer than `width` are broken across lines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            if line_len > 0 && line_len + 1 + word.len() > width {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            while word.len() > width {
                if line_len > 0 {
                    out.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                out.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line_len += word.len();
            line.extend(word);
        }

        out.push(line);
    }

    out
}
