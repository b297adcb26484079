//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration suites: sample records, temp file
//! helpers and PDF inspection.

#![allow(dead_code)]

use anyhow::Result;
use pii_redactor::{labels, DocumentRenderer, PdfRenderer};
use std::path::{Path, PathBuf};

/// A patient intake note touching every built-in rule.
pub const INTAKE_NOTE: &str = "\
Patient: Ramesh Kumar
Email: ramesh.k@example.co.in
Mobile: +919876543210
Landline: 044-245-6789
Aadhaar: 1234 5678 9012
PAN: ABCDE1234F
Address: 12 Anna Nagar Main Road, Chennai 600040
DOB: 12/08/1990
Admitted: 2024/1/5
MRN-55821, policy INS77120, ref 45678";

/// Every label written by the built-in rules.
pub fn all_labels() -> Vec<&'static str> {
    vec![
        labels::EMAIL,
        labels::PHONE,
        labels::AADHAAR,
        labels::PAN,
        labels::PIN,
        labels::DATE,
        labels::INSURANCE_ID,
        labels::MRN,
        labels::ADDRESS,
        labels::NAME,
    ]
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// Renders `text` to a PDF at `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    let bytes = PdfRenderer::new().render(text)?;
    write_file(dir, name, &bytes)
}

/// Extracts text from a PDF, returning an error instead of panicking.
pub fn extract_text(pdf_path: &Path) -> Result<String> {
    pdf_extract::extract_text(pdf_path)
        .map_err(|e| anyhow::anyhow!("Failed to extract text: {}", e))
}

/// Number of pages in a PDF, checked through `lopdf`.
pub fn page_count(bytes: &[u8]) -> Result<usize> {
    let doc = lopdf::Document::load_mem(bytes)?;
    Ok(doc.get_pages().len())
}
