//! Rule-based PII redaction for extracted document text.
//!
//! The core is a fixed, ordered pipeline: regex rules for structured
//! identifiers (emails, phone numbers, Aadhaar and PAN numbers, PIN codes,
//! dates, insurance IDs, medical record numbers), followed by whole-word
//! keyword passes for address terms and personal names. Every match is
//! replaced with a fixed label such as `[REDACTED PHONE]`.
//!
//! The pipeline does no semantic validation: a ten digit run is a phone
//! number whether or not it could be dialled.
//!
//! # Architecture
//!
//! - [`domain`]: rule tables and the stages compiled from them
//! - [`redaction`]: the [`Redactor`] pipeline and the file-level service
//! - [`document`]: PDF text extraction and PDF rendering collaborators
//! - [`config`]: TOML configuration
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```
//! use pii_redactor::redact;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(redact("Call 9876543210")?, "Call [REDACTED PHONE]");
//! assert_eq!(redact("DOB 12-08-1990")?, "DOB [REDACTED DATE]");
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Rules
//!
//! ```
//! use pii_redactor::{Boundary, PatternRule, Redactor, RuleSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSet {
//!     patterns: vec![PatternRule::new("ticket", r"TKT-\d+", "[TICKET]", Boundary::Pattern)],
//!     ..RuleSet::empty()
//! };
//! let redactor = Redactor::new(&rules)?;
//! assert_eq!(redactor.redact("see TKT-881")?, "see [TICKET]");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod redaction;

pub use config::{RedactorConfig, RenderConfig, RulesConfig};
pub use document::{DocumentRenderer, PdfRenderer, PdfTextSource, PlainTextSource, TextSource};
pub use domain::{
    labels, Boundary, KeywordStage, Pass, PatternRule, PatternStage, RuleSet, Stage,
};
pub use error::{RedactorError, RedactorResult};
pub use redaction::{
    redact, OutputFormat, RedactionOutcome, RedactionReport, RedactionService, Redactor,
};
