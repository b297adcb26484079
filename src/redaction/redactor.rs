//! The redaction pipeline.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::domain::{RuleSet, Stage};
use crate::error::{RedactorError, RedactorResult};

/// Replacement count for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub stage: String,
    pub label: String,
    pub replaced: usize,
}

/// Statistics about one redaction call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionReport {
    /// One entry per stage, in pipeline order.
    pub stages: Vec<StageCount>,
    pub input_len: usize,
    pub output_len: usize,
}

impl RedactionReport {
    /// Total number of substrings replaced across all stages.
    pub fn total_replaced(&self) -> usize {
        self.stages.iter().map(|s| s.replaced).sum()
    }

    /// Returns true if any redactions were applied.
    pub fn has_redactions(&self) -> bool {
        self.total_replaced() > 0
    }

    /// Replacement count for the named stage, if it ran.
    pub fn replaced_by(&self, stage: &str) -> Option<usize> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.replaced)
    }
}

/// Redacted text plus the statistics that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionOutcome {
    pub text: String,
    pub report: RedactionReport,
}

/// Ordered pipeline of redaction stages.
///
/// A `Redactor` is immutable once built and holds no per-call state, so one
/// instance can be shared freely across threads.
pub struct Redactor {
    stages: Vec<Box<dyn Stage>>,
    max_input_bytes: Option<usize>,
}

static BUILTIN: Lazy<Redactor> = Lazy::new(|| {
    Redactor::new(&RuleSet::default()).expect("Valid built-in redaction rules")
});

impl Redactor {
    /// Compiles `rules` into an unbounded redactor.
    pub fn new(rules: &RuleSet) -> RedactorResult<Self> {
        Ok(Self::from_stages(rules.compile()?))
    }

    /// Builds a redactor from already-constructed stages, applied in order.
    pub fn from_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            stages,
            max_input_bytes: None,
        }
    }

    /// Shared redactor over the built-in rule tables.
    pub fn builtin() -> &'static Redactor {
        &BUILTIN
    }

    /// Caps accepted input at `max` bytes; `None` (the default) accepts any
    /// length.
    pub fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    /// Stage names in application order.
    pub fn stages(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// `(stage, label)` pairs in application order.
    pub fn stage_labels(&self) -> Vec<(&str, &str)> {
        self.stages.iter().map(|s| (s.name(), s.label())).collect()
    }

    /// Replaces every recognized identifier in `text` with its label.
    ///
    /// Never fails on the default, unbounded redactor. The only error is
    /// [`RedactorError::InvalidInput`], returned when a bound was opted into
    /// with [`with_max_input_bytes`](Self::with_max_input_bytes) and `text`
    /// exceeds it.
    pub fn redact(&self, text: &str) -> RedactorResult<String> {
        self.redact_with_report(text).map(|outcome| outcome.text)
    }

    /// Like [`redact`](Self::redact), for raw bytes that must decode as UTF-8.
    pub fn redact_bytes(&self, bytes: &[u8]) -> RedactorResult<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| RedactorError::invalid_input("text", format!("not valid UTF-8: {e}")))?;
        self.redact(text)
    }

    /// Runs the pipeline and records how many replacements each stage made.
    pub fn redact_with_report(&self, text: &str) -> RedactorResult<RedactionOutcome> {
        self.check_size(text)?;

        let mut current = text.to_owned();
        let mut report = RedactionReport {
            stages: Vec::with_capacity(self.stages.len()),
            input_len: text.len(),
            output_len: 0,
        };

        for stage in &self.stages {
            let (next, replaced) = {
                let pass = stage.apply(&current);
                let next = match pass.text {
                    Cow::Owned(next) => Some(next),
                    Cow::Borrowed(_) => None,
                };
                (next, pass.replaced)
            };
            if let Some(next) = next {
                current = next;
            }
            if replaced > 0 {
                debug!(stage = stage.name(), replaced, "stage applied");
            }
            report.stages.push(StageCount {
                stage: stage.name().to_string(),
                label: stage.label().to_string(),
                replaced,
            });
        }

        report.output_len = current.len();
        Ok(RedactionOutcome {
            text: current,
            report,
        })
    }

    fn check_size(&self, text: &str) -> RedactorResult<()> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(RedactorError::invalid_input(
                "text",
                format!("input is {} bytes, limit is {} bytes", text.len(), max),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("stages", &self.stages())
            .field("max_input_bytes", &self.max_input_bytes)
            .finish()
    }
}

/// Redacts `text` with the built-in rules.
pub fn redact(text: &str) -> RedactorResult<String> {
    Redactor::builtin().redact(text)
}
