//! Keyword stages: literal terms matched as whole words, ignoring case.

use regex::{Regex, RegexBuilder};

use super::{replace_matches, Pass, Stage};
use crate::error::{RedactorError, RedactorResult};

/// Stage replacing any term from a keyword set with a single label.
#[derive(Debug, Clone)]
pub struct KeywordStage {
    name: String,
    label: String,
    terms: Vec<String>,
    regex: Regex,
}

impl KeywordStage {
    /// Builds a stage for `terms`, or `None` when there is nothing to match.
    ///
    /// Terms are matched literally. Longer terms are tried first, so
    /// `"new delhi"` wins over `"delhi"` regardless of input order.
    pub fn new(name: &str, label: &str, terms: &[String]) -> RedactorResult<Option<Self>> {
        let mut terms: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Ok(None);
        }
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        terms.dedup();

        let alternation = terms
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\b(?:{})\b", alternation);

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RedactorError::PatternError {
                pattern: name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(Self {
            name: name.to_string(),
            label: label.to_string(),
            terms,
            regex,
        }))
    }

    /// Normalized terms, longest first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Stage for KeywordStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn apply<'t>(&self, text: &'t str) -> Pass<'t> {
        replace_matches(&self.regex, text, &self.label, |_, _, _| true)
    }
}
