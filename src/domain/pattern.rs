//! Regex-driven stages for structured identifiers (emails, phone numbers,
//! ID numbers, dates).

use regex::Regex;

use super::{replace_matches, Boundary, Pass, PatternRule, Stage};
use crate::error::{RedactorError, RedactorResult};

/// Stage that replaces every match of one compiled rule.
#[derive(Debug, Clone)]
pub struct PatternStage {
    name: String,
    label: String,
    regex: Regex,
    boundary: Boundary,
}

impl PatternStage {
    /// Compiles a rule into a stage.
    pub fn new(rule: &PatternRule) -> RedactorResult<Self> {
        let regex = Regex::new(&rule.pattern).map_err(|e| RedactorError::PatternError {
            pattern: rule.pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name: rule.name.clone(),
            label: rule.label.clone(),
            regex,
            boundary: rule.boundary,
        })
    }
}

impl Stage for PatternStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn apply<'t>(&self, text: &'t str) -> Pass<'t> {
        match self.boundary {
            Boundary::Pattern => replace_matches(&self.regex, text, &self.label, |_, _, _| true),
            Boundary::Token => replace_matches(&self.regex, text, &self.label, is_standalone),
        }
    }
}

/// True when the span at `start..end` does not touch a word character and
/// is not the numeric tail of a letter prefix such as `MRN-12345`.
///
/// Hyphens after digits or symbols (`+91-98765...`) and trailing hyphens do
/// not block the match.
fn is_standalone(haystack: &str, start: usize, end: usize) -> bool {
    let is_word = |c: char| c == '_' || c.is_alphanumeric();
    let mut before = haystack[..start].chars().rev();

    match before.next() {
        Some(c) if is_word(c) => return false,
        Some('-') if before.next().is_some_and(char::is_alphabetic) => return false,
        _ => {}
    }

    !haystack[end..].chars().next().is_some_and(is_word)
}
