//! Redaction rules and the stages built from them.
//!
//! A redaction pipeline is an ordered list of [`Stage`]s. Each stage scans the
//! whole text it is given and replaces every match with a fixed label,
//! returning a new text value. Stages never see anything but the output of the
//! previous stage.

pub mod keyword;
pub mod pattern;
pub mod rules;

pub use keyword::KeywordStage;
pub use pattern::PatternStage;
pub use rules::{labels, Boundary, PatternRule, RuleSet};

use std::borrow::Cow;

/// Output of a single stage over a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass<'t> {
    /// Text after replacement; borrowed when nothing matched.
    pub text: Cow<'t, str>,
    /// Number of substrings replaced.
    pub replaced: usize,
}

impl<'t> Pass<'t> {
    fn unchanged(text: &'t str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            replaced: 0,
        }
    }
}

/// One step of the redaction pipeline.
pub trait Stage: Send + Sync {
    /// Stable identifier, used in reports and logs.
    fn name(&self) -> &str;

    /// Placeholder written in place of every match.
    fn label(&self) -> &str;

    /// Replaces all matches in `text` in a single pass.
    fn apply<'t>(&self, text: &'t str) -> Pass<'t>;
}

/// Replaces every accepted match of `regex` in `text` with `label`.
///
/// `accept` sees the full haystack and the match bounds, so a stage can look
/// at neighbouring characters the regex engine cannot express.
pub(crate) fn replace_matches<'t, F>(
    regex: &regex::Regex,
    text: &'t str,
    label: &str,
    accept: F,
) -> Pass<'t>
where
    F: Fn(&str, usize, usize) -> bool,
{
    let mut out = String::new();
    let mut last = 0;
    let mut replaced = 0;

    for m in regex.find_iter(text) {
        if !accept(text, m.start(), m.end()) {
            continue;
        }
        if replaced == 0 {
            out.reserve(text.len());
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(label);
        last = m.end();
        replaced += 1;
    }

    if replaced == 0 {
        return Pass::unchanged(text);
    }

    out.push_str(&text[last..]);
    Pass {
        text: Cow::Owned(out),
        replaced,
    }
}
