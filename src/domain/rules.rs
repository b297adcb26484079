//! Rule tables: the ordered pattern list and the keyword sets.
//!
//! Rules are plain data. They are compiled into [`Stage`](super::Stage)s by
//! [`RuleSet::compile`], which lets callers (and tests) swap in their own
//! tables without touching the pipeline.

use serde::{Deserialize, Serialize};

use super::{KeywordStage, PatternStage, Stage};
use crate::error::RedactorResult;

/// Placeholder labels written by the built-in rules.
pub mod labels {
    pub const EMAIL: &str = "[REDACTED EMAIL]";
    pub const PHONE: &str = "[REDACTED PHONE]";
    pub const AADHAAR: &str = "[REDACTED AADHAAR]";
    pub const PAN: &str = "[REDACTED PAN]";
    pub const PIN: &str = "[REDACTED PIN]";
    pub const DATE: &str = "[REDACTED DATE]";
    pub const INSURANCE_ID: &str = "[REDACTED INSURANCE ID]";
    pub const MRN: &str = "[REDACTED MRN]";
    pub const ADDRESS: &str = "[REDACTED ADDRESS]";
    pub const NAME: &str = "[REDACTED NAME]";
}

/// How the edges of a pattern match are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Whatever the regex itself enforces.
    #[default]
    Pattern,
    /// Match must not touch a word character, and must not follow a
    /// letter-hyphen prefix (`MRN-`, `REF-`).
    Token,
}

/// A single regex rule: every match is replaced with `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub name: String,
    pub pattern: String,
    pub label: String,
    #[serde(default)]
    pub boundary: Boundary,
}

impl PatternRule {
    pub fn new(name: &str, pattern: &str, label: &str, boundary: Boundary) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            label: label.to_string(),
            boundary,
        }
    }
}

/// Complete rule tables for one redactor.
///
/// Patterns run first, in order, then the address keywords, then the name
/// keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub patterns: Vec<PatternRule>,
    pub address_keywords: Vec<String>,
    pub name_keywords: Vec<String>,
}

impl RuleSet {
    /// A rule set with no rules at all; redacting with it is the identity.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            address_keywords: Vec::new(),
            name_keywords: Vec::new(),
        }
    }

    /// The built-in pattern table, in application order.
    pub fn default_patterns() -> Vec<PatternRule> {
        use Boundary::{Pattern, Token};

        vec![
            PatternRule::new(
                "email",
                r"[\w.%+-]+@[\w.]+\.[A-Za-z]{2,}",
                labels::EMAIL,
                Pattern,
            ),
            PatternRule::new("phone", r"(?:\+91|\b0?)\d{10}\b", labels::PHONE, Token),
            PatternRule::new(
                "phone_grouped",
                r"\d{3}[-.\s]\d{3}[-.\s]\d{4}",
                labels::PHONE,
                Pattern,
            ),
            PatternRule::new(
                "aadhaar",
                r"\d{4}\s?\d{4}\s?\d{4}",
                labels::AADHAAR,
                Pattern,
            ),
            PatternRule::new("pan", r"[A-Z]{5}\d{4}[A-Z]", labels::PAN, Pattern),
            PatternRule::new("pin", r"\b\d{6}\b", labels::PIN, Pattern),
            PatternRule::new(
                "date_dmy",
                r"\b\d{1,2}[-/]\d{1,2}[-/](?:\d{4}|\d{2})\b",
                labels::DATE,
                Pattern,
            ),
            PatternRule::new(
                "date_ymd",
                r"\b\d{4}[-/]\d{1,2}[-/]\d{1,2}\b",
                labels::DATE,
                Pattern,
            ),
            PatternRule::new(
                "phone_fallback",
                r"(?:\+91|\b0?)\d{5,10}\b",
                labels::PHONE,
                Token,
            ),
            PatternRule::new(
                "insurance_id",
                r"(?i)INS\d+",
                labels::INSURANCE_ID,
                Pattern,
            ),
            PatternRule::new("mrn", r"(?i)MRN-?\d+", labels::MRN, Pattern),
        ]
    }

    /// Terms that indicate a postal address.
    pub fn default_address_keywords() -> Vec<String> {
        to_owned(&[
            "road",
            "street",
            "lane",
            "avenue",
            "nagar",
            "colony",
            "layout",
            "sector",
            "apartment",
            "apartments",
            "chennai",
            "mumbai",
            "delhi",
            "new delhi",
            "bangalore",
            "bengaluru",
            "hyderabad",
            "kolkata",
            "pune",
            "ahmedabad",
            "coimbatore",
            "madurai",
            "tamil nadu",
            "karnataka",
            "kerala",
            "maharashtra",
        ])
    }

    /// Common given names and surnames.
    pub fn default_name_keywords() -> Vec<String> {
        to_owned(&[
            "ramesh", "suresh", "rajesh", "mahesh", "arun", "karthik", "vijay", "sanjay",
            "ganesh", "ravi", "priya", "divya", "lakshmi", "anita", "deepa", "meena",
            "kavitha", "sunita", "kumar", "sharma", "iyer", "reddy", "patel", "singh",
        ])
    }

    /// Compiles the tables into pipeline stages, in application order.
    ///
    /// Empty keyword sets produce no stage.
    pub fn compile(&self) -> RedactorResult<Vec<Box<dyn Stage>>> {
        let mut stages: Vec<Box<dyn Stage>> = Vec::with_capacity(self.patterns.len() + 2);

        for rule in &self.patterns {
            stages.push(Box::new(PatternStage::new(rule)?));
        }

        let keyword_sets = [
            ("address_keywords", labels::ADDRESS, &self.address_keywords),
            ("name_keywords", labels::NAME, &self.name_keywords),
        ];
        for (name, label, terms) in keyword_sets {
            if let Some(stage) = KeywordStage::new(name, label, terms)? {
                stages.push(Box::new(stage));
            }
        }

        Ok(stages)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            patterns: Self::default_patterns(),
            address_keywords: Self::default_address_keywords(),
            name_keywords: Self::default_name_keywords(),
        }
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
