//! TOML configuration for the redactor and the PDF renderer.
//!
//! Every field is optional. An empty file yields the built-in rules, no input
//! bound and default page settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{PatternRule, RuleSet};
use crate::error::{RedactorError, RedactorResult};
use crate::redaction::Redactor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactorConfig {
    /// Largest accepted input in bytes; 0 (the default) disables the bound.
    #[serde(default)]
    pub max_input_bytes: usize,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Rule table overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Use only the rules listed here instead of extending the built-ins.
    #[serde(default)]
    pub replace_defaults: bool,

    #[serde(default)]
    pub address_keywords: Vec<String>,

    #[serde(default)]
    pub name_keywords: Vec<String>,

    /// Extra patterns, run after the built-in patterns.
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

/// Page layout for rendered documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_line_height")]
    pub line_height_mm: f32,

    #[serde(default = "default_margin")]
    pub margin_mm: f32,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 0,
            rules: RulesConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            font_size: default_font_size(),
            line_height_mm: default_line_height(),
            margin_mm: default_margin(),
        }
    }
}

fn default_title() -> String {
    "Redacted document".to_string()
}

fn default_font_size() -> f32 {
    12.0
}

fn default_line_height() -> f32 {
    10.0
}

fn default_margin() -> f32 {
    10.0
}

impl RedactorConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> RedactorResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RedactorError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|reason| RedactorError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        let render = &self.render;
        if !(render.font_size > 0.0 && render.line_height_mm > 0.0 && render.margin_mm >= 0.0) {
            return Err("render sizes must be positive".to_string());
        }
        if render.margin_mm * 2.0 >= crate::document::A4_WIDTH_MM {
            return Err("render margin leaves no room for text".to_string());
        }
        Ok(())
    }

    /// The effective rule tables after applying overrides.
    pub fn rule_set(&self) -> RuleSet {
        let rules = &self.rules;
        if rules.replace_defaults {
            return RuleSet {
                patterns: rules.patterns.clone(),
                address_keywords: rules.address_keywords.clone(),
                name_keywords: rules.name_keywords.clone(),
            };
        }

        let mut set = RuleSet::default();
        set.patterns.extend(rules.patterns.iter().cloned());
        set.address_keywords
            .extend(rules.address_keywords.iter().cloned());
        set.name_keywords.extend(rules.name_keywords.iter().cloned());
        set
    }

    /// This configuration with the overrides folded in: `replace_defaults`
    /// set and every effective rule listed, so dumping and reloading it
    /// yields the same pipeline.
    pub fn resolved(&self) -> Self {
        let rules = self.rule_set();
        Self {
            max_input_bytes: self.max_input_bytes,
            rules: RulesConfig {
                replace_defaults: true,
                address_keywords: rules.address_keywords,
                name_keywords: rules.name_keywords,
                patterns: rules.patterns,
            },
            render: self.render.clone(),
        }
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// Compiles the effective rules into a redactor.
    pub fn build_redactor(&self) -> RedactorResult<Redactor> {
        let max = (self.max_input_bytes > 0).then_some(self.max_input_bytes);
        Ok(Redactor::new(&self.rule_set())?.with_max_input_bytes(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Boundary;

    #[test]
    fn test_empty_config_is_default() {
        let config = RedactorConfig::from_toml_str("").unwrap();
        assert_eq!(config, RedactorConfig::default());
        assert_eq!(config.rule_set(), RuleSet::default());
    }

    #[test]
    fn test_extra_pattern_runs_before_keywords() {
        let config = RedactorConfig::from_toml_str(
            r#"
            [[rules.patterns]]
            name = "employee_id"
            pattern = 'EMP-\d+'
            label = "[REDACTED EMPLOYEE ID]"
            "#,
        )
        .unwrap();
        assert_eq!(config.rules.patterns[0].boundary, Boundary::Pattern);

        let redactor = config.build_redactor().unwrap();
        let stages = redactor.stages();
        assert_eq!(stages[11], "employee_id");
        assert_eq!(stages[12], "address_keywords");
        assert_eq!(
            redactor.redact("EMP-42 in Chennai").unwrap(),
            "[REDACTED EMPLOYEE ID] in [REDACTED ADDRESS]"
        );
    }

    #[test]
    fn test_replace_defaults() {
        let config = RedactorConfig::from_toml_str(
            r#"
            max_input_bytes = 0
            [rules]
            replace_defaults = true
            name_keywords = ["kavya"]
            "#,
        )
        .unwrap();
        let redactor = config.build_redactor().unwrap();
        assert_eq!(redactor.stages(), ["name_keywords"]);
        assert_eq!(redactor.max_input_bytes(), None);
        assert_eq!(
            redactor.redact("Kavya called 9876543210").unwrap(),
            "[REDACTED NAME] called 9876543210"
        );
    }

    #[test]
    fn test_token_boundary_from_toml() {
        let config = RedactorConfig::from_toml_str(
            r#"
            [[rules.patterns]]
            name = "ticket"
            pattern = '\d{4}'
            label = "[T]"
            boundary = "token"
            "#,
        )
        .unwrap();
        assert_eq!(config.rules.patterns[0].boundary, Boundary::Token);
    }

    #[test]
    fn test_no_input_bound_by_default() {
        let config = RedactorConfig::default();
        assert_eq!(config.max_input_bytes, 0);
        assert_eq!(config.build_redactor().unwrap().max_input_bytes(), None);

        let bounded = RedactorConfig::from_toml_str("max_input_bytes = 64").unwrap();
        assert_eq!(bounded.build_redactor().unwrap().max_input_bytes(), Some(64));
    }

    #[test]
    fn test_resolved_dump_reloads_to_same_rules() {
        let config = RedactorConfig::from_toml_str(
            r#"
            [rules]
            name_keywords = ["kavya"]

            [[rules.patterns]]
            name = "ticket"
            pattern = 'TKT\d{4}'
            label = "[T]"
            boundary = "token"
            "#,
        )
        .unwrap();

        let dump = config.resolved().to_toml_string().unwrap();
        assert!(dump.contains("replace_defaults = true"));
        assert!(dump.contains("boundary = \"token\""));

        let reloaded = RedactorConfig::from_toml_str(&dump).unwrap();
        assert!(reloaded.rules.replace_defaults);
        assert_eq!(reloaded.rule_set(), config.rule_set());
        assert_eq!(reloaded.render, config.render);
    }

    #[test]
    fn test_invalid_render_settings() {
        assert!(RedactorConfig::from_toml_str("[render]\nfont_size = 0.0").is_err());
        assert!(RedactorConfig::from_toml_str("[render]\nmargin_mm = 200.0").is_err());
    }

    #[test]
    fn test_unknown_boundary_rejected() {
        let err = RedactorConfig::from_toml_str(
            r#"
            [[rules.patterns]]
            name = "x"
            pattern = "x"
            label = "[X]"
            boundary = "fuzzy"
            "#,
        );
        assert!(err.is_err());
    }
}
