//! Configuration types for matchers.

mod rules;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use rules::{CompiledRuleSet, Rule, RuleSet};

/// How a structural field template treats a key the input does not have.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingFields {
    /// An absent key fails the field test, whatever the nested pattern.
    #[default]
    Reject,
    /// An absent key is tested as `undefined`.
    Undefined,
}

/// Options shared by every clause registered on a matcher.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Field used by `tag` / `tags` (default `_tag`)
    #[serde(default = "default_tag_field")]
    pub tag_field: String,

    /// Treatment of keys missing from the input
    #[serde(default)]
    pub missing_fields: MissingFields,
}

fn default_tag_field() -> String {
    "_tag".to_string()
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            tag_field: default_tag_field(),
            missing_fields: MissingFields::default(),
        }
    }
}

impl MatchOptions {
    pub fn from_yaml_str(contents: &str) -> Result<Self, anyhow::Error> {
        let options: MatchOptions = serde_yaml::from_str(contents)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validate options
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.tag_field.is_empty() {
            anyhow::bail!("tagField must not be empty");
        }
        Ok(())
    }

    pub fn with_tag_field(mut self, field: &str) -> Self {
        self.tag_field = field.to_string();
        self
    }

    pub fn with_missing_fields(mut self, missing_fields: MissingFields) -> Self {
        self.missing_fields = missing_fields;
        self
    }
}
