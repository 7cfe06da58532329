//! Data-driven rule sets: ordered `when`/`then` rules loaded from YAML.
//!
//! ```yaml
//! options:
//!   tagField: kind
//! rules:
//!   - when:
//!       fields:
//!         kind: { is: [created, updated] }
//!     then: write
//!   - when:
//!       fields:
//!         kind: { startsWith: "delete" }
//!     then: remove
//! otherwise: ignore
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MatchOptions;
use crate::error::MatchError;
use crate::matcher::{Cases, Matcher, Optional, TypeMatcher};
use crate::pattern::PatternSpec;
use crate::value::Value;

/// A single rule: the first rule whose pattern matches yields its value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Rule {
    pub when: PatternSpec,
    pub then: serde_json::Value,
}

/// Ordered rules with an optional fallback value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RuleSet {
    #[serde(default)]
    pub options: MatchOptions,

    #[serde(default)]
    pub rules: Vec<Rule>,

    /// Result for input no rule matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<serde_json::Value>,
}

impl RuleSet {
    pub fn from_yaml_str(contents: &str) -> Result<Self, anyhow::Error> {
        let rule_set: RuleSet = serde_yaml::from_str(contents)?;
        rule_set.options.validate()?;
        Ok(rule_set)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn compile(&self) -> CompiledRuleSet {
        let matcher = self
            .rules
            .iter()
            .fold(TypeMatcher::with_options(self.options.clone()), |matcher, rule| {
                let then = rule.then.clone();
                matcher.when(&rule.when, move |_| then.clone())
            })
            .option();
        debug!(
            rules = self.rules.len(),
            has_otherwise = self.otherwise.is_some(),
            "rule set compiled"
        );
        CompiledRuleSet {
            matcher,
            otherwise: self.otherwise.clone(),
        }
    }
}

/// Rule set ready to evaluate inputs.
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    matcher: Matcher<serde_json::Value, Optional>,
    otherwise: Option<serde_json::Value>,
}

impl CompiledRuleSet {
    /// Value of the first matching rule, else the fallback, else an
    /// unmatched error.
    pub fn run(&self, input: &Value) -> Result<serde_json::Value, MatchError> {
        match (self.matcher.run(input), &self.otherwise) {
            (Some(value), _) => Ok(value),
            (None, Some(otherwise)) => Ok(otherwise.clone()),
            (None, None) => Err(MatchError::Unmatched {
                input: input.to_string(),
            }),
        }
    }

    pub fn rule_count(&self) -> usize {
        self.matcher.clause_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const RULES: &str = r#"
options:
  tagField: kind
rules:
  - when:
      fields:
        kind: { is: [created, updated] }
    then: write
  - when:
      fields:
        kind: { startsWith: delete }
    then: remove
  - when:
      fields:
        kind: { equals: created }
    then: unreachable
"#;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_rule_set_from_yaml() {
        let rule_set = RuleSet::from_yaml_str(RULES).unwrap();
        assert_eq!(rule_set.options.tag_field, "kind");
        assert_eq!(rule_set.rules.len(), 3);
        assert!(rule_set.otherwise.is_none());

        let compiled = rule_set.compile();
        assert_eq!(compiled.rule_count(), 3);
        assert_eq!(compiled.run(&v(json!({"kind": "created"}))), Ok(json!("write")));
        assert_eq!(compiled.run(&v(json!({"kind": "deleteAll"}))), Ok(json!("remove")));
        assert_eq!(
            compiled.run(&v(json!({"kind": "read"}))),
            Err(MatchError::Unmatched {
                input: "{ kind: \"read\" }".to_string()
            })
        );
    }

    #[test]
    fn test_rule_set_otherwise() {
        let yaml = format!("{RULES}otherwise: {{ action: ignore }}\n");
        let compiled = RuleSet::from_yaml_str(&yaml).unwrap().compile();
        assert_eq!(
            compiled.run(&v(json!({"kind": "read"}))),
            Ok(json!({"action": "ignore"}))
        );
        assert_eq!(compiled.run(&v(json!({"kind": "updated"}))), Ok(json!("write")));
    }

    #[test]
    fn test_rule_set_flow_style_type_rules() {
        let yaml = r#"
rules:
  - when: { type: string }
    then: text
  - when: { type: bigint }
    then: big
"#;
        let compiled = RuleSet::from_yaml_str(yaml).unwrap().compile();
        assert_eq!(compiled.rule_count(), 2);
        assert_eq!(compiled.run(&Value::from("a")), Ok(json!("text")));
        assert_eq!(compiled.run(&Value::BigInt(7)), Ok(json!("big")));
        assert!(compiled.run(&Value::from(1)).is_err());
    }

    #[test]
    fn test_rule_set_validation() {
        assert!(RuleSet::from_yaml_str("rules: []\noptions:\n  tagField: ''\n").is_err());
        assert!(RuleSet::from_yaml_str("rules:\n  - when: { bogus: 1 }\n    then: x\n").is_err());

        let empty = RuleSet::from_yaml_str("{}").unwrap();
        assert!(empty.rules.is_empty());
        assert!(empty.compile().run(&Value::Null).is_err());
    }

    #[test]
    fn test_rule_set_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{RULES}").unwrap();
        let rule_set = RuleSet::from_file(file.path()).unwrap();
        assert_eq!(rule_set.rules[1].then, json!("remove"));
        assert!(RuleSet::from_file("/nonexistent/rules.yaml").is_err());
    }
}
