//! Serde-friendly pattern declarations.
//!
//! `PatternSpec` lets patterns be written in YAML or JSON configuration:
//!
//! ```yaml
//! fields:
//!   _tag:
//!     is: [A, B]
//!   amount:
//!     type: number
//! ```
//!
//! Converting a spec into a [`Pattern`] never fails.

use super::Pattern;
use crate::predicate::guards;
use crate::value::{Literal, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named type guard usable from configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TypeName {
    String,
    Number,
    Boolean,
    #[serde(rename = "bigint")]
    BigInt,
    Symbol,
    Null,
    Undefined,
    /// Anything but null/undefined
    Defined,
    /// Anything at all
    Unknown,
    Record,
    Array,
    Date,
    Error,
    Map,
    Set,
    Function,
    Truthy,
    NonEmptyString,
}

impl TypeName {
    pub fn to_pattern(self) -> Pattern {
        let check: fn(&Value) -> bool = match self {
            TypeName::Defined => return Pattern::Defined,
            TypeName::Unknown => return Pattern::Any,
            TypeName::Null => return Pattern::Literal(Literal::Null),
            TypeName::Undefined => return Pattern::Literal(Literal::Undefined),
            TypeName::String => guards::is_string,
            TypeName::Number => guards::is_number,
            TypeName::Boolean => guards::is_boolean,
            TypeName::BigInt => guards::is_bigint,
            TypeName::Symbol => guards::is_symbol,
            TypeName::Record => guards::is_record,
            TypeName::Array => |value| matches!(value, Value::Array(_)),
            TypeName::Date => guards::is_date,
            TypeName::Error => guards::is_error,
            TypeName::Map => guards::is_map,
            TypeName::Set => guards::is_set,
            TypeName::Function => guards::is_function,
            TypeName::Truthy => guards::is_truthy,
            TypeName::NonEmptyString => guards::is_non_empty_string,
        };
        super::guard(check)
    }
}

/// Declarative pattern, deserializable from YAML/JSON.
///
/// Each variant is a single-key map (`{ type: string }`,
/// `{ fields: { ... } }`), so the same document reads from YAML and JSON.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PatternSpec {
    /// Deep partial equality: scalars compare strictly, arrays become
    /// element templates and objects become field templates.
    Equals { equals: serde_json::Value },

    /// Equal to any of the listed values
    Is { is: Vec<serde_json::Value> },

    /// Negates the inner pattern
    Not { not: Box<PatternSpec> },

    /// Named type guard
    Type {
        #[serde(rename = "type")]
        type_name: TypeName,
    },

    /// String starting with the given prefix
    StartsWith {
        #[serde(rename = "startsWith")]
        starts_with: String,
    },

    /// Structural template over object fields
    Fields { fields: IndexMap<String, PatternSpec> },

    /// Prefix template over array elements
    Elements { elements: Vec<PatternSpec> },

    /// Matches if ALL of the inner patterns match
    AllOf {
        #[serde(rename = "allOf")]
        all_of: Vec<PatternSpec>,
    },

    /// Matches if ANY of the inner patterns match
    AnyOf {
        #[serde(rename = "anyOf")]
        any_of: Vec<PatternSpec>,
    },
}

impl PatternSpec {
    pub fn to_pattern(&self) -> Pattern {
        match self {
            PatternSpec::Equals { equals } => equals_pattern(equals),
            PatternSpec::Is { is } => {
                let literals: Option<Vec<Literal>> = is.iter().map(Literal::from_json).collect();
                match literals {
                    Some(literals) => Pattern::OneOf(literals),
                    None => Pattern::AnyOf(is.iter().map(equals_pattern).collect()),
                }
            }
            PatternSpec::Not { not } => Pattern::Not(Box::new(not.to_pattern())),
            PatternSpec::Type { type_name } => type_name.to_pattern(),
            PatternSpec::StartsWith { starts_with } => super::starts_with(starts_with),
            PatternSpec::Fields { fields } => super::fields(
                fields
                    .iter()
                    .map(|(key, spec)| (key.as_str(), spec.to_pattern())),
            ),
            PatternSpec::Elements { elements } => {
                Pattern::Elements(elements.iter().map(PatternSpec::to_pattern).collect())
            }
            PatternSpec::AllOf { all_of } => {
                Pattern::AllOf(all_of.iter().map(PatternSpec::to_pattern).collect())
            }
            PatternSpec::AnyOf { any_of } => {
                Pattern::AnyOf(any_of.iter().map(PatternSpec::to_pattern).collect())
            }
        }
    }
}

fn equals_pattern(json: &serde_json::Value) -> Pattern {
    match json {
        serde_json::Value::Array(items) => {
            Pattern::Elements(items.iter().map(equals_pattern).collect())
        }
        serde_json::Value::Object(map) => super::fields(
            map.iter().map(|(key, value)| (key.as_str(), equals_pattern(value))),
        ),
        scalar => Literal::from_json(scalar).map_or(Pattern::Any, Pattern::Literal),
    }
}
