//! Pattern compilation and structural matching.

use super::Pattern;
use crate::config::{MatchOptions, MissingFields};
use crate::predicate::Predicate;
use crate::value::{Literal, PropertyKey, Value};

/// Compiled pattern for efficient runtime evaluation.
///
/// Compiling resolves the missing-field policy once, collapses single-literal
/// sets, drops double negations and flattens nested conjunctions and
/// disjunctions.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Any,
    Defined,
    Literal(Literal),
    OneOf(Vec<Literal>),
    Guard(Predicate<Value>),
    Not(Box<CompiledPattern>),
    AllOf(Vec<CompiledPattern>),
    AnyOf(Vec<CompiledPattern>),
    Fields {
        fields: Vec<(PropertyKey, CompiledPattern)>,
        missing: MissingFields,
    },
    Elements(Vec<CompiledPattern>),
}

impl CompiledPattern {
    /// Compile a Pattern into an efficient runtime form.
    pub fn compile(pattern: &Pattern, options: &MatchOptions) -> Self {
        match pattern {
            Pattern::Any => CompiledPattern::Any,
            Pattern::Defined => CompiledPattern::Defined,
            Pattern::Literal(literal) => CompiledPattern::Literal(literal.clone()),
            Pattern::OneOf(literals) => match literals.as_slice() {
                [single] => CompiledPattern::Literal(single.clone()),
                _ => CompiledPattern::OneOf(literals.clone()),
            },
            Pattern::Guard(predicate) => CompiledPattern::Guard(predicate.clone()),
            Pattern::Not(inner) => match Self::compile(inner, options) {
                CompiledPattern::Not(double) => *double,
                compiled => CompiledPattern::Not(Box::new(compiled)),
            },
            Pattern::AllOf(patterns) => {
                let mut compiled = Vec::with_capacity(patterns.len());
                for p in patterns {
                    match Self::compile(p, options) {
                        CompiledPattern::AllOf(nested) => compiled.extend(nested),
                        other => compiled.push(other),
                    }
                }
                if compiled.len() == 1 {
                    compiled.remove(0)
                } else {
                    CompiledPattern::AllOf(compiled)
                }
            }
            Pattern::AnyOf(patterns) => {
                let mut compiled = Vec::with_capacity(patterns.len());
                for p in patterns {
                    match Self::compile(p, options) {
                        CompiledPattern::AnyOf(nested) => compiled.extend(nested),
                        other => compiled.push(other),
                    }
                }
                if compiled.len() == 1 {
                    compiled.remove(0)
                } else {
                    CompiledPattern::AnyOf(compiled)
                }
            }
            Pattern::Fields(fields) => CompiledPattern::Fields {
                fields: fields
                    .iter()
                    .map(|(key, p)| (key.clone(), Self::compile(p, options)))
                    .collect(),
                missing: options.missing_fields,
            },
            Pattern::Elements(elements) => CompiledPattern::Elements(
                elements.iter().map(|p| Self::compile(p, options)).collect(),
            ),
        }
    }

    /// Check if a value matches this pattern.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            CompiledPattern::Any => true,
            CompiledPattern::Defined => !value.is_nullish(),
            CompiledPattern::Literal(literal) => literal.strict_equals(value),
            CompiledPattern::OneOf(literals) => literals.iter().any(|l| l.strict_equals(value)),
            CompiledPattern::Guard(predicate) => predicate.test(value),
            CompiledPattern::Not(inner) => !inner.matches(value),
            CompiledPattern::AllOf(patterns) => patterns.iter().all(|p| p.matches(value)),
            CompiledPattern::AnyOf(patterns) => patterns.iter().any(|p| p.matches(value)),
            CompiledPattern::Fields { fields, missing } => {
                value.is_object_like()
                    && fields.iter().all(|(key, p)| match value.property(key) {
                        Some(field) => p.matches(field),
                        None => match missing {
                            MissingFields::Reject => false,
                            MissingFields::Undefined => p.matches(&Value::Undefined),
                        },
                    })
            }
            CompiledPattern::Elements(elements) => value.as_array().is_some_and(|items| {
                items.len() >= elements.len()
                    && elements.iter().zip(items).all(|(p, item)| p.matches(item))
            }),
        }
    }

    /// The compiled test as a plain predicate.
    pub fn into_predicate(self) -> Predicate<Value> {
        Predicate::new(move |value: &Value| self.matches(value))
    }
}
