//! Patterns: declarative descriptions of the shape or value an input must have.
//!
//! A `Pattern` is compiled once into a [`CompiledPattern`], a single total
//! structural test over `Value`. Compilation never fails, and a compiled test
//! never panics: any input it cannot handle is simply a non-match.
//!
//! The free functions in this module are the pattern vocabulary used at call
//! sites (`any()`, `defined()`, `is(..)`, `string()`, `fields(..)`, ...).
//!
//! # Module Structure
//!
//! - `compiled` - Pattern compilation and matching
//! - `spec` - Serde-friendly pattern declarations (YAML/JSON)

mod compiled;
mod spec;

pub use compiled::CompiledPattern;
pub use spec::{PatternSpec, TypeName};

use crate::config::MatchOptions;
use crate::predicate::{guards, Predicate, Refinement};
use crate::value::{Literal, PropertyKey, Symbol, Value};

/// What an input must look like for a clause to fire.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches any present value.
    Any,
    /// Matches anything except `null` and `undefined`.
    Defined,
    /// Strict equality with a primitive or symbol.
    Literal(Literal),
    /// Strict equality with any of the listed literals.
    OneOf(Vec<Literal>),
    /// Predicate or refinement leaf.
    Guard(Predicate<Value>),
    Not(Box<Pattern>),
    AllOf(Vec<Pattern>),
    AnyOf(Vec<Pattern>),
    /// Open structural template: listed fields must match, others are ignored.
    Fields(Vec<(PropertyKey, Pattern)>),
    /// Array prefix template: listed positions must match, trailing elements
    /// are ignored.
    Elements(Vec<Pattern>),
}

impl Pattern {
    pub fn compile(&self, options: &MatchOptions) -> CompiledPattern {
        CompiledPattern::compile(self, options)
    }
}

pub fn any() -> Pattern {
    Pattern::Any
}

pub fn defined() -> Pattern {
    Pattern::Defined
}

/// Strict equality with any of `literals`.
pub fn is<L: Into<Literal>>(literals: impl IntoIterator<Item = L>) -> Pattern {
    Pattern::OneOf(literals.into_iter().map(Into::into).collect())
}

pub fn not(pattern: impl Into<Pattern>) -> Pattern {
    Pattern::Not(Box::new(pattern.into()))
}

pub fn guard<F>(f: F) -> Pattern
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Pattern::Guard(Predicate::new(f))
}

pub fn refine<B: ?Sized + 'static>(refinement: Refinement<Value, B>) -> Pattern {
    Pattern::Guard(refinement.to_predicate())
}

/// Structural template from `(key, pattern)` pairs, tested in order.
pub fn fields<K, P>(fields: impl IntoIterator<Item = (K, P)>) -> Pattern
where
    K: Into<PropertyKey>,
    P: Into<Pattern>,
{
    Pattern::Fields(
        fields
            .into_iter()
            .map(|(k, p)| (k.into(), p.into()))
            .collect(),
    )
}

/// Array prefix template.
pub fn elements<P: Into<Pattern>>(elements: impl IntoIterator<Item = P>) -> Pattern {
    Pattern::Elements(elements.into_iter().map(Into::into).collect())
}

pub fn all_of<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Pattern {
    Pattern::AllOf(patterns.into_iter().map(Into::into).collect())
}

pub fn any_of<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Pattern {
    Pattern::AnyOf(patterns.into_iter().map(Into::into).collect())
}

pub fn string() -> Pattern {
    guard(guards::is_string)
}

pub fn number() -> Pattern {
    guard(guards::is_number)
}

pub fn boolean() -> Pattern {
    guard(guards::is_boolean)
}

pub fn bigint() -> Pattern {
    guard(guards::is_bigint)
}

pub fn symbol() -> Pattern {
    guard(guards::is_symbol)
}

pub fn null() -> Pattern {
    Pattern::Literal(Literal::Null)
}

pub fn undefined() -> Pattern {
    Pattern::Literal(Literal::Undefined)
}

pub fn date() -> Pattern {
    guard(guards::is_date)
}

pub fn record() -> Pattern {
    guard(guards::is_record)
}

pub fn array() -> Pattern {
    guard(|value| matches!(value, Value::Array(_)))
}

pub fn function() -> Pattern {
    guard(guards::is_function)
}

pub fn non_empty_string() -> Pattern {
    guard(guards::is_non_empty_string)
}

/// String value starting with `prefix`.
pub fn starts_with(prefix: &str) -> Pattern {
    let prefix = prefix.to_string();
    guard(move |value| value.as_str().is_some_and(|s| s.starts_with(&prefix)))
}

pub fn instance_of(class: &str) -> Pattern {
    Pattern::Guard(guards::instance_of(class))
}

impl From<Literal> for Pattern {
    fn from(literal: Literal) -> Self {
        Pattern::Literal(literal)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<bool> for Pattern {
    fn from(value: bool) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<f64> for Pattern {
    fn from(value: f64) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<i32> for Pattern {
    fn from(value: i32) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<i64> for Pattern {
    fn from(value: i64) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<u32> for Pattern {
    fn from(value: u32) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<Symbol> for Pattern {
    fn from(value: Symbol) -> Self {
        Pattern::Literal(value.into())
    }
}

impl From<Predicate<Value>> for Pattern {
    fn from(predicate: Predicate<Value>) -> Self {
        Pattern::Guard(predicate)
    }
}

impl<B: ?Sized + 'static> From<Refinement<Value, B>> for Pattern {
    fn from(refinement: Refinement<Value, B>) -> Self {
        refine(refinement)
    }
}

impl From<&PatternSpec> for Pattern {
    fn from(spec: &PatternSpec) -> Self {
        spec.to_pattern()
    }
}
