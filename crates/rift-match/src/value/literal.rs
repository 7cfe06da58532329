//! Primitive literals and strict equality against values.

use super::{Symbol, Value};
use std::fmt;

/// A primitive value or symbol usable as a literal pattern.
///
/// Literals compare with strict equality: no coercion between kinds,
/// `NaN` never equals `NaN`, `+0` equals `-0`, symbols compare by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
}

impl Literal {
    /// Strict equality against a runtime value.
    pub fn strict_equals(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Undefined, Value::Undefined) => true,
            (Literal::Null, Value::Null) => true,
            (Literal::Bool(a), Value::Bool(b)) => a == b,
            (Literal::Number(a), Value::Number(b)) => a == b,
            (Literal::BigInt(a), Value::BigInt(b)) => a == b,
            (Literal::String(a), Value::String(b)) => a == b,
            (Literal::Symbol(a), Value::Symbol(b)) => a == b,
            _ => false,
        }
    }

    /// Convert a JSON scalar into a literal. Arrays and objects yield `None`.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Literal::Null),
            serde_json::Value::Bool(b) => Some(Literal::Bool(*b)),
            serde_json::Value::Number(n) => Some(Literal::Number(n.as_f64().unwrap_or(f64::NAN))),
            serde_json::Value::String(s) => Some(Literal::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Undefined => Value::Undefined,
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::BigInt(n) => Value::BigInt(n),
            Literal::String(s) => Value::String(s),
            Literal::Symbol(s) => Value::Symbol(s),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<Symbol> for Literal {
    fn from(value: Symbol) -> Self {
        Literal::Symbol(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Value::from(self.clone()).fmt(f)
    }
}
