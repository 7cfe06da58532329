//! Refinements that narrow a `Value` to a typed view.

use super::Refinement;
use crate::value::{Object, Value};

pub fn string() -> Refinement<Value, str> {
    Refinement::new(Value::as_str)
}

pub fn number() -> Refinement<Value, f64> {
    Refinement::new(|value: &Value| match value {
        Value::Number(n) => Some(n),
        _ => None,
    })
}

pub fn array() -> Refinement<Value, [Value]> {
    Refinement::new(Value::as_array)
}

/// Objects and errors, narrowed to their property map.
pub fn object() -> Refinement<Value, Object> {
    Refinement::new(Value::as_object)
}

pub fn non_empty_str() -> Refinement<str, str> {
    Refinement::new(|s: &str| (!s.is_empty()).then_some(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refinements_narrow() {
        assert_eq!(string().refine(&Value::from("a")), Some("a"));
        assert_eq!(string().refine(&Value::from(1)), None);
        assert_eq!(number().refine(&Value::from(1)), Some(&1.0));
        assert_eq!(array().refine(&Value::from(json!([1]))).map(<[Value]>::len), Some(1));
        assert!(object().test(&Value::from(json!({}))));
        assert!(!object().test(&Value::from(json!([]))));
        assert_eq!(non_empty_str().refine(""), None);
    }
}
