//! Type-classification predicates over `Value`.
//!
//! Plain guards are ordinary functions and can be used wherever a
//! `Fn(&Value) -> bool` is expected, e.g. `Predicate::new(is_string)`.
//! Parameterised guards return a `Predicate<Value>`.

use super::Predicate;
use crate::value::{PropertyKey, Value};

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_not_undefined(value: &Value) -> bool {
    !is_undefined(value)
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

pub fn is_not_null(value: &Value) -> bool {
    !is_null(value)
}

pub fn is_nullable(value: &Value) -> bool {
    value.is_nullish()
}

pub fn is_not_nullable(value: &Value) -> bool {
    !value.is_nullish()
}

/// Never holds.
pub fn is_never(_: &Value) -> bool {
    false
}

/// Always holds.
pub fn is_unknown(_: &Value) -> bool {
    true
}

/// Any compound value, including arrays and functions.
pub fn is_object(value: &Value) -> bool {
    value.is_object_like() || matches!(value, Value::Array(_) | Value::Function(_))
}

pub fn is_set(value: &Value) -> bool {
    matches!(value, Value::Set(_))
}

pub fn is_map(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

pub fn is_uint8_array(value: &Value) -> bool {
    matches!(value, Value::Bytes(_))
}

/// Strings, arrays, maps, sets and byte arrays.
pub fn is_iterable(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Array(_) | Value::Map(_) | Value::Set(_) | Value::Bytes(_)
    )
}

/// A record: an object with properties (plain, class instance or error).
/// Arrays, functions and built-in collections are not records.
pub fn is_record(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Error(_))
}

/// Same runtime test as [`is_record`].
pub fn is_readonly_record(value: &Value) -> bool {
    is_record(value)
}

pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// Array of exactly `n` elements.
pub fn is_tuple_of(n: usize) -> Predicate<Value> {
    Predicate::new(move |value: &Value| value.is_tuple_of(n))
}

/// Array of at least `n` elements.
pub fn is_tuple_of_at_least(n: usize) -> Predicate<Value> {
    Predicate::new(move |value: &Value| value.is_tuple_of_at_least(n))
}

/// Object carrying the property `key` (string or symbol).
pub fn has_property(key: impl Into<PropertyKey>) -> Predicate<Value> {
    let key = key.into();
    Predicate::new(move |value: &Value| value.property(&key).is_some())
}

/// Object whose `_tag` field is the string `tag`.
pub fn is_tagged(tag: &str) -> Predicate<Value> {
    is_tagged_by("_tag", tag)
}

/// Object whose `field` is the string `tag`.
pub fn is_tagged_by(field: &str, tag: &str) -> Predicate<Value> {
    let key = PropertyKey::from(field);
    let tag = tag.to_string();
    Predicate::new(move |value: &Value| {
        value
            .property(&key)
            .and_then(Value::as_str)
            .is_some_and(|t| t == tag)
    })
}

/// Compound value whose class is `class`. Errors are also instances of `Error`.
pub fn instance_of(class: &str) -> Predicate<Value> {
    let class = class.to_string();
    Predicate::new(move |value: &Value| {
        value.class_name() == Some(class.as_str())
            || (class == "Error" && is_error(value))
            || (class == "Object" && is_object(value))
    })
}
