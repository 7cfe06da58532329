//! Dynamic value model matched by patterns and predicates.
//!
//! `Value` is the shape-agnostic input the engine works on. It covers the
//! primitive kinds (undefined, null, booleans, numbers, bigints, strings,
//! symbols) and the compound ones (arrays, objects, maps, sets, dates,
//! errors, regexes, byte arrays, functions).
//!
//! # Module Structure
//!
//! - `literal` - Primitive literals and strict equality
//! - `symbol` - Unique symbols and the global symbol registry

mod literal;
mod symbol;

pub use literal::Literal;
pub use symbol::Symbol;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

static UNDEFINED: Value = Value::Undefined;

/// Property key of an object: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(Arc<str>),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::String(Arc::from(key))
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        PropertyKey::String(Arc::from(key))
    }
}

impl From<&String> for PropertyKey {
    fn from(key: &String) -> Self {
        PropertyKey::String(Arc::from(key.as_str()))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(key: Symbol) -> Self {
        PropertyKey::Symbol(key)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(s) => write!(f, "[{s}]"),
        }
    }
}

/// An object: insertion-ordered properties plus an optional class name.
///
/// Plain objects have no class. Class instances carry the class name so
/// `instance_of` guards can recognise them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    class: Option<Arc<str>>,
    props: IndexMap<PropertyKey, Value>,
}

impl Object {
    /// Create an empty plain object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty instance of `class`.
    pub fn instance(class: &str) -> Self {
        Self {
            class: Some(Arc::from(class)),
            props: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.props.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.props.contains_key(key)
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Value)> {
        self.props.iter()
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// A compiled regular expression value. Equality compares the source.
#[derive(Debug, Clone)]
pub struct RegexValue(pub Arc<Regex>);

impl PartialEq for RegexValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

/// A callable value. Equality is identity of the underlying function.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    call: Arc<dyn Fn(&[Value]) -> Value + Send + Sync>,
}

impl Callable {
    pub fn new(name: &str, call: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self {
            name: Arc::from(name),
            call: Arc::new(call),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").field("name", &self.name).finish()
    }
}

/// A dynamically-shaped value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Array(Vec<Value>),
    Object(Object),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    Date(DateTime<Utc>),
    /// Error object; `name` and `message` are regular properties.
    Error(Object),
    RegExp(RegexValue),
    /// Byte array (`Uint8Array`).
    Bytes(Bytes),
    Function(Callable),
}

impl Value {
    pub fn array(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn object<K: Into<PropertyKey>, V: Into<Value>>(
        props: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Value::Object(props.into_iter().collect())
    }

    /// Error value of class `name` carrying `name` and `message` properties.
    pub fn error(name: &str, message: &str) -> Self {
        Value::Error(
            Object::instance(name)
                .with("name", name)
                .with("message", message),
        )
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(items.into_iter().collect())
    }

    pub fn regexp(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Value::RegExp(RegexValue(Arc::new(Regex::new(pattern)?))))
    }

    pub fn function(
        name: &str,
        call: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Value::Function(Callable::new(name, call))
    }

    /// The `typeof` classification of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            _ => "object",
        }
    }

    /// Class name used by `instance_of` checks. `None` for primitives.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Value::Array(_) => Some("Array"),
            Value::Object(obj) => Some(obj.class().unwrap_or("Object")),
            Value::Map(_) => Some("Map"),
            Value::Set(_) => Some("Set"),
            Value::Date(_) => Some("Date"),
            Value::Error(obj) => Some(obj.class().unwrap_or("Error")),
            Value::RegExp(_) => Some("RegExp"),
            Value::Bytes(_) => Some("Uint8Array"),
            Value::Function(_) => Some("Function"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) | Value::Error(obj) => Some(obj),
            _ => None,
        }
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Truthiness: false for `false`, `0`, `NaN`, `0n`, `""`, `null`, `undefined`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Non-null value with object semantics, excluding arrays and functions.
    ///
    /// These are the inputs a structural field template may accept.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Object(_)
                | Value::Error(_)
                | Value::Map(_)
                | Value::Set(_)
                | Value::Date(_)
                | Value::RegExp(_)
                | Value::Bytes(_)
        )
    }

    /// Own property lookup. `None` when absent or when this value has no properties.
    pub fn property(&self, key: &PropertyKey) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Property lookup that substitutes `undefined` for anything missing.
    pub fn get(&self, key: impl Into<PropertyKey>) -> &Value {
        self.property(&key.into()).unwrap_or(&UNDEFINED)
    }

    pub fn has_property(&self, key: impl Into<PropertyKey>) -> bool {
        self.property(&key.into()).is_some()
    }

    /// Object carrying a `_tag` field strictly equal to `tag`.
    pub fn is_tagged(&self, tag: &str) -> bool {
        self.is_object_like() && self.get("_tag").as_str() == Some(tag)
    }

    pub fn is_tuple_of(&self, n: usize) -> bool {
        self.as_array().is_some_and(|items| items.len() == n)
    }

    pub fn is_tuple_of_at_least(&self, n: usize) -> bool {
        self.as_array().is_some_and(|items| items.len() >= n)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

fn fmt_props(obj: &Object, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, " {key}: {value}")?;
    }
    f.write_str(if obj.is_empty() { "}" } else { " }" })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(*n, f),
            Value::BigInt(n) => write!(f, "{n}n"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                if let Some(class) = obj.class() {
                    write!(f, "{class} ")?;
                }
                fmt_props(obj, f)
            }
            Value::Map(entries) => write!(f, "Map({})", entries.len()),
            Value::Set(items) => write!(f, "Set({})", items.len()),
            Value::Date(date) => write!(f, "{}", date.to_rfc3339()),
            Value::Error(obj) => write!(
                f,
                "{}: {}",
                obj.class().unwrap_or("Error"),
                obj.get(&PropertyKey::from("message"))
                    .and_then(Value::as_str)
                    .unwrap_or("")
            ),
            Value::RegExp(re) => write!(f, "/{}/", re.0.as_str()),
            Value::Bytes(bytes) => write!(f, "Uint8Array({})", bytes.len()),
            Value::Function(func) => write!(f, "[Function {}]", func.name()),
        }
    }
}
