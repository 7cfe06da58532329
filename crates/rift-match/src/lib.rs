//! Structural pattern matching over dynamic values for Rift.
//!
//! Clauses pair a [`Pattern`] with a handler and are evaluated in registration
//! order; the first clause whose pattern matches the input wins. Patterns
//! range from literals and type guards to open structural templates over
//! object fields and array prefixes, and compose with negation, disjunction
//! and conjunction. A standalone predicate algebra ([`Predicate`],
//! [`Refinement`]) provides the boolean combinators used as pattern leaves.
//!
//! # Example
//!
//! ```
//! use rift_match::pattern::{any, fields};
//! use rift_match::{type_matcher, Cases, Value};
//! use serde_json::json;
//!
//! let user_name = type_matcher::<String>()
//!     .when(fields([("user", fields([("name", any())]))]), |input| {
//!         input.get("user").get("name").as_str().unwrap_or_default().to_string()
//!     })
//!     .or_else(|_| "no user".to_string());
//!
//! assert_eq!(user_name.run(&Value::from(json!({"user": {"name": "Tim"}}))), "Tim");
//! assert_eq!(user_name.run(&Value::from(json!({}))), "no user");
//! ```
//!
//! Rules can also be declared in YAML and compiled with [`RuleSet`].

pub mod config;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod predicate;
pub mod value;

// Re-export public types
pub use config::{CompiledRuleSet, MatchOptions, MissingFields, Rule, RuleSet};
pub use error::MatchError;
pub use matcher::{
    handler, type_matcher, type_tags, value_matcher, value_tags, Cases, Clause, Handler, Matcher,
    TypeMatcher, ValueMatcher,
};
pub use pattern::{CompiledPattern, Pattern, PatternSpec, TypeName};
pub use predicate::{Predicate, Refinement};
pub use value::{Literal, Object, PropertyKey, Symbol, Value};
