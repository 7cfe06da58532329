//! Clause sequencing and evaluation.
//!
//! A matcher is an ordered list of clauses, each pairing a compiled pattern
//! with a handler. Evaluation walks the list in registration order and the
//! first clause whose test passes wins; later clauses are neither tested nor
//! invoked. What happens when nothing matches is decided by the terminal the
//! matcher is finalized with (see [`terminal`]).
//!
//! Two builder forms share the [`Cases`] vocabulary:
//!
//! - [`TypeMatcher`] collects clauses and is finalized into a reusable
//!   [`Matcher`] that can be applied to many inputs.
//! - [`ValueMatcher`] is bound to one input up front and settles on the first
//!   clause that matches it.
//!
//! ```
//! use rift_match::{type_matcher, Cases, Value};
//! use serde_json::json;
//!
//! let matcher = type_matcher::<&str>()
//!     .tag("A", |_| "a")
//!     .tag("B", |_| "b")
//!     .exhaustive();
//!
//! assert_eq!(matcher.run(&Value::from(json!({"_tag": "B"}))), Ok("b"));
//! assert!(matcher.run(&Value::from(json!({"_tag": "C"}))).is_err());
//! ```

mod discriminator;
pub mod terminal;
mod type_matcher;
mod value_matcher;

pub use terminal::{Absurd, Either, Exhaustive, OrElse, Optional, Terminal};
pub use type_matcher::{Matcher, TypeMatcher};
pub use value_matcher::ValueMatcher;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::config::MatchOptions;
use crate::error::MatchError;
use crate::pattern::{self, CompiledPattern, Pattern};
use crate::value::{Literal, Value};

/// Shared clause handler. Receives the matched input unchanged.
pub type Handler<R> = Arc<dyn Fn(&Value) -> R + Send + Sync>;

/// Wrap a closure as a [`Handler`], for use in tag and discriminator mappings.
pub fn handler<R, F>(f: F) -> Handler<R>
where
    F: Fn(&Value) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A compiled pattern paired with its handler.
pub struct Clause<R> {
    test: CompiledPattern,
    handler: Handler<R>,
}

impl<R> Clause<R> {
    pub fn new(pattern: &Pattern, options: &MatchOptions, handler: Handler<R>) -> Self {
        Self {
            test: pattern.compile(options),
            handler,
        }
    }

    pub fn matches(&self, input: &Value) -> bool {
        self.test.matches(input)
    }

    pub fn apply(&self, input: &Value) -> R {
        (self.handler)(input)
    }
}

impl<R> Clone for Clause<R> {
    fn clone(&self) -> Self {
        Self {
            test: self.test.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<R> fmt::Debug for Clause<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("test", &self.test)
            .finish_non_exhaustive()
    }
}

/// Find the first clause matching `input` and apply its handler.
pub(crate) fn evaluate<R>(clauses: &[Clause<R>], input: &Value) -> Option<R> {
    clauses
        .iter()
        .enumerate()
        .find(|(_, clause)| clause.matches(input))
        .map(|(index, clause)| {
            trace!(clause = index, "clause matched");
            clause.apply(input)
        })
}

/// Clause registration shared by [`TypeMatcher`] and [`ValueMatcher`].
///
/// Every method consumes the builder and returns it with one more clause
/// (or, for the mapping forms, one clause per entry, in mapping order).
pub trait Cases<R: 'static>: Sized {
    fn options(&self) -> &MatchOptions;

    /// Register a clause for `pattern`.
    fn add_clause(self, pattern: Pattern, handler: Handler<R>) -> Self;

    fn when<F>(self, pattern: impl Into<Pattern>, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(pattern.into(), Arc::new(f))
    }

    /// Fires if any of `patterns` matches.
    fn when_or<P, F>(self, patterns: impl IntoIterator<Item = P>, f: F) -> Self
    where
        P: Into<Pattern>,
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(pattern::any_of(patterns), Arc::new(f))
    }

    /// Fires only if all of `patterns` match. Conflicting templates can never
    /// match together, so such a clause never fires.
    fn when_and<P, F>(self, patterns: impl IntoIterator<Item = P>, f: F) -> Self
    where
        P: Into<Pattern>,
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(pattern::all_of(patterns), Arc::new(f))
    }

    /// Fires if `pattern` does not match.
    fn not<F>(self, pattern: impl Into<Pattern>, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(pattern::not(pattern), Arc::new(f))
    }

    /// Fires if `input[field]` equals any of `tags`.
    fn discriminator<L, F>(self, field: &str, tags: impl IntoIterator<Item = L>, f: F) -> Self
    where
        L: Into<Literal>,
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(discriminator::tag_pattern(field, tags), Arc::new(f))
    }

    /// Fires if `input[field]` is a string starting with `prefix`.
    fn discriminator_starts_with<F>(self, field: &str, prefix: &str, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.add_clause(discriminator::starts_with_pattern(field, prefix), Arc::new(f))
    }

    /// One clause per `(tag, handler)` entry, tested against `input[field]`.
    fn discriminators<K>(
        self,
        field: &str,
        mapping: impl IntoIterator<Item = (K, Handler<R>)>,
    ) -> Self
    where
        K: Into<Literal>,
    {
        mapping.into_iter().fold(self, |cases, (tag, handler)| {
            cases.add_clause(discriminator::tag_pattern(field, [tag]), handler)
        })
    }

    /// Discriminator on the configured tag field.
    fn tag<F>(self, tag: impl Into<Literal>, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        let field = self.options().tag_field.clone();
        self.discriminator(&field, [tag], f)
    }

    fn tags<K>(self, mapping: impl IntoIterator<Item = (K, Handler<R>)>) -> Self
    where
        K: Into<Literal>,
    {
        let field = self.options().tag_field.clone();
        self.discriminators(&field, mapping)
    }

    /// Marker with no runtime effect; the result type is fixed by `R`.
    fn with_return_type(self) -> Self {
        self
    }

    /// Feed the builder through `f`, so transforms read left to right.
    fn pipe<T>(self, f: impl FnOnce(Self) -> T) -> T {
        f(self)
    }
}

/// Start a reusable matcher.
pub fn type_matcher<R: 'static>() -> TypeMatcher<R> {
    TypeMatcher::new()
}

/// Start a matcher bound to `input`.
pub fn value_matcher<R: 'static>(input: impl Into<Value>) -> ValueMatcher<R> {
    ValueMatcher::new(input)
}

/// Dispatch `input` on its tag field; fails if no tag in `mapping` matches.
pub fn value_tags<R, K>(
    input: impl Into<Value>,
    mapping: impl IntoIterator<Item = (K, Handler<R>)>,
) -> Result<R, MatchError>
where
    R: 'static,
    K: Into<Literal>,
{
    value_matcher(input).tags(mapping).exhaustive()
}

/// Reusable exhaustive dispatcher on the tag field.
pub fn type_tags<R, K>(mapping: impl IntoIterator<Item = (K, Handler<R>)>) -> Matcher<R, Exhaustive>
where
    R: 'static,
    K: Into<Literal>,
{
    type_matcher().tags_exhaustive(mapping)
}
