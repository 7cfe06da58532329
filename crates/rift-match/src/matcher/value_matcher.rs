//! Matchers bound to a single input.

use std::fmt;

use tracing::trace;

use super::terminal::{Absurd, Either, Exhaustive, Optional, Terminal};
use super::{Cases, Clause, Handler};
use crate::config::MatchOptions;
use crate::error::MatchError;
use crate::pattern::Pattern;
use crate::value::Value;

/// Builder that tests each clause against its input as it is registered.
///
/// Once a clause has matched, the result is fixed: later clauses are neither
/// compiled, tested nor invoked.
pub struct ValueMatcher<R> {
    input: Value,
    result: Option<R>,
    clauses: usize,
    options: MatchOptions,
}

impl<R: 'static> ValueMatcher<R> {
    pub fn new(input: impl Into<Value>) -> Self {
        Self::with_options(input, MatchOptions::default())
    }

    pub fn with_options(input: impl Into<Value>, options: MatchOptions) -> Self {
        Self {
            input: input.into(),
            result: None,
            clauses: 0,
            options,
        }
    }

    pub fn input(&self) -> &Value {
        &self.input
    }

    pub fn is_matched(&self) -> bool {
        self.result.is_some()
    }

    pub fn exhaustive(self) -> Result<R, MatchError> {
        Exhaustive.finish(&self.input, self.result)
    }

    /// The matched result, or `f` applied to the input.
    pub fn or_else<F>(self, f: F) -> R
    where
        F: FnOnce(&Value) -> R,
    {
        match self.result {
            Some(result) => result,
            None => f(&self.input),
        }
    }

    pub fn or_else_absurd(self) -> Result<R, MatchError> {
        Absurd.finish(&self.input, self.result)
    }

    pub fn option(self) -> Option<R> {
        Optional.finish(&self.input, self.result)
    }

    pub fn either(self) -> Result<R, Value> {
        Either.finish(&self.input, self.result)
    }
}

impl<R: 'static> Cases<R> for ValueMatcher<R> {
    fn options(&self) -> &MatchOptions {
        &self.options
    }

    fn add_clause(mut self, pattern: Pattern, handler: Handler<R>) -> Self {
        let index = self.clauses;
        self.clauses += 1;
        if self.result.is_none() {
            let clause = Clause::new(&pattern, &self.options, handler);
            if clause.matches(&self.input) {
                trace!(clause = index, "clause matched");
                self.result = Some(clause.apply(&self.input));
            }
        }
        self
    }
}

impl<R> fmt::Debug for ValueMatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueMatcher")
            .field("input", &self.input)
            .field("matched", &self.result.is_some())
            .field("clauses", &self.clauses)
            .finish()
    }
}
