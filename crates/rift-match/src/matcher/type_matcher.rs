//! Reusable matchers built ahead of their inputs.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::terminal::{Absurd, Either, Exhaustive, OrElse, Optional, Terminal};
use super::{evaluate, Cases, Clause, Handler};
use crate::config::MatchOptions;
use crate::pattern::Pattern;
use crate::value::{Literal, Value};

/// Builder collecting clauses for a matcher that is applied later.
pub struct TypeMatcher<R> {
    clauses: Vec<Clause<R>>,
    options: MatchOptions,
}

impl<R: 'static> TypeMatcher<R> {
    pub fn new() -> Self {
        Self::with_options(MatchOptions::default())
    }

    pub fn with_options(options: MatchOptions) -> Self {
        Self {
            clauses: Vec::new(),
            options,
        }
    }

    /// Fail with [`MatchError::Unmatched`](crate::MatchError::Unmatched) on
    /// input no clause covers.
    pub fn exhaustive(self) -> Matcher<R, Exhaustive> {
        self.finish(Exhaustive)
    }

    /// Apply `f` to input no clause covers.
    pub fn or_else<F>(self, f: F) -> Matcher<R, OrElse<R>>
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
    {
        self.finish(OrElse(Arc::new(f)))
    }

    /// Fail with [`MatchError::Absurd`](crate::MatchError::Absurd) on
    /// input no clause covers.
    pub fn or_else_absurd(self) -> Matcher<R, Absurd> {
        self.finish(Absurd)
    }

    pub fn option(self) -> Matcher<R, Optional> {
        self.finish(Optional)
    }

    pub fn either(self) -> Matcher<R, Either> {
        self.finish(Either)
    }

    /// Register `mapping` on the tag field and finalize exhaustively.
    pub fn tags_exhaustive<K>(
        self,
        mapping: impl IntoIterator<Item = (K, Handler<R>)>,
    ) -> Matcher<R, Exhaustive>
    where
        K: Into<Literal>,
    {
        self.tags(mapping).exhaustive()
    }

    pub fn discriminators_exhaustive<K>(
        self,
        field: &str,
        mapping: impl IntoIterator<Item = (K, Handler<R>)>,
    ) -> Matcher<R, Exhaustive>
    where
        K: Into<Literal>,
    {
        self.discriminators(field, mapping).exhaustive()
    }

    fn finish<T: Terminal<R>>(self, terminal: T) -> Matcher<R, T> {
        debug!(
            clauses = self.clauses.len(),
            terminal = T::NAME,
            "matcher finalized"
        );
        Matcher {
            clauses: self.clauses.into(),
            terminal,
        }
    }
}

impl<R: 'static> Default for TypeMatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> Cases<R> for TypeMatcher<R> {
    fn options(&self) -> &MatchOptions {
        &self.options
    }

    fn add_clause(mut self, pattern: Pattern, handler: Handler<R>) -> Self {
        self.clauses.push(Clause::new(&pattern, &self.options, handler));
        self
    }
}

impl<R> fmt::Debug for TypeMatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMatcher")
            .field("clauses", &self.clauses.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Finalized matcher: a frozen clause list and a terminal policy.
///
/// Holds no state between invocations, so one matcher can be applied to any
/// number of inputs, from any number of threads.
pub struct Matcher<R, T> {
    clauses: Arc<[Clause<R>]>,
    terminal: T,
}

impl<R, T: Terminal<R>> Matcher<R, T> {
    pub fn run(&self, input: &Value) -> T::Output {
        self.terminal.finish(input, evaluate(&self.clauses, input))
    }

    /// The matcher as a plain function.
    pub fn into_fn(self) -> impl Fn(&Value) -> T::Output {
        move |input| self.run(input)
    }
}

impl<R, T> Matcher<R, T> {
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

impl<R, T: Clone> Clone for Matcher<R, T> {
    fn clone(&self) -> Self {
        Self {
            clauses: Arc::clone(&self.clauses),
            terminal: self.terminal.clone(),
        }
    }
}

impl<R, T: fmt::Debug> fmt::Debug for Matcher<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("clauses", &self.clauses.len())
            .field("terminal", &self.terminal)
            .finish()
    }
}
