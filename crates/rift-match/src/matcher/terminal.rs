//! Terminal policies: what a matcher produces when a clause fires and when
//! none does.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::Handler;
use crate::error::MatchError;
use crate::value::Value;

/// Completes an evaluation given the input and the first clause result.
pub trait Terminal<R> {
    type Output;

    /// Name reported in logs.
    const NAME: &'static str;

    fn finish(&self, input: &Value, matched: Option<R>) -> Self::Output;
}

/// Every input must be covered; an unmatched input is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl<R> Terminal<R> for Exhaustive {
    type Output = Result<R, MatchError>;
    const NAME: &'static str = "exhaustive";

    fn finish(&self, input: &Value, matched: Option<R>) -> Self::Output {
        matched.ok_or_else(|| {
            debug!(input = %input, "no clause matched exhaustive matcher");
            MatchError::Unmatched {
                input: input.to_string(),
            }
        })
    }
}

/// Unmatched input is a logic error the caller asserts cannot happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absurd;

impl<R> Terminal<R> for Absurd {
    type Output = Result<R, MatchError>;
    const NAME: &'static str = "or_else_absurd";

    fn finish(&self, input: &Value, matched: Option<R>) -> Self::Output {
        matched.ok_or_else(|| {
            debug!(input = %input, "absurd input reached matcher");
            MatchError::Absurd
        })
    }
}

/// Fallback handler applied to unmatched input.
pub struct OrElse<R>(pub(crate) Handler<R>);

impl<R> Terminal<R> for OrElse<R> {
    type Output = R;
    const NAME: &'static str = "or_else";

    fn finish(&self, input: &Value, matched: Option<R>) -> R {
        matched.unwrap_or_else(|| (self.0)(input))
    }
}

impl<R> Clone for OrElse<R> {
    fn clone(&self) -> Self {
        OrElse(Arc::clone(&self.0))
    }
}

impl<R> fmt::Debug for OrElse<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrElse(<handler>)")
    }
}

/// Absence of a match is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl<R> Terminal<R> for Optional {
    type Output = Option<R>;
    const NAME: &'static str = "option";

    fn finish(&self, _input: &Value, matched: Option<R>) -> Option<R> {
        matched
    }
}

/// Unmatched input is handed back as the error side.
#[derive(Debug, Clone, Copy, Default)]
pub struct Either;

impl<R> Terminal<R> for Either {
    type Output = Result<R, Value>;
    const NAME: &'static str = "either";

    fn finish(&self, input: &Value, matched: Option<R>) -> Self::Output {
        matched.ok_or_else(|| input.clone())
    }
}
