//! Error types raised when a matcher finds no clause for its input.

/// Failure of a terminal policy that does not tolerate unmatched input.
///
/// Pattern compilation never fails; these are the only runtime errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// `exhaustive` matcher applied to an input no clause covers.
    #[error("no clause matched input: {input}")]
    Unmatched { input: String },

    /// `or_else_absurd` matcher applied to an input no clause covers.
    #[error("effect/Match/orElseAbsurd: absurd")]
    Absurd,
}
