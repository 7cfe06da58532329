//! Discriminator sugar.
//!
//! A discriminator is reduced to a single-field structural template when the
//! clause is registered, so it has no runtime representation of its own.

use crate::pattern::{self, Pattern};
use crate::value::Literal;

/// `input[field]` strictly equal to one of `tags`.
pub(crate) fn tag_pattern<L: Into<Literal>>(
    field: &str,
    tags: impl IntoIterator<Item = L>,
) -> Pattern {
    pattern::fields([(field, pattern::is(tags))])
}

/// `input[field]` is a string starting with `prefix`.
pub(crate) fn starts_with_pattern(field: &str, prefix: &str) -> Pattern {
    pattern::fields([(field, pattern::starts_with(prefix))])
}
