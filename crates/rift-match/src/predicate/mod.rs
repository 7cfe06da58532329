//! Predicate algebra: boolean tests, refinements and their combinators.
//!
//! This module provides the leaf vocabulary the pattern compiler is built on,
//! and is usable on its own.
//!
//! # Module Structure
//!
//! - `logical` - Boolean combinators (not, and, or, xor, eqv, implies, nor, nand, some, every)
//! - `product` - Positional and structural combinators (product, tuple, all, shape)
//! - `guards` - Type-classification predicates over `Value`
//! - `refinements` - Narrowing refinements over `Value`

pub mod guards;
mod logical;
mod product;
pub mod refinements;

pub use logical::{every, some};
pub use product::{all, product, product_many, shape, tuple};

use std::fmt;
use std::sync::Arc;

/// A pure boolean test over `T`.
///
/// Cloning is cheap; the underlying function is shared. Combinators consume
/// their operands and return a new predicate.
pub struct Predicate<T: ?Sized>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T: ?Sized + 'static> Predicate<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Predicate that always holds.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Predicate that never holds.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    #[inline]
    pub fn test(&self, input: &T) -> bool {
        (self.0)(input)
    }
}

impl<T: 'static> Predicate<T> {
    /// Build a predicate over `A` by mapping the input into `T` first.
    pub fn map_input<A, F>(self, f: F) -> Predicate<A>
    where
        A: ?Sized + 'static,
        F: Fn(&A) -> T + Send + Sync + 'static,
    {
        Predicate::new(move |a: &A| self.test(&f(a)))
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// A test that also narrows its input: success yields a view of type `B`.
///
/// At runtime a refinement behaves exactly like a predicate; `test` and
/// `to_predicate` discard the narrowed view.
pub struct Refinement<A: ?Sized, B: ?Sized>(
    Arc<dyn for<'a> Fn(&'a A) -> Option<&'a B> + Send + Sync>,
);

impl<A: ?Sized + 'static, B: ?Sized + 'static> Refinement<A, B> {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a A) -> Option<&'a B> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn refine<'a>(&self, input: &'a A) -> Option<&'a B> {
        (self.0)(input)
    }

    #[inline]
    pub fn test(&self, input: &A) -> bool {
        self.refine(input).is_some()
    }

    /// Narrow with `self`, then narrow the result with `next`.
    pub fn compose<C: ?Sized + 'static>(self, next: Refinement<B, C>) -> Refinement<A, C> {
        Refinement::new(move |a: &A| self.refine(a).and_then(|b| next.refine(b)))
    }

    /// Narrow with `self`, then test the narrowed view with `predicate`.
    pub fn and_then(self, predicate: Predicate<B>) -> Predicate<A> {
        Predicate::new(move |a: &A| self.refine(a).is_some_and(|b| predicate.test(b)))
    }

    pub fn to_predicate(self) -> Predicate<A> {
        Predicate::new(move |a: &A| self.test(a))
    }
}

impl<A: ?Sized, B: ?Sized> Clone for Refinement<A, B> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A: ?Sized, B: ?Sized> fmt::Debug for Refinement<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Refinement")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn is_positive() -> Predicate<f64> {
        Predicate::new(|n: &f64| *n > 0.0)
    }

    #[test]
    fn test_compose_refinements() {
        let refinement = refinements::string().compose(refinements::non_empty_str());
        assert!(refinement.test(&Value::from("a")));
        assert!(!refinement.test(&Value::Null));
        assert!(!refinement.test(&Value::from("")));
        assert_eq!(refinement.refine(&Value::from("abc")), Some("abc"));
    }

    #[test]
    fn test_map_input() {
        struct A {
            a: f64,
        }
        let predicate = is_positive().map_input(|a: &A| a.a);
        assert!(!predicate.test(&A { a: -1.0 }));
        assert!(!predicate.test(&A { a: 0.0 }));
        assert!(predicate.test(&A { a: 1.0 }));
    }

    #[test]
    fn test_refinement_and_then() {
        let predicate = refinements::number().and_then(is_positive());
        assert!(predicate.test(&Value::from(2)));
        assert!(!predicate.test(&Value::from(-2)));
        assert!(!predicate.test(&Value::from("2")));
    }

    #[test]
    fn test_always_and_never() {
        assert!(Predicate::<Value>::always().test(&Value::Null));
        assert!(!Predicate::<Value>::never().test(&Value::Null));
    }
}
