//! Boolean combinators for predicates.
//!
//! `and` and `or` short-circuit. The derived operators follow the textbook
//! truth tables.

use super::Predicate;
use std::ops;

impl<T: ?Sized + 'static> Predicate<T> {
    /// Logical negation.
    pub fn not(self) -> Self {
        Predicate::new(move |x: &T| !self.test(x))
    }

    /// Holds iff both hold; `that` is not evaluated when `self` fails.
    pub fn and(self, that: Predicate<T>) -> Self {
        Predicate::new(move |x: &T| self.test(x) && that.test(x))
    }

    /// Holds iff either holds; `that` is not evaluated when `self` holds.
    pub fn or(self, that: Predicate<T>) -> Self {
        Predicate::new(move |x: &T| self.test(x) || that.test(x))
    }

    /// Holds iff exactly one holds.
    pub fn xor(self, that: Predicate<T>) -> Self {
        Predicate::new(move |x: &T| self.test(x) != that.test(x))
    }

    /// Holds iff both agree.
    pub fn eqv(self, that: Predicate<T>) -> Self {
        Predicate::new(move |x: &T| self.test(x) == that.test(x))
    }

    /// Material implication: fails only when `self` holds and `that` does not.
    pub fn implies(self, that: Predicate<T>) -> Self {
        Predicate::new(move |x: &T| !self.test(x) || that.test(x))
    }

    pub fn nor(self, that: Predicate<T>) -> Self {
        self.or(that).not()
    }

    pub fn nand(self, that: Predicate<T>) -> Self {
        self.and(that).not()
    }
}

/// Holds iff at least one predicate holds. False for an empty list.
pub fn some<T: ?Sized + 'static>(
    predicates: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<T> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |x: &T| predicates.iter().any(|p| p.test(x)))
}

/// Holds iff every predicate holds. Vacuously true for an empty list.
pub fn every<T: ?Sized + 'static>(
    predicates: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<T> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |x: &T| predicates.iter().all(|p| p.test(x)))
}

impl<T: ?Sized + 'static> ops::Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Self::Output {
        Predicate::not(self)
    }
}

impl<T: ?Sized + 'static> ops::BitAnd for Predicate<T> {
    type Output = Predicate<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> ops::BitOr for Predicate<T> {
    type Output = Predicate<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: ?Sized + 'static> ops::BitXor for Predicate<T> {
    type Output = Predicate<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn constant(b: bool) -> Predicate<()> {
        Predicate::new(move |_| b)
    }

    fn is_positive() -> Predicate<i32> {
        Predicate::new(|n: &i32| *n > 0)
    }

    fn is_negative() -> Predicate<i32> {
        Predicate::new(|n: &i32| *n < 0)
    }

    fn is_less_than_2() -> Predicate<i32> {
        Predicate::new(|n: &i32| *n < 2)
    }

    /// Evaluate a binary combinator over the four input pairs, in the order
    /// (T,T), (T,F), (F,T), (F,F).
    fn truth_table(op: fn(Predicate<()>, Predicate<()>) -> Predicate<()>) -> [bool; 4] {
        [(true, true), (true, false), (false, true), (false, false)]
            .map(|(a, b)| op(constant(a), constant(b)).test(&()))
    }

    #[test]
    fn test_not() {
        let p = is_positive().not();
        assert!(!p.test(&1));
        assert!(p.test(&0));
        assert!(p.test(&-1));
    }

    #[test]
    fn test_or() {
        let p = is_positive().or(is_negative());
        assert!(p.test(&-1));
        assert!(p.test(&1));
        assert!(!p.test(&0));
    }

    #[test]
    fn test_and() {
        let p = is_positive().and(is_less_than_2());
        assert!(p.test(&1));
        assert!(!p.test(&-1));
        assert!(!p.test(&3));
    }

    #[test]
    fn test_truth_tables() {
        assert_eq!(truth_table(Predicate::and), [true, false, false, false]);
        assert_eq!(truth_table(Predicate::or), [true, true, true, false]);
        assert_eq!(truth_table(Predicate::xor), [false, true, true, false]);
        assert_eq!(truth_table(Predicate::eqv), [true, false, false, true]);
        assert_eq!(truth_table(Predicate::implies), [true, false, true, true]);
        assert_eq!(truth_table(Predicate::nor), [false, false, false, true]);
        assert_eq!(truth_table(Predicate::nand), [false, true, true, true]);
    }

    #[test]
    fn test_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = {
            let calls = Arc::clone(&calls);
            Predicate::new(move |_: &()| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            })
        };

        assert!(!constant(false).and(counting.clone()).test(&()));
        assert!(constant(true).or(counting.clone()).test(&()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(constant(true).and(counting).test(&()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_some() {
        let p = some([is_positive(), is_negative()]);
        assert!(!p.test(&0));
        assert!(p.test(&-1));
        assert!(p.test(&1));
        assert!(!some(Vec::<Predicate<i32>>::new()).test(&1));
    }

    #[test]
    fn test_every() {
        let p = every([is_positive(), is_less_than_2()]);
        assert!(!p.test(&0));
        assert!(!p.test(&-2));
        assert!(p.test(&1));
        assert!(every(Vec::<Predicate<i32>>::new()).test(&1));
    }

    #[test]
    fn test_operators() {
        let p = !is_positive();
        assert!(p.test(&0));
        let p = is_positive() & is_less_than_2();
        assert!(p.test(&1));
        assert!(!p.test(&2));
        let p = is_positive() | is_negative();
        assert!(!p.test(&0));
        let p = is_positive() ^ is_less_than_2();
        assert!(!p.test(&1));
        assert!(p.test(&5));
        assert!(p.test(&-5));
    }
}
