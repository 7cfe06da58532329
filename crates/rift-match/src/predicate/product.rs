//! Positional and structural predicate combinators.

use super::Predicate;
use crate::value::{PropertyKey, Value};

/// Test a pair: `first` on element 0, `second` on element 1.
pub fn product<A: 'static, B: 'static>(
    first: Predicate<A>,
    second: Predicate<B>,
) -> Predicate<(A, B)> {
    Predicate::new(move |(a, b): &(A, B)| first.test(a) && second.test(b))
}

/// Test a sequence: `first` on element 0 and each of `rest` on the following
/// positions. A missing element fails the test.
pub fn product_many<T: 'static>(
    first: Predicate<T>,
    rest: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<[T]> {
    tuple(std::iter::once(first).chain(rest))
}

/// Positional conjunction with an explicit arity: the predicate at index `i`
/// tests element `i`, and a missing element fails the test.
pub fn tuple<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<[T]> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |items: &[T]| {
        items.len() >= predicates.len()
            && predicates.iter().zip(items).all(|(p, item)| p.test(item))
    })
}

/// Each present element is tested by the predicate at its position. Checking
/// stops at whichever runs out first, elements or predicates.
pub fn all<T: 'static>(predicates: impl IntoIterator<Item = Predicate<T>>) -> Predicate<[T]> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |items: &[T]| predicates.iter().zip(items).all(|(p, item)| p.test(item)))
}

/// Structural predicate: the input must be object-like and every listed
/// property must satisfy its predicate. Absent properties are tested as
/// `undefined`.
pub fn shape<K: Into<PropertyKey>>(
    fields: impl IntoIterator<Item = (K, Predicate<Value>)>,
) -> Predicate<Value> {
    let fields: Vec<(PropertyKey, Predicate<Value>)> =
        fields.into_iter().map(|(k, p)| (k.into(), p)).collect();
    Predicate::new(move |value: &Value| {
        value.is_object_like()
            && fields
                .iter()
                .all(|(key, p)| p.test(value.property(key).unwrap_or(&Value::Undefined)))
    })
}
