//! Events: finite ordered sets of outcomes.
//!
//! Keeping events ordered lets unions and intersections run as a single linear
//! merge over both inputs, without hashing or sorting.

use std::collections::BTreeSet;

/// A finite set of outcomes.
pub type Event<O> = BTreeSet<O>;

/// Outcomes in `a` or `b`, in ascending order and without duplicates.
///
/// Runs in O(|a| + |b|).
///
/// # Example
/// ```rust
/// use prob_space::event::{Event, union_of};
///
/// let a = Event::from([1, 2, 3]);
/// let b = Event::from([2, 3, 4]);
/// assert_eq!(union_of(&a, &b).copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
pub fn union_of<'a, O: Ord>(a: &'a Event<O>, b: &'a Event<O>) -> impl Iterator<Item = &'a O> {
    a.union(b)
}

/// Outcomes in both `a` and `b`, in ascending order.
///
/// Runs in O(|a| + |b|).
pub fn intersection_of<'a, O: Ord>(
    a: &'a Event<O>,
    b: &'a Event<O>,
) -> impl Iterator<Item = &'a O> {
    a.intersection(b)
}
