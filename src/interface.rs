//! The abstract set contract.
//!
//! [`UnorderedSet`] names the operations every set offers, so callers can be
//! written against "a set of `T`" rather than a concrete [`Set`] and its
//! hasher.
//!
//! # Examples
//!
//! ```rust
//! use scalarset::{Set, UnorderedSet};
//!
//! fn common_count<S: UnorderedSet<i32>>(left: &S, right: &S) -> usize {
//!     left.intersect(right).len()
//! }
//!
//! let left = Set::from([1, 2, 3]);
//! let right = Set::from([2, 3, 4]);
//! assert_eq!(common_count(&left, &right), 2);
//! ```

use std::hash::BuildHasher;

use crate::element::Element;
use crate::set::Set;

/// An unordered collection of unique values of type `T`.
///
/// Algebra operations take both operands by shared reference and return a
/// new collection; they never modify either operand.
pub trait UnorderedSet<T: Element>: Sized {
    /// Adds `value`; does nothing if it is already present.
    fn add(&mut self, value: T);

    /// Removes `value`; does nothing if it is absent.
    fn remove(&mut self, value: &T);

    /// Returns `true` if `value` is a member.
    fn contains(&self, value: &T) -> bool;

    /// Returns every member exactly once, in unspecified order.
    fn all(&self) -> Vec<T>;

    /// Removes every member.
    fn clear(&mut self);

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns `true` if there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values present in either collection.
    #[must_use]
    fn union(&self, other: &Self) -> Self;

    /// Returns the values present in both collections.
    #[must_use]
    fn intersect(&self, other: &Self) -> Self;

    /// Returns the values present in exactly one of the collections
    /// (symmetric difference).
    #[must_use]
    fn diff(&self, other: &Self) -> Self;
}

impl<T: Element, S: BuildHasher + Clone> UnorderedSet<T> for Set<T, S> {
    #[inline]
    fn add(&mut self, value: T) {
        Self::add(self, value);
    }

    #[inline]
    fn remove(&mut self, value: &T) {
        Self::remove(self, value);
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }

    #[inline]
    fn all(&self) -> Vec<T> {
        Self::all(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn union(&self, other: &Self) -> Self {
        Self::union(self, other)
    }

    #[inline]
    fn intersect(&self, other: &Self) -> Self {
        Self::intersect(self, other)
    }

    #[inline]
    fn diff(&self, other: &Self) -> Self {
        Self::diff(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fill<S: UnorderedSet<u8> + Default>(values: &[u8]) -> S {
        let mut set = S::default();
        for value in values {
            set.add(*value);
        }
        set
    }

    #[rstest]
    fn test_generic_caller_sees_set_semantics() {
        let mut set: Set<u8> = fill(&[1, 2, 2, 3]);

        assert_eq!(UnorderedSet::len(&set), 3);
        assert!(UnorderedSet::contains(&set, &2));

        UnorderedSet::remove(&mut set, &2);
        assert!(!UnorderedSet::contains(&set, &2));

        UnorderedSet::clear(&mut set);
        assert!(UnorderedSet::is_empty(&set));
    }

    #[rstest]
    fn test_generic_algebra_matches_inherent_methods() {
        let left: Set<u8> = fill(&[1, 2, 3]);
        let right: Set<u8> = fill(&[3, 4]);

        assert_eq!(UnorderedSet::union(&left, &right), left.union(&right));
        assert_eq!(UnorderedSet::intersect(&left, &right), Set::from([3]));
        assert_eq!(UnorderedSet::diff(&left, &right), Set::from([1, 2, 4]));

        let mut all = UnorderedSet::all(&left);
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3]);
    }
}
