//! Mutable, unordered hash set over scalar values.
//!
//! This module provides [`Set`], a collection of unique [`Element`] values
//! backed by a hash map from each value's key to a presence marker.
//!
//! # Overview
//!
//! - O(1) average `add`, `remove` and `contains`
//! - O(1) `len` and `is_empty`
//! - `union`, `intersect` and `diff` return new sets and never modify
//!   either operand
//!
//! Iteration order is unspecified and may differ between calls, between
//! sets with equal contents, and between hasher features. Callers must not
//! depend on it.
//!
//! # Examples
//!
//! ```rust
//! use scalarset::Set;
//!
//! let mut numbers = Set::with_capacity(10);
//! for number in 0..5 {
//!     numbers.add(number);
//! }
//! numbers.add(3); // duplicate, ignored
//!
//! assert_eq!(numbers.len(), 5);
//! assert!(numbers.contains(&3));
//!
//! numbers.remove(&3);
//! assert!(!numbers.contains(&3));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use scalarset::Set;
//!
//! let set_a = Set::from([1, 2, 3]);
//! let set_b = Set::from([2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b), Set::from([1, 2, 3, 4]));
//! assert_eq!(set_a.intersect(&set_b), Set::from([2, 3]));
//! assert_eq!(set_a.diff(&set_b), Set::from([1, 4])); // symmetric
//!
//! // Operands are untouched
//! assert_eq!(set_a, Set::from([1, 2, 3]));
//! assert_eq!(set_b, Set::from([2, 3, 4]));
//! ```

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::BuildHasher;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::element::Element;
use crate::hash::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique scalar values.
///
/// # Time Complexity
///
/// | Operation    | Complexity                  |
/// |--------------|-----------------------------|
/// | `new`        | O(1)                        |
/// | `add`        | O(1) average                |
/// | `remove`     | O(1) average                |
/// | `contains`   | O(1) average                |
/// | `len`        | O(1)                        |
/// | `all`        | O(n)                        |
/// | `clear`      | O(capacity)                 |
/// | `union`      | O(n + m)                    |
/// | `intersect`  | O(min(n, m))                |
/// | `diff`       | O(n + m)                    |
///
/// # Concurrency
///
/// `Set` has no internal locking. It is `Send` and `Sync` for every
/// element type, so it can be moved between threads or shared read-only;
/// concurrent mutation needs an external lock such as `std::sync::Mutex`.
///
/// # Examples
///
/// ```rust
/// use scalarset::Set;
///
/// let mut fruits = Set::new();
/// fruits.add("apple".to_string());
/// fruits.add("banana".to_string());
///
/// assert!(fruits.contains(&"apple".to_string()));
/// assert_eq!(fruits.len(), 2);
/// ```
pub struct Set<T: Element, S = DefaultHashBuilder> {
    inner: HashMap<T::Key, (), S>,
}

impl<T: Element> Set<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// assert!(set.all().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set pre-allocated for `size_hint` elements.
    ///
    /// The hint only affects allocation: the set grows past it as needed,
    /// and a hint of `0` is the same as [`Set::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let mut set = Set::with_capacity(2);
    /// assert!(set.capacity() >= 2);
    ///
    /// for value in 0..100 {
    ///     set.add(value);
    /// }
    /// assert_eq!(set.len(), 100);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(size_hint: usize) -> Self {
        Self::with_capacity_and_hasher(size_hint, DefaultHashBuilder::default())
    }
}

impl<T: Element, S> Set<T, S> {
    /// Creates an empty set that hashes with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set pre-allocated for `size_hint` elements that
    /// hashes with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(size_hint: usize, hash_builder: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(size_hint, hash_builder),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set = Set::from([1, 1, 2, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every element. The set stays usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    ///
    /// set.add(42);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.inner.keys(),
        }
    }
}

impl<T: Element, S: BuildHasher> Set<T, S> {
    /// Adds `value` to the set. Adding a value that is already present
    /// does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add(7);
    /// set.add(7);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) {
        self.inner.insert(value.into_key(), ());
    }

    /// Removes `value` from the set. Removing an absent value does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// set.remove(&1);
    /// set.remove(&1);
    /// set.remove(&5);
    /// assert_eq!(set, Set::from([2]));
    /// ```
    #[inline]
    pub fn remove(&mut self, value: &T) {
        value.with_key(|key| self.inner.remove(key));
    }

    /// Returns `true` if `value` is a member of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set = Set::from(["apple", "banana"]);
    /// assert!(set.contains(&"apple"));
    /// assert!(!set.contains(&"kiwi"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        value.with_key(|key| self.inner.contains_key(key))
    }

    /// Returns every element exactly once, in unspecified order.
    ///
    /// An empty set yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set = Set::from([3, 1, 2]);
    /// let mut elements = set.all();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.inner.keys().all(|key| other.inner.contains_key(key))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller
            .inner
            .keys()
            .any(|key| larger.inner.contains_key(key))
    }

    /// Keys of `self` that are not in `other`.
    fn keys_absent_from<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a T::Key> {
        self.inner
            .keys()
            .filter(move |key| !other.inner.contains_key(*key))
    }

    fn extend_keys<'a>(&mut self, keys: impl Iterator<Item = &'a T::Key>)
    where
        T::Key: 'a,
    {
        self.inner.extend(keys.map(|key| (key.clone(), ())));
    }
}

impl<T: Element, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set with every value present in `self`, `other`, or both.
    ///
    /// The result is pre-allocated for `self.len() + other.len()` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let union = Set::from([1, 2, 3]).union(&Set::from([3, 4, 5]));
    /// assert_eq!(union.len(), 5);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.empty_like(self.len().saturating_add(other.len()));
        result.extend_keys(self.inner.keys().chain(other.inner.keys()));
        result
    }

    /// Returns a new set with every value present in both `self` and `other`.
    ///
    /// Only the smaller operand is iterated; each of its elements is looked up
    /// in the larger one. The result does not depend on argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let large: Set<i32> = (1..=8).collect();
    /// let small = Set::from([3, 4, 5]);
    ///
    /// assert_eq!(large.intersect(&small), small);
    /// assert_eq!(small.intersect(&large), small);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = self.empty_like(smaller.len());
        result.extend_keys(
            smaller
                .inner
                .keys()
                .filter(|key| larger.inner.contains_key(*key)),
        );
        result
    }

    /// Returns the **symmetric** difference: a new set with the values that
    /// are in exactly one of `self` and `other`.
    ///
    /// This is `(self - other) ∪ (other - self)`. For the one-sided
    /// difference use [`Set::difference`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.diff(&set_b), Set::from([1, 4]));
    /// assert!(set_a.diff(&set_a).is_empty());
    /// ```
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self {
        let mut result = self.empty_like(self.len().max(other.len()));
        result.extend_keys(self.keys_absent_from(other));
        result.extend_keys(other.keys_absent_from(self));
        result
    }

    /// Returns a new set with the values of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarset::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([1]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.empty_like(self.len());
        result.extend_keys(self.keys_absent_from(other));
        result
    }

    fn empty_like(&self, size_hint: usize) -> Self {
        Self::with_capacity_and_hasher(size_hint, self.inner.hasher().clone())
    }
}

/// Orders two sets so the one with fewer elements comes first.
#[inline]
fn smaller_first<'a, T: Element, S>(
    left: &'a Set<T, S>,
    right: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct Iter<'a, T: Element + 'a> {
    keys: hash_map::Keys<'a, T::Key, ()>,
}

impl<'a, T: Element> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(T::from_key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<T: Element> FusedIterator for Iter<'_, T> {}

impl<T: Element> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoIter<T: Element> {
    keys: hash_map::IntoKeys<T::Key, ()>,
}

impl<T: Element> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(T::from_key_owned)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T: Element> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<T: Element> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Element, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Element, S: Clone> Clone for Set<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Element, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T: Element, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|value| (value.into_key(), ())));
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Element, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.inner.into_keys(),
        }
    }
}

impl<'a, T: Element, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Element, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Element + fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Element + fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Element, S: BuildHasher + Clone> BitOr<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the union of `self` and `rhs` as a new set.
    #[inline]
    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union(rhs)
    }
}

impl<T: Element, S: BuildHasher + Clone> BitAnd<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    #[inline]
    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersect(rhs)
    }
}

impl<T: Element, S: BuildHasher + Clone> BitXor<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    #[inline]
    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.diff(rhs)
    }
}

impl<T: Element, S: BuildHasher + Clone> Sub<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the values of `self` that are not in `rhs` as a new set.
    #[inline]
    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.difference(rhs)
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<f64>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<&'static str>: Send, Sync, Clone, Default);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for Set<T, S>
where
    T: Element + serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<fn() -> (T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

/// Upper bound on pre-allocation from an untrusted sequence length.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: Element + serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let size_hint = seq
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = Set::with_capacity_and_hasher(size_hint, S::default());
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: Element + serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Serde Tests
// =============================================================================
