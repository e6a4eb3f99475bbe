//! Element types that can be stored in a [`Set`](crate::Set).
//!
//! A set only accepts scalar values: every signed and unsigned integer
//! width, both floating-point widths, and strings (`String` and `&str`).
//! The [`Element`] trait is sealed, so any other type (tuples, structs,
//! vectors) is rejected at compile time.
//!
//! # Keys
//!
//! Each element type has an associated [`Element::Key`], the hashable form
//! actually stored in the set. For integers and strings the key is the value
//! itself. Floating-point numbers implement neither `Hash` nor `Eq`, so they
//! are stored as a [`FloatKey`], which compares by the bit pattern of a
//! canonical value:
//!
//! - `-0.0` is stored as `+0.0`, so `0.0` and `-0.0` are the same element
//! - every NaN payload collapses to one canonical NaN, so adding NaN twice
//!   yields a single element
//!
//! # Examples
//!
//! ```rust
//! use scalarset::Set;
//!
//! let mut set = Set::new();
//! set.add(0.0_f64);
//! set.add(-0.0_f64);
//! set.add(f64::NAN);
//! set.add(f64::NAN);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&-0.0));
//! assert!(set.contains(&f64::NAN));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Element Trait
// =============================================================================

/// A scalar value that can be stored in a [`Set`](crate::Set).
///
/// This trait is sealed and implemented for:
///
/// - `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
/// - `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
/// - `f32`, `f64`
/// - `String`, `&str`
pub trait Element: Clone + sealed::Sealed {
    /// The hashable representation stored in the set.
    type Key: Hash + Eq + Clone;

    /// Converts the element into its stored key.
    fn into_key(self) -> Self::Key;

    /// Calls `function` with the key of a borrowed element.
    ///
    /// Lookups go through this method so that string elements are searched
    /// for without being cloned.
    fn with_key<R>(&self, function: impl FnOnce(&Self::Key) -> R) -> R;

    /// Returns the element a stored key represents.
    fn from_key(key: &Self::Key) -> &Self;

    /// Converts a stored key back into an owned element.
    fn from_key_owned(key: Self::Key) -> Self;
}

macro_rules! impl_element_identity {
    ($($element:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $element {}

            impl Element for $element {
                type Key = Self;

                #[inline]
                fn into_key(self) -> Self::Key {
                    self
                }

                #[inline]
                fn with_key<R>(&self, function: impl FnOnce(&Self::Key) -> R) -> R {
                    function(self)
                }

                #[inline]
                fn from_key(key: &Self::Key) -> &Self {
                    key
                }

                #[inline]
                fn from_key_owned(key: Self::Key) -> Self {
                    key
                }
            }
        )*
    };
}

impl_element_identity!(i8, i16, i32, i64, i128, isize);
impl_element_identity!(u8, u16, u32, u64, u128, usize);
impl_element_identity!(String);

impl sealed::Sealed for &str {}

impl<'a> Element for &'a str {
    type Key = &'a str;

    #[inline]
    fn into_key(self) -> Self::Key {
        self
    }

    #[inline]
    fn with_key<R>(&self, function: impl FnOnce(&Self::Key) -> R) -> R {
        function(self)
    }

    #[inline]
    fn from_key(key: &Self::Key) -> &Self {
        key
    }

    #[inline]
    fn from_key_owned(key: Self::Key) -> Self {
        key
    }
}

// =============================================================================
// FloatKey
// =============================================================================

/// The stored form of a floating-point element.
///
/// Holds the canonical value: `-0.0` becomes `+0.0` and any NaN becomes the
/// type's `NAN` constant. Equality and hashing use the bit pattern of that
/// canonical value, which makes them reflexive for NaN.
#[derive(Clone, Copy)]
pub struct FloatKey<F>(F);

impl<F: Copy> FloatKey<F> {
    /// Returns the canonical floating-point value.
    #[inline]
    pub fn get(self) -> F {
        self.0
    }
}

impl<F: fmt::Debug> fmt::Debug for FloatKey<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

macro_rules! impl_element_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl FloatKey<$float> {
                /// Creates a key from a value, canonicalizing zero and NaN.
                #[inline]
                #[must_use]
                pub fn new(value: $float) -> Self {
                    if value.is_nan() {
                        Self(<$float>::NAN)
                    } else if value == 0.0 {
                        Self(0.0)
                    } else {
                        Self(value)
                    }
                }
            }

            impl PartialEq for FloatKey<$float> {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    self.0.to_bits() == other.0.to_bits()
                }
            }

            impl Eq for FloatKey<$float> {}

            impl Hash for FloatKey<$float> {
                #[inline]
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.0.to_bits().hash(state);
                }
            }

            impl sealed::Sealed for $float {}

            impl Element for $float {
                type Key = FloatKey<$float>;

                #[inline]
                fn into_key(self) -> Self::Key {
                    FloatKey::<$float>::new(self)
                }

                #[inline]
                fn with_key<R>(&self, function: impl FnOnce(&Self::Key) -> R) -> R {
                    function(&FloatKey::<$float>::new(*self))
                }

                #[inline]
                fn from_key(key: &Self::Key) -> &Self {
                    &key.0
                }

                #[inline]
                fn from_key_owned(key: Self::Key) -> Self {
                    key.0
                }
            }
        )*
    };
}

impl_element_float!(f32, f64);

// Composite types stay outside the closed family.
static_assertions::assert_not_impl_any!((i32, i32): Element);
static_assertions::assert_not_impl_any!(Vec<u8>: Element);
static_assertions::assert_not_impl_any!(Option<i32>: Element);
static_assertions::assert_not_impl_any!(char: Element);
static_assertions::assert_not_impl_any!(bool: Element);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<K: Hash>(key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(0.0, -0.0)]
    #[case(f64::NAN, -f64::NAN)]
    #[case(f64::NAN, f64::from_bits(0x7ff8_0000_0000_0001))]
    #[case(1.5, 1.5)]
    fn test_float_keys_equal_after_canonicalization(#[case] left: f64, #[case] right: f64) {
        let left = left.into_key();
        let right = right.into_key();

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    fn test_float_keys_distinguish_values() {
        assert_ne!(1.0_f64.into_key(), 2.0_f64.into_key());
        assert_ne!(0.0_f32.into_key(), f32::NAN.into_key());
        assert_ne!(f32::INFINITY.into_key(), f32::NEG_INFINITY.into_key());
    }

    #[rstest]
    fn test_negative_zero_is_stored_as_positive_zero() {
        let key = (-0.0_f64).into_key();

        assert!(f64::from_key(&key).is_sign_positive());
        assert_eq!(f64::from_key_owned(key).to_bits(), 0.0_f64.to_bits());
    }

    #[rstest]
    fn test_with_key_borrows_string() {
        let word = "fox".to_string();
        let length = word.with_key(|key| key.len());

        assert_eq!(length, 3);
        assert_eq!(word, "fox");
    }

    #[rstest]
    fn test_identity_round_trip() {
        assert_eq!(i128::from_key_owned(i128::MIN.into_key()), i128::MIN);
        assert_eq!(*u8::from_key(&u8::MAX.into_key()), u8::MAX);
        assert_eq!(<&str>::from_key_owned("dog".into_key()), "dog");
    }

    #[rstest]
    fn test_float_key_get_returns_canonical_value() {
        assert_eq!(FloatKey::<f64>::new(-0.0).get().to_bits(), 0.0_f64.to_bits());
        assert!(FloatKey::<f32>::new(-f32::NAN).get().is_nan());
        assert_eq!(2.5_f64.into_key().get(), 2.5);
    }

    #[rstest]
    fn test_float_key_debug_shows_value() {
        assert_eq!(format!("{:?}", 2.5_f32.into_key()), "2.5");
    }
}
