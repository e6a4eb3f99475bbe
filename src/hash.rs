//! Hasher selection.
//!
//! [`DefaultHashBuilder`] is the hasher a [`Set`](crate::Set) uses unless
//! another one is supplied. Cargo features swap it for a faster hash:
//!
//! - default: `std::collections::hash_map::RandomState` (SipHash, DoS resistant)
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState`
//!
//! If both `fxhash` and `ahash` are enabled, `fxhash` is used. The choice
//! never changes observable behavior, only performance.

#[cfg(feature = "fxhash")]
/// The hash builder used by [`Set`](crate::Set) by default.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The hash builder used by [`Set`](crate::Set) by default.
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The hash builder used by [`Set`](crate::Set) by default.
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_deterministically() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }

    #[rstest]
    fn test_cloned_builder_hashes_identically() {
        let builder = DefaultHashBuilder::default();
        let cloned = builder.clone();
        assert_eq!(builder.hash_one("alpha"), cloned.hash_one("alpha"));
    }
}
