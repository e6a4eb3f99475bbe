//! # scalarset
//!
//! An in-memory, unordered hash set over scalar values (integers,
//! floating-point numbers and strings) with membership testing, in-place
//! mutation and set algebra.
//!
//! ## Overview
//!
//! - [`Set`]: the collection. `add`, `remove`, `clear`, `contains`, `len`,
//!   `all`, plus `union`, `intersect` and `diff` (symmetric difference),
//!   which return new sets and leave both operands untouched.
//! - [`Element`]: the sealed family of types a set may hold.
//! - [`UnorderedSet`]: the abstract set contract, for generic callers.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] as a sequence
//! - `fxhash`: hash with `rustc-hash`'s `FxBuildHasher` by default
//! - `ahash`: hash with `ahash`'s `RandomState` by default
//! - `full`: enable all optional integrations
//!
//! ## Example
//!
//! ```rust
//! use scalarset::prelude::*;
//!
//! let mut words: Set<String> = Set::with_capacity(8);
//! for word in "the quick brown fox jumps over the lazy dog".split_whitespace() {
//!     words.add(word.to_string());
//! }
//! assert_eq!(words.len(), 8);
//!
//! let others: Set<String> = "the brown dog sleeps"
//!     .split_whitespace()
//!     .map(str::to_string)
//!     .collect();
//! let common = words.intersect(&others);
//! assert_eq!(common.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use scalarset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::interface::UnorderedSet;
    pub use crate::set::Set;
}

pub mod element;
pub mod hash;
pub mod interface;
pub mod set;

pub use element::{Element, FloatKey};
pub use hash::DefaultHashBuilder;
pub use interface::UnorderedSet;
pub use set::{IntoIter, Iter, Set};
