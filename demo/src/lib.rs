//! Demonstration program for the scalarset library.
//!
//! Exercises the `Set` API the way an application would: integer sets,
//! string sets, set algebra, and a small text analysis that compares the
//! vocabularies of two texts.

pub mod config;
pub mod error;
pub mod sections;

pub use config::DemoConfig;
pub use error::DemoError;
pub use sections::{Section, run, text_to_set};
