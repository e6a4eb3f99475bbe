//! Demonstration configuration.
//!
//! The texts compared by the text-analysis section come from, in order of
//! precedence: command-line flags, environment variables, built-in defaults.
//!
//! # Environment Variables
//!
//! - `SCALARSET_DEMO_TEXT_A`: first text (optional)
//! - `SCALARSET_DEMO_TEXT_B`: second text (optional)

use std::env;

use crate::error::DemoError;

/// Environment variable holding the first analysed text.
pub const TEXT_A_VAR: &str = "SCALARSET_DEMO_TEXT_A";
/// Environment variable holding the second analysed text.
pub const TEXT_B_VAR: &str = "SCALARSET_DEMO_TEXT_B";

/// Default first text.
pub const DEFAULT_TEXT_A: &str = "the quick brown fox jumps over the lazy dog";
/// Default second text.
pub const DEFAULT_TEXT_B: &str = "the brown dog sleeps in the garden";

/// Configuration for the demonstration program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// First text for the text-analysis section.
    pub text_a: String,
    /// Second text for the text-analysis section.
    pub text_b: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            text_a: DEFAULT_TEXT_A.to_string(),
            text_b: DEFAULT_TEXT_B.to_string(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Config`] if a variable is set but blank or not
    /// valid Unicode.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Loads configuration through `lookup`, which behaves like
    /// [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Config`] if a variable is set but blank or not
    /// valid Unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DemoError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = Self::default();
        Ok(Self {
            text_a: read_text(&lookup, TEXT_A_VAR)?.unwrap_or(defaults.text_a),
            text_b: read_text(&lookup, TEXT_B_VAR)?.unwrap_or(defaults.text_b),
        })
    }

    /// Replaces the texts with any that were given on the command line.
    #[must_use]
    pub fn with_overrides(self, text_a: Option<String>, text_b: Option<String>) -> Self {
        Self {
            text_a: text_a.unwrap_or(self.text_a),
            text_b: text_b.unwrap_or(self.text_b),
        }
    }
}

fn read_text<F>(lookup: &F, key: &str) -> Result<Option<String>, DemoError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Err(DemoError::Config {
            key: key.to_string(),
            message: "must not be blank".to_string(),
        }),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(DemoError::Config {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}
