//! The demonstration sections.
//!
//! Each section builds sets, runs operations on them and writes a short
//! report. Elements are printed in sorted order so the report is
//! reproducible; the sets themselves stay unordered.

use std::fmt::Display;
use std::io::Write;

use scalarset::{Element, Set, UnorderedSet};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// A part of the demonstration that can be run on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    /// Integer set basics: add, duplicates, membership, remove.
    Integers,
    /// String sets: union and clear.
    Strings,
    /// Intersection, symmetric difference and union of integer sets.
    Operations,
    /// Word sets built from two texts.
    Text,
    /// Every section in order.
    All,
}

impl Section {
    /// Parts run for this selection, in order.
    const fn parts(self) -> &'static [Part] {
        match self {
            Self::Integers => &[Part::Integers],
            Self::Strings => &[Part::Strings],
            Self::Operations => &[Part::Operations],
            Self::Text => &[Part::Text],
            Self::All => &[Part::Integers, Part::Strings, Part::Operations, Part::Text],
        }
    }
}

/// A single runnable part of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Integers,
    Strings,
    Operations,
    Text,
}

impl Part {
    const fn title(self) -> &'static str {
        match self {
            Self::Integers => "Integer Set Examples",
            Self::Strings => "String Set Examples",
            Self::Operations => "Set Operations Example",
            Self::Text => "Practical Example: Text Analysis",
        }
    }

    fn write(self, config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
        match self {
            Self::Integers => integers(out),
            Self::Strings => strings(out),
            Self::Operations => operations(out),
            Self::Text => text_analysis(config, out),
        }
    }
}

/// Runs the selected sections, writing their reports to `out`.
///
/// # Errors
///
/// Returns [`DemoError::Io`] if writing to `out` fails.
pub fn run(selection: Section, config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    for (index, part) in selection.parts().iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        tracing::info!(section = part.title(), "running section");
        writeln!(out, "=== {} ===", part.title())?;
        part.write(config, out)?;
    }
    Ok(())
}

fn integers(out: &mut impl Write) -> Result<(), DemoError> {
    let mut numbers = Set::with_capacity(10);
    for number in 0..5 {
        numbers.add(number);
    }

    // Duplicates are ignored
    numbers.add(3);
    numbers.add(4);

    writeln!(out, "Numbers in set: {}", listing(&numbers))?;
    writeln!(out, "Set size: {}", numbers.len())?;
    writeln!(out, "Contains 3? {}", numbers.contains(&3))?;
    writeln!(out, "Contains 7? {}", numbers.contains(&7))?;

    numbers.remove(&3);
    writeln!(out, "After removing 3: {}", listing(&numbers))?;
    Ok(())
}

fn strings(out: &mut impl Write) -> Result<(), DemoError> {
    let mut fruits_a = Set::with_capacity(5);
    fruits_a.add("apple".to_string());
    fruits_a.add("banana".to_string());
    fruits_a.add("orange".to_string());

    let mut fruits_b = Set::with_capacity(5);
    fruits_b.add("banana".to_string());
    fruits_b.add("grape".to_string());
    fruits_b.add("kiwi".to_string());

    writeln!(out, "Fruits set 1: {}", listing(&fruits_a))?;
    writeln!(out, "Fruits set 2: {}", listing(&fruits_b))?;

    let mut union = fruits_a.union(&fruits_b);
    writeln!(out, "All fruits (union): {}", listing(&union))?;

    union.clear();
    writeln!(out, "After clearing union set: {}", listing(&union))?;
    Ok(())
}

fn operations(out: &mut impl Write) -> Result<(), DemoError> {
    let set_a: Set<i32> = (0..5).collect();
    let set_b: Set<i32> = (3..8).collect();

    writeln!(out, "Set 1: {}", listing(&set_a))?;
    writeln!(out, "Set 2: {}", listing(&set_b))?;
    writeln!(out, "Intersection: {}", listing(&set_a.intersect(&set_b)))?;
    writeln!(out, "Symmetric Difference: {}", listing(&set_a.diff(&set_b)))?;
    writeln!(out, "Union: {}", listing(&set_a.union(&set_b)))?;
    Ok(())
}

fn text_analysis(config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let words_a = text_to_set(&config.text_a);
    let words_b = text_to_set(&config.text_b);
    tracing::debug!(
        unique_a = words_a.len(),
        unique_b = words_b.len(),
        "built word sets"
    );

    writeln!(out, "Common words: {}", listing(&words_a.intersect(&words_b)))?;
    writeln!(out, "Words unique to each text: {}", listing(&words_a.diff(&words_b)))?;
    writeln!(out, "Total unique words: {}", listing(&words_a.union(&words_b)))?;
    Ok(())
}

/// Lower-cases `text` and splits it on whitespace into a set of words.
pub fn text_to_set(text: &str) -> Set<String> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let mut set = Set::with_capacity(words.len());
    for word in words {
        set.add(word.to_string());
    }
    set
}

/// Formats the members of `set` as `[a b c]`, sorted.
pub fn listing<T, S>(set: &S) -> String
where
    T: Element + Ord + Display,
    S: UnorderedSet<T>,
{
    let mut elements = set.all();
    elements.sort_unstable();
    let joined = elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{joined}]")
}
