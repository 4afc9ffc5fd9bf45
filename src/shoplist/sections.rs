//! # Sections
//!
//! A section is not stored anywhere. It is the run of entries that follows a
//! divider, up to the next divider or the end of the list, and it is derived
//! from positions every time it is needed:
//!
//! ```text
//!  0  Bread             (no section)
//!  1  -- Fruit --       divider_index = 1, span = 2..4
//!  2  Apple
//!  3  Pear
//!  4  -- Dairy --       divider_index = 4, span = 5..6
//!  5  Milk
//! ```
//!
//! Deleting or moving a divider therefore never needs any bookkeeping: the
//! entries it used to head simply belong to whatever divider now precedes
//! them. Nothing here caches spans across mutations.

use crate::model::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// Position of the divider itself.
    pub divider_index: usize,
    /// First position after the divider.
    pub start: usize,
    /// Position of the next divider, or the list length.
    pub end: usize,
}

impl Section {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Derives the ordered list of sections from the current entry positions.
pub fn sections(entries: &[Entry]) -> Vec<Section> {
    let mut result: Vec<Section> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_divider() {
            continue;
        }
        if let Some(previous) = result.last_mut() {
            previous.end = index;
        }
        result.push(Section {
            name: entry.name.clone(),
            divider_index: index,
            start: index + 1,
            end: entries.len(),
        });
    }

    result
}

/// First section whose divider name matches `name`, ignoring case.
pub fn find_section(entries: &[Entry], name: &str) -> Option<Section> {
    sections(entries).into_iter().find(|s| s.matches(name))
}

/// The section the entry at `index` falls into, if any.
///
/// Dividers are not members of their own section.
pub fn section_of(entries: &[Entry], index: usize) -> Option<Section> {
    sections(entries).into_iter().find(|s| s.contains(index))
}
