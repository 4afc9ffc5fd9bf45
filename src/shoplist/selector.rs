//! # Selectors
//!
//! Entries carry stable UUIDs, but nobody wants to type those. Users refer
//! to entries by their 1-based position in the list as it is displayed
//! (`3`), by a range of positions (`2-5`), or by name (`milk`).
//!
//! Positions are only meaningful against the list they were displayed from,
//! so they are resolved to ids once, up front, before any command mutates
//! anything. A command that deletes entries 2 and 3 therefore deletes the
//! entries the user saw as 2 and 3, not whatever slides into position 2
//! after the first removal.

use crate::error::{Result, ShopError};
use crate::list::ShoppingList;
use crate::model::Entry;
use crate::sections::{names_match, section_of};
use std::str::FromStr;
use uuid::Uuid;

/// An entry as it appears on screen: where it sits and which section it
/// falls under.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub entry: Entry,
    /// 1-based position in the full list.
    pub position: usize,
    pub section: Option<String>,
}

/// Pairs every entry with its display position and current section.
pub fn index_entries(list: &ShoppingList) -> Vec<DisplayEntry> {
    let entries = list.entries();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            entry: entry.clone(),
            position: i + 1,
            section: section_of(entries, i).map(|s| s.name),
        })
        .collect()
}

/// Like [`index_entries`], restricted to the active items.
pub fn index_active(list: &ShoppingList) -> Vec<DisplayEntry> {
    index_entries(list)
        .into_iter()
        .filter(|de| de.entry.is_item() && de.entry.active)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Position(usize),
    /// Inclusive, 1-based. Only expanded once checked against the list.
    Range(usize, usize),
    Name(String),
}

impl std::fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntrySelector::Position(p) => write!(f, "{}", p),
            EntrySelector::Range(start, end) => write!(f, "{}-{}", start, end),
            EntrySelector::Name(n) => write!(f, "\"{}\"", n),
        }
    }
}

/// Parses a 1-based position, or a range like `2-5`.
pub fn parse_position_or_range(s: &str) -> std::result::Result<EntrySelector, String> {
    if let Some((start, end)) = s.split_once('-') {
        let start = parse_position(start)?;
        let end = parse_position(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        return Ok(EntrySelector::Range(start, end));
    }
    parse_position(s).map(EntrySelector::Position)
}

fn parse_position(s: &str) -> std::result::Result<usize, String> {
    match usize::from_str(s.trim()) {
        Ok(0) => Err("Positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid position: {}", s)),
    }
}

/// Turns raw user arguments into selectors.
///
/// When every argument is a position or range, each one selects by
/// position. Otherwise the arguments are joined into a single name, so
/// `toggle olive oil` works without quoting.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<EntrySelector> {
    let positions: std::result::Result<Vec<EntrySelector>, _> = inputs
        .iter()
        .map(|s| parse_position_or_range(s.as_ref()))
        .collect();

    if let Ok(selectors) = positions {
        return selectors;
    }

    let name = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    vec![EntrySelector::Name(name)]
}

/// Resolves selectors to `(position, id)` pairs against the current list.
///
/// Name lookups match case-insensitively; the first match in list order
/// wins. A range must lie entirely inside the list.
pub fn resolve(list: &ShoppingList, selectors: &[EntrySelector]) -> Result<Vec<(usize, Uuid)>> {
    let entries = list.entries();
    let mut resolved = Vec::new();
    for selector in selectors {
        match selector {
            EntrySelector::Position(p) => resolved.push(at_position(entries, *p)?),
            EntrySelector::Range(start, end) => {
                if *end > entries.len() {
                    return Err(ShopError::Api(format!(
                        "Range {}-{} goes past the end of the list ({} entries)",
                        start,
                        end,
                        entries.len()
                    )));
                }
                for p in *start..=*end {
                    resolved.push(at_position(entries, p)?);
                }
            }
            EntrySelector::Name(name) => resolved.push(
                entries
                    .iter()
                    .position(|e| names_match(&e.name, name))
                    .map(|i| (i + 1, entries[i].id))
                    .ok_or_else(|| ShopError::Api(format!("No entry named \"{}\"", name)))?,
            ),
        }
    }
    Ok(resolved)
}

fn at_position(entries: &[Entry], position: usize) -> Result<(usize, Uuid)> {
    position
        .checked_sub(1)
        .and_then(|i| entries.get(i))
        .map(|e| (position, e.id))
        .ok_or_else(|| ShopError::Api(format!("Position {} is not in the list", position)))
}
