//! # List Model
//!
//! [`ShoppingList`] is one flat, ordered sequence of [`Entry`] values where
//! dividers and items live side by side. Order is meaning: it decides both
//! display order and which section an item belongs to (see [`crate::sections`]).
//!
//! Every operation here is a synchronous in-memory transform. Nothing in this
//! module persists, logs to the terminal or knows about selectors; callers
//! resolve user input to ids first.

use crate::error::{Result, ShopError};
use crate::input::AddRequest;
use crate::model::Entry;
use crate::sections::{find_section, sections, Section};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    entries: Vec<Entry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn sections(&self) -> Vec<Section> {
        sections(&self.entries)
    }

    fn get_mut(&mut self, id: &Uuid) -> Result<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or(ShopError::EntryNotFound(*id))
    }

    /// Parses `input` with the add micro-syntax and inserts the new entry.
    ///
    /// Returns the id of the entry that was created for the request (the
    /// item, or the divider for `-Name`). A section divider auto-created on
    /// the way is not reported here; it is visible in the list.
    pub fn add(&mut self, input: &str) -> Result<Uuid> {
        let request: AddRequest = input.parse().map_err(ShopError::Api)?;
        Ok(self.apply(request))
    }

    pub fn apply(&mut self, request: AddRequest) -> Uuid {
        match request {
            AddRequest::Divider(name) => self.push(Entry::divider(name)),
            AddRequest::Item {
                name,
                section: None,
            } => self.push(Entry::item(name)),
            AddRequest::Item {
                name,
                section: Some(section),
            } => self.insert_into_section(Entry::item(name), &section),
        }
    }

    fn push(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Places `entry` at the end of the first section named `section_name`
    /// (case-insensitive), appending a new divider first when none exists.
    pub fn insert_into_section(&mut self, entry: Entry, section_name: &str) -> Uuid {
        let span = match find_section(&self.entries, section_name) {
            Some(span) => span,
            None => {
                self.entries.push(Entry::divider(section_name));
                let last = self.entries.len() - 1;
                Section {
                    name: section_name.to_string(),
                    divider_index: last,
                    start: last + 1,
                    end: self.entries.len(),
                }
            }
        };

        let id = entry.id;
        self.entries.insert(span.end, entry);
        id
    }

    pub fn edit(&mut self, id: &Uuid, name: impl Into<String>) -> Result<&Entry> {
        let entry = self.get_mut(id)?;
        entry.name = name.into();
        Ok(entry)
    }

    /// Flips the active flag of an item. Dividers are left as they are.
    pub fn toggle_active(&mut self, id: &Uuid) -> Result<&Entry> {
        let entry = self.get_mut(id)?;
        if entry.is_item() {
            entry.active = !entry.active;
        }
        Ok(entry)
    }

    /// Sets the quantity, clamping anything below 1 up to 1.
    pub fn set_quantity(&mut self, id: &Uuid, quantity: i64) -> Result<&Entry> {
        let entry = self.get_mut(id)?;
        entry.quantity = clamp_quantity(quantity);
        Ok(entry)
    }

    /// Sets or clears the note. A blank note clears it.
    pub fn set_note(&mut self, id: &Uuid, note: Option<String>) -> Result<&Entry> {
        let entry = self.get_mut(id)?;
        entry.note = note.filter(|n| !n.trim().is_empty());
        Ok(entry)
    }

    /// Removes the entry. Items that followed a removed divider stay where
    /// they are and fall into whatever section now precedes them.
    pub fn delete(&mut self, id: &Uuid) -> Result<Entry> {
        let index = self.position(id).ok_or(ShopError::EntryNotFound(*id))?;
        Ok(self.entries.remove(index))
    }

    /// Moves the entry at `from` so that it ends up at `to` in the resulting
    /// sequence. `to` is clamped to the valid range; an out-of-range `from`
    /// leaves the list unchanged and returns `false`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
        true
    }

    /// Clears the weekly shop: every item goes back to inactive, quantity 1,
    /// no note. Names, ids and dividers are untouched.
    pub fn reset_active(&mut self) {
        for entry in self.entries.iter_mut().filter(|e| e.is_item()) {
            entry.active = false;
            entry.quantity = 1;
            entry.note = None;
        }
    }

    pub fn reset_all(&mut self) {
        self.entries.clear();
    }

    /// Items flagged for the current shop, in list order.
    pub fn project_active(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.is_item() && e.active)
            .collect()
    }

    /// Brings loaded or imported entries back within the list invariants.
    pub(crate) fn normalize(&mut self) {
        for entry in &mut self.entries {
            if entry.quantity < 1 {
                entry.quantity = 1;
            }
        }
    }
}

pub(crate) fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, u32::MAX as i64) as u32
}
