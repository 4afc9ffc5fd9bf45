use crate::error::Result;
use crate::list::ShoppingList;
use crate::model::Entry;
use crate::selector::{resolve, EntrySelector};
use uuid::Uuid;

/// Resolves every selector before anything is changed, dropping repeats so
/// `toggle 2 2` or `delete 1-3 2` touch each entry once.
pub fn resolve_selectors(
    list: &ShoppingList,
    selectors: &[EntrySelector],
) -> Result<Vec<(usize, Uuid)>> {
    let mut resolved = resolve(list, selectors)?;
    let mut seen = std::collections::HashSet::new();
    resolved.retain(|(_, id)| seen.insert(*id));
    Ok(resolved)
}

/// Short human label: `Milk`, or `section Fruit` for a divider.
pub fn describe(entry: &Entry) -> String {
    if entry.is_divider() {
        format!("section {}", entry.name)
    } else {
        entry.name.clone()
    }
}
