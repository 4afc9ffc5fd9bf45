use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::EntrySelector;

use super::helpers::{describe, resolve_selectors};

/// Renames a single entry. Kind, flags and position are kept.
pub fn run(list: &mut ShoppingList, selector: &EntrySelector, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let name = name.trim();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Name cannot be empty"));
        return Ok(result);
    }

    let resolved = resolve_selectors(list, std::slice::from_ref(selector))?;
    for (position, id) in resolved {
        let old = list.get(&id).map(describe).unwrap_or_default();
        let entry = list.edit(&id, name)?.clone();
        result.add_message(CmdMessage::success(format!(
            "Renamed ({}): {} -> {}",
            position, old, entry.name
        )));
        result.affected_entries.push(entry);
    }
    Ok(result)
}
