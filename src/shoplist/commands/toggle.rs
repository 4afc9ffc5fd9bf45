use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::EntrySelector;

use super::helpers::resolve_selectors;

/// Flips items in or out of the weekly shop.
pub fn run(list: &mut ShoppingList, selectors: &[EntrySelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(list, selectors)?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        let entry = list.toggle_active(&id)?.clone();
        if entry.is_divider() {
            result.add_message(CmdMessage::warning(format!(
                "Skipped ({}): {} is a section",
                position, entry.name
            )));
            continue;
        }
        let state = if entry.active { "Added to shop" } else { "Removed from shop" };
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            state, position, entry.name
        )));
        result.affected_entries.push(entry);
    }

    Ok(result)
}
