use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::EntrySelector;

use super::helpers::resolve_selectors;

/// Sets the note on an entry; `None` or a blank note clears it.
pub fn run(
    list: &mut ShoppingList,
    selector: &EntrySelector,
    note: Option<String>,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(list, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        let entry = list.set_note(&id, note.clone())?.clone();
        let message = match &entry.note {
            Some(note) => format!("Note ({}): {} ({})", position, entry.name, note),
            None => format!("Note cleared ({}): {}", position, entry.name),
        };
        result.add_message(CmdMessage::success(message));
        result.affected_entries.push(entry);
    }
    Ok(result)
}
