use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;

/// Clears the weekly shop, keeping the catalogue of items and sections.
pub fn run_active(list: &mut ShoppingList) -> Result<CmdResult> {
    let cleared = list.project_active().len();
    list.reset_active();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Weekly shop cleared ({} item{})",
        cleared,
        if cleared == 1 { "" } else { "s" }
    )));
    Ok(result)
}

/// Removes every entry, sections included.
pub fn run_all(list: &mut ShoppingList) -> Result<CmdResult> {
    let removed = list.len();
    list.reset_all();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "List emptied ({} entries removed)",
        removed
    )));
    Ok(result)
}
