use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::input::AddRequest;
use crate::list::ShoppingList;

/// Adds one entry from the add micro-syntax (`Milk`, `Apple-Fruit`, `-Dairy`).
pub fn run(list: &mut ShoppingList, input: &str) -> Result<CmdResult> {
    let request: AddRequest = match input.parse() {
        Ok(request) => request,
        Err(e) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(e));
            return Ok(result);
        }
    };

    let new_section = match &request {
        AddRequest::Item {
            section: Some(section),
            ..
        } if crate::sections::find_section(list.entries(), section).is_none() => {
            Some(section.clone())
        }
        _ => None,
    };

    let id = list.apply(request);
    let entry = list
        .get(&id)
        .cloned()
        .ok_or(crate::error::ShopError::EntryNotFound(id))?;

    let mut result = CmdResult::default();
    if let Some(section) = new_section {
        result.add_message(CmdMessage::info(format!("Created section {}", section)));
    }
    let position = list.position(&id).map(|i| i + 1).unwrap_or_default();
    let label = if entry.is_divider() { "Section" } else { "Item" };
    result.add_message(CmdMessage::success(format!(
        "{} added ({}): {}",
        label, position, entry.name
    )));
    Ok(result.with_affected_entries(vec![entry]))
}
