use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::EntrySelector;

use super::helpers::resolve_selectors;

pub fn run(list: &mut ShoppingList, selector: &EntrySelector, quantity: i64) -> Result<CmdResult> {
    let resolved = resolve_selectors(list, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        let entry = list.set_quantity(&id, quantity)?.clone();
        if quantity < 1 {
            result.add_message(CmdMessage::warning(format!(
                "Quantity {} is below 1, using {}",
                quantity, entry.quantity
            )));
        }
        result.add_message(CmdMessage::success(format!(
            "Quantity ({}): {} x{}",
            position, entry.name, entry.quantity
        )));
        result.affected_entries.push(entry);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn sets_quantity() {
        let mut list = ShoppingList::new();
        list.add("Eggs").unwrap();
        run(&mut list, &EntrySelector::Name("eggs".into()), 12).unwrap();
        assert_eq!(list.entries()[0].quantity, 12);
    }

    #[test]
    fn clamps_and_warns() {
        let mut list = ShoppingList::new();
        list.add("Eggs").unwrap();
        let result = run(&mut list, &EntrySelector::Position(1), 0).unwrap();
        assert_eq!(list.entries()[0].quantity, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
