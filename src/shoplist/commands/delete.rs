use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::EntrySelector;

use super::helpers::{describe, resolve_selectors};

/// Removes entries. Deleting a section divider leaves its items in place.
pub fn run(list: &mut ShoppingList, selectors: &[EntrySelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(list, selectors)?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        let entry = list.delete(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Deleted ({}): {}",
            position,
            describe(&entry)
        )));
        result.affected_entries.push(entry);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_what_was_displayed() {
        let mut list = ShoppingList::new();
        for input in ["A", "B", "C", "D"] {
            list.add(input).unwrap();
        }
        run(
            &mut list,
            &[EntrySelector::Position(2), EntrySelector::Position(3)],
        )
        .unwrap();
        let names: Vec<_> = list.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn deleting_section_keeps_items() {
        let mut list = ShoppingList::new();
        list.add("Apple-Fruit").unwrap();
        let result = run(&mut list, &[EntrySelector::Name("Fruit".into())]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].name, "Apple");
        assert!(result.messages[0].content.contains("section Fruit"));
    }
}
