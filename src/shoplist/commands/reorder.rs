use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::list::ShoppingList;

/// Moves the entry at 1-based `from` so it ends up at 1-based `to`.
/// A `to` past the end moves the entry to the bottom.
pub fn run(list: &mut ShoppingList, from: usize, to: usize) -> Result<CmdResult> {
    if from == 0 || to == 0 {
        return Err(ShopError::Api("Positions start at 1".to_string()));
    }
    let id = list
        .entries()
        .get(from - 1)
        .map(|e| e.id)
        .ok_or_else(|| ShopError::Api(format!("Position {} is not in the list", from)))?;

    list.reorder(from - 1, to - 1);

    let mut result = CmdResult::default();
    if let (Some(index), Some(entry)) = (list.position(&id), list.get(&id)) {
        result.add_message(CmdMessage::success(format!(
            "Moved {} from {} to {}",
            entry.name,
            from,
            index + 1
        )));
        result.affected_entries.push(entry.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> ShoppingList {
        let mut list = ShoppingList::new();
        for name in names {
            list.add(name).unwrap();
        }
        list
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn moves_by_display_position() {
        let mut list = list_of(&["A", "B", "C"]);
        run(&mut list, 3, 1).unwrap();
        assert_eq!(names(&list), vec!["C", "A", "B"]);
    }

    #[test]
    fn moving_item_across_divider_changes_section() {
        let mut list = list_of(&["Milk", "-Dairy"]);
        run(&mut list, 1, 2).unwrap();
        assert_eq!(list.sections()[0].start, 1);
        assert_eq!(names(&list), vec!["Dairy", "Milk"]);
    }

    #[test]
    fn target_past_end_clamps() {
        let mut list = list_of(&["A", "B", "C"]);
        let result = run(&mut list, 1, 50).unwrap();
        assert_eq!(names(&list), vec!["B", "C", "A"]);
        assert!(result.messages[0].content.ends_with("to 3"));
    }

    #[test]
    fn bad_source_is_an_error() {
        let mut list = list_of(&["A"]);
        assert!(run(&mut list, 2, 1).is_err());
        assert!(run(&mut list, 0, 1).is_err());
    }
}
