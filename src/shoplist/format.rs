//! Plain-text rendering of the active list, shared by the text file, stdout
//! and clipboard exports.

use crate::list::ShoppingList;
use crate::model::Entry;
use crate::sections::section_of;

/// `Milk`, `Milk (2%)`, `Milk x3` or `Milk (2%) x3`.
pub fn format_entry(entry: &Entry) -> String {
    let mut text = entry.name.clone();
    if let Some(note) = entry.note.as_deref().filter(|n| !n.is_empty()) {
        text.push_str(&format!(" ({})", note));
    }
    if entry.quantity > 1 {
        text.push_str(&format!(" x{}", entry.quantity));
    }
    text
}

/// One formatted entry per line, in the order given.
pub fn format_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The active list with each run of items headed by its section name.
///
/// Items before the first divider come first without a header. Sections
/// without any active item are left out.
pub fn format_grouped(list: &ShoppingList) -> String {
    let entries = list.entries();
    let mut blocks: Vec<String> = Vec::new();
    // Divider heading the block being built; outer None before the first item.
    let mut current: Option<Option<usize>> = None;
    let mut lines: Vec<String> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if !(entry.is_item() && entry.active) {
            continue;
        }
        let header = section_of(entries, index).map(|s| s.divider_index);
        if current != Some(header) {
            if !lines.is_empty() {
                blocks.push(lines.join("\n"));
                lines.clear();
            }
            if let Some(divider) = header {
                lines.push(format!("[{}]", entries[divider].name));
            }
            current = Some(header);
        }
        lines.push(format_entry(entry));
    }

    if !lines.is_empty() {
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk(quantity: u32, note: Option<&str>) -> Entry {
        let mut e = Entry::item("Milk");
        e.quantity = quantity;
        e.note = note.map(str::to_string);
        e
    }

    #[test]
    fn formats_quantity_and_note() {
        assert_eq!(format_entry(&milk(1, None)), "Milk");
        assert_eq!(format_entry(&milk(3, None)), "Milk x3");
        assert_eq!(format_entry(&milk(1, Some("2%"))), "Milk (2%)");
        assert_eq!(format_entry(&milk(3, Some("2%"))), "Milk (2%) x3");
    }

    #[test]
    fn empty_note_is_not_rendered() {
        assert_eq!(format_entry(&milk(1, Some(""))), "Milk");
    }

    #[test]
    fn list_keeps_given_order() {
        let entries = vec![Entry::item("Zucchini"), Entry::item("Apple")];
        assert_eq!(format_list(&entries), "Zucchini\nApple");
        assert_eq!(format_list(Vec::<&Entry>::new()), "");
    }

    #[test]
    fn grouped_output_uses_section_headers() {
        let mut list = ShoppingList::new();
        for input in ["Bread", "Apple-Fruit", "Pear-Fruit", "Milk-Dairy", "Soap-Household"] {
            list.add(input).unwrap();
        }
        let ids: Vec<_> = list
            .entries()
            .iter()
            .filter(|e| ["Bread", "Pear", "Milk"].contains(&e.name.as_str()))
            .map(|e| e.id)
            .collect();
        for id in &ids {
            list.toggle_active(id).unwrap();
        }

        assert_eq!(format_grouped(&list), "Bread\n\n[Fruit]\nPear\n\n[Dairy]\nMilk");
    }

    #[test]
    fn grouped_output_of_empty_shop_is_empty() {
        let mut list = ShoppingList::new();
        list.add("Apple-Fruit").unwrap();
        assert_eq!(format_grouped(&list), "");
    }
}
