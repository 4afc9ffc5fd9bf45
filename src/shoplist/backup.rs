//! # Backups
//!
//! A backup is the full [`AppState`] as pretty JSON. Restoring accepts two
//! shapes, because both exist in the wild:
//!
//! - `{"items": [...], "theme": "dark"}`: what `backup` writes
//! - `[...]`: a bare array of entries, as older exports produced
//!
//! Restored files are untrusted. Anything that does not parse into entries
//! is rejected as a whole with [`ShopError::InvalidImport`]; nothing is
//! applied partially.

use crate::error::{Result, ShopError};
use crate::list::ShoppingList;
use crate::model::{AppState, Entry, Theme};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

pub fn backup_filename(date: NaiveDate) -> String {
    format!("shopping-list-backup-{}.json", date.format("%Y-%m-%d"))
}

/// The first id that appears more than once, in list order.
pub fn first_duplicate_id(entries: &[Entry]) -> Option<Uuid> {
    let mut seen = HashSet::new();
    entries.iter().find(|e| !seen.insert(e.id)).map(|e| e.id)
}

pub fn to_json(state: &AppState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(ShopError::Serialization)
}

/// Parses a backup file. `current_theme` is kept when the file carries no
/// usable theme (always the case for a bare array).
pub fn parse_import(text: &str, current_theme: Theme) -> Result<AppState> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ShopError::InvalidImport(format!("not JSON: {}", e)))?;

    let (items, theme) = match value {
        Value::Array(items) => (Value::Array(items), current_theme),
        Value::Object(mut map) => {
            let items = match map.remove("items") {
                Some(items @ Value::Array(_)) => items,
                Some(_) => {
                    return Err(ShopError::InvalidImport(
                        "\"items\" is not an array".to_string(),
                    ))
                }
                None => return Err(ShopError::InvalidImport("no \"items\" field".to_string())),
            };
            let theme = match map.remove("theme") {
                Some(theme) => serde_json::from_value(theme).unwrap_or_else(|_| {
                    log::warn!("Ignoring unknown theme in backup, keeping {}", current_theme);
                    current_theme
                }),
                None => current_theme,
            };
            (items, theme)
        }
        _ => {
            return Err(ShopError::InvalidImport(
                "expected an object with \"items\" or an array".to_string(),
            ))
        }
    };

    let entries: Vec<Entry> = serde_json::from_value(items)
        .map_err(|e| ShopError::InvalidImport(format!("malformed entry: {}", e)))?;

    if let Some(dup) = first_duplicate_id(&entries) {
        return Err(ShopError::InvalidImport(format!("duplicate id {}", dup)));
    }

    let mut list = ShoppingList::from_entries(entries);
    list.normalize();

    Ok(AppState {
        items: list.into_entries(),
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> AppState {
        let mut list = ShoppingList::new();
        for input in ["Bread", "Apple-Fruit", "Milk-Dairy"] {
            list.add(input).unwrap();
        }
        let milk = list.entries()[4].id;
        list.toggle_active(&milk).unwrap();
        list.set_quantity(&milk, 2).unwrap();
        list.set_note(&milk, Some("oat".into())).unwrap();
        AppState {
            items: list.into_entries(),
            theme: Theme::Light,
        }
    }

    #[test]
    fn filename_carries_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(backup_filename(date), "shopping-list-backup-2024-03-09.json");
    }

    #[test]
    fn backup_restores_identically() {
        let state = sample_state();
        let json = to_json(&state).unwrap();
        let restored = parse_import(&json, Theme::Dark).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn bare_array_keeps_current_theme() {
        let state = sample_state();
        let json = serde_json::to_string(&state.items).unwrap();
        let restored = parse_import(&json, Theme::Dark).unwrap();
        assert_eq!(restored.items, state.items);
        assert_eq!(restored.theme, Theme::Dark);
    }

    #[test]
    fn accepts_web_backup_format() {
        let json = r#"{
            "items": [
                {"id": "0b7c6c1e-7f63-4a0e-9d51-3f0a1d7c2e11", "name": "Fruit", "inWeeklyShop": false,
                 "quantity": 1, "lastAdded": "2024-05-01T10:00:00.000Z", "type": "divider"},
                {"id": "5d1e2f3a-4b5c-4d6e-8f70-81a2b3c4d5e6", "name": "Apple", "inWeeklyShop": true,
                 "quantity": 0, "note": "green", "lastAdded": "2024-05-01T10:00:01.000Z", "type": "item"}
            ],
            "theme": "light"
        }"#;
        let state = parse_import(json, Theme::Dark).unwrap();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.items.len(), 2);
        assert!(state.items[1].active);
        assert_eq!(state.items[1].quantity, 1);
        assert_eq!(state.items[1].note.as_deref(), Some("green"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        for bad in [
            "not json",
            "42",
            r#""items""#,
            r#"{"items": 5}"#,
            r#"{"things": []}"#,
            "[1, 2]",
            r#"[{"name": "no id", "type": "item"}]"#,
        ] {
            assert!(
                matches!(parse_import(bad, Theme::Dark), Err(ShopError::InvalidImport(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entry = Entry::item("Milk");
        let json = serde_json::to_string(&vec![entry.clone(), entry]).unwrap();
        assert!(matches!(
            parse_import(&json, Theme::Dark),
            Err(ShopError::InvalidImport(_))
        ));
    }

    #[test]
    fn unknown_theme_is_ignored() {
        let json = r#"{"items": [], "theme": "neon"}"#;
        let state = parse_import(json, Theme::Light).unwrap();
        assert_eq!(state.theme, Theme::Light);
    }
}
