use crate::backup::{backup_filename, parse_import, to_json};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::list::ShoppingList;
use crate::model::{AppState, Theme};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the full state to `output`, or to a dated file in the current
/// directory.
pub fn run(list: &ShoppingList, theme: Theme, output: Option<PathBuf>) -> Result<CmdResult> {
    let path =
        output.unwrap_or_else(|| PathBuf::from(backup_filename(Utc::now().date_naive())));
    let state = AppState {
        items: list.entries().to_vec(),
        theme,
    };
    fs::write(&path, to_json(&state)?).map_err(ShopError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backed up {} entries to {}",
        list.len(),
        path.display()
    )));
    Ok(result.with_paths(vec![path]))
}

/// Replaces the list (and theme, when the file has one) with a backup.
/// An invalid file leaves both untouched.
pub fn restore(list: &mut ShoppingList, theme: &mut Theme, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(ShopError::Io)?;
    let state = parse_import(&text, *theme)?;

    let count = state.items.len();
    *list = ShoppingList::from_entries(state.items);
    *theme = state.theme;

    let mut result = CmdResult::default().with_theme(*theme);
    result.add_message(CmdMessage::success(format!(
        "Restored {} entries from {}",
        count,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn backup_then_restore() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backup.json");

        let mut list = ShoppingList::new();
        list.add("Apple-Fruit").unwrap();
        run(&list, Theme::Light, Some(path.clone())).unwrap();

        let mut restored = ShoppingList::new();
        let mut theme = Theme::Dark;
        restore(&mut restored, &mut theme, &path).unwrap();
        assert_eq!(restored, list);
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn invalid_file_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, r#"{"items": "nope"}"#).unwrap();

        let mut list = ShoppingList::new();
        list.add("Milk").unwrap();
        let before = list.clone();
        let mut theme = Theme::Dark;

        assert!(matches!(
            restore(&mut list, &mut theme, &path),
            Err(ShopError::InvalidImport(_))
        ));
        assert_eq!(list, before);
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut list = ShoppingList::new();
        let mut theme = Theme::Dark;
        let result = restore(&mut list, &mut theme, Path::new("/nonexistent/backup.json"));
        assert!(matches!(result, Err(ShopError::Io(_))));
    }
}
