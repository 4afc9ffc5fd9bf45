use crate::clipboard::copy_to_clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::format::{format_grouped, format_list};
use crate::list::ShoppingList;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_EXPORT_FILE: &str = "shopping-list.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Hand the text back to the caller to print.
    Stdout,
    File(PathBuf),
    Clipboard,
}

/// Renders this week's shop as plain text and delivers it to `target`.
pub fn run(list: &ShoppingList, grouped: bool, target: ExportTarget) -> Result<CmdResult> {
    let text = render(list, grouped);
    let mut result = CmdResult::default();

    if text.is_empty() {
        result.add_message(CmdMessage::info("Nothing in this week's shop."));
        return Ok(result);
    }

    match target {
        ExportTarget::Stdout => Ok(result.with_text(text)),
        ExportTarget::File(path) => {
            let mut contents = text;
            contents.push('\n');
            fs::write(&path, contents).map_err(ShopError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported to {}",
                path.display()
            )));
            Ok(result.with_paths(vec![path]))
        }
        ExportTarget::Clipboard => {
            copy_to_clipboard(&text)?;
            result.add_message(CmdMessage::success("Copied to clipboard"));
            Ok(result)
        }
    }
}

pub fn render(list: &ShoppingList, grouped: bool) -> String {
    if grouped {
        format_grouped(list)
    } else {
        format_list(list.project_active())
    }
}
