use crate::commands::CmdResult;
use crate::error::Result;
use crate::list::ShoppingList;
use crate::selector::{index_active, index_entries};

/// The full list, dividers included.
pub fn run(list: &ShoppingList) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(index_entries(list)))
}

/// Only the items in this week's shop, with their full-list positions.
pub fn run_active(list: &ShoppingList) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(index_active(list)))
}
