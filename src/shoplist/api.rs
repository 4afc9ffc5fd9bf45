//! # API Facade
//!
//! [`ShopApi`] is the single entry point for every shopping-list operation,
//! whatever UI sits on top. It owns the in-memory list and theme, dispatches
//! to `commands/*.rs`, and persists after each change.
//!
//! ## Persistence hook
//!
//! Every successful mutation hands one full [`AppState`] snapshot to the
//! [`Gateway`]. Saving is fire-and-forget: a failed save is logged and
//! reported as a warning message on the returned [`CmdResult`], but never
//! turned into an `Err`. The in-memory list stays authoritative until the
//! next successful save.
//!
//! Reads (`list`, `shop`, `export`, `backup`) never save.
//!
//! ## Generic Over Gateway
//!
//! - Production: `ShopApi<Box<dyn Gateway>>`, chosen by [`crate::init`]
//! - Testing: `ShopApi<InMemoryStore>`

use crate::backup::first_duplicate_id;
use crate::commands;
use crate::commands::export::ExportTarget;
use crate::commands::theme::ThemeAction;
use crate::error::{Result, ShopError};
use crate::list::ShoppingList;
use crate::model::{AppState, Theme};
use crate::selector::{parse_selectors, EntrySelector};
use crate::store::{load_or_default, Gateway};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct ShopApi<G: Gateway> {
    gateway: G,
    list: ShoppingList,
    theme: Theme,
}

impl<G: Gateway> ShopApi<G> {
    /// Loads the current state from `gateway`, starting empty if that fails.
    pub fn new(gateway: G) -> Self {
        let state = load_or_default(&gateway);
        let mut items = state.items;
        if let Some(dup) = first_duplicate_id(&items) {
            log::warn!(
                "Loaded list from {} repeats id {}, keeping the first entry for each id",
                gateway.describe(),
                dup
            );
            let mut seen = HashSet::new();
            items.retain(|e| seen.insert(e.id));
        }
        let mut list = ShoppingList::from_entries(items);
        list.normalize();
        Self {
            gateway,
            list,
            theme: state.theme,
        }
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> AppState {
        AppState {
            items: self.list.entries().to_vec(),
            theme: self.theme,
        }
    }

    pub fn add(&mut self, input: &str) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.list, input)?;
        Ok(self.commit(result))
    }

    pub fn edit<I: AsRef<str>>(
        &mut self,
        selector: &[I],
        name: &str,
    ) -> Result<commands::CmdResult> {
        let selector = single_selector(selector)?;
        let result = commands::edit::run(&mut self.list, &selector, name)?;
        Ok(self.commit(result))
    }

    pub fn toggle<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        let result = commands::toggle::run(&mut self.list, &selectors)?;
        Ok(self.commit(result))
    }

    pub fn set_quantity<I: AsRef<str>>(
        &mut self,
        selector: &[I],
        quantity: i64,
    ) -> Result<commands::CmdResult> {
        let selector = single_selector(selector)?;
        let result = commands::quantity::run(&mut self.list, &selector, quantity)?;
        Ok(self.commit(result))
    }

    pub fn set_note<I: AsRef<str>>(
        &mut self,
        selector: &[I],
        note: Option<String>,
    ) -> Result<commands::CmdResult> {
        let selector = single_selector(selector)?;
        let result = commands::note::run(&mut self.list, &selector, note)?;
        Ok(self.commit(result))
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        let result = commands::delete::run(&mut self.list, &selectors)?;
        Ok(self.commit(result))
    }

    /// Moves by 1-based display positions.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        let result = commands::reorder::run(&mut self.list, from, to)?;
        Ok(self.commit(result))
    }

    pub fn reset_active(&mut self) -> Result<commands::CmdResult> {
        let result = commands::reset::run_active(&mut self.list)?;
        Ok(self.commit(result))
    }

    pub fn reset_all(&mut self) -> Result<commands::CmdResult> {
        let result = commands::reset::run_all(&mut self.list)?;
        Ok(self.commit(result))
    }

    pub fn get_entries(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.list)
    }

    pub fn get_active(&self) -> Result<commands::CmdResult> {
        commands::list::run_active(&self.list)
    }

    pub fn export(&self, grouped: bool, target: ExportTarget) -> Result<commands::CmdResult> {
        commands::export::run(&self.list, grouped, target)
    }

    pub fn backup(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::backup::run(&self.list, self.theme, output)
    }

    /// Replaces list and theme from a backup file. Nothing changes, and
    /// nothing is saved, when the file is rejected.
    pub fn restore(&mut self, path: &Path) -> Result<commands::CmdResult> {
        let result = commands::backup::restore(&mut self.list, &mut self.theme, path)?;
        Ok(self.commit(result))
    }

    pub fn theme_action(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        let result = commands::theme::run(&mut self.theme, action)?;
        if action == ThemeAction::Show {
            return Ok(result);
        }
        Ok(self.commit(result))
    }

    /// Saves the current snapshot unless the command refused the request.
    fn commit(&mut self, mut result: commands::CmdResult) -> commands::CmdResult {
        if result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
        {
            return result;
        }

        if let Err(e) = self.gateway.save(&self.state()) {
            log::error!("Save to {} failed: {}", self.gateway.describe(), e);
            result.add_message(CmdMessage::warning(format!(
                "Changes kept in memory only, could not save to {}",
                self.gateway.describe()
            )));
        }
        result
    }
}

/// Commands that act on one entry take the first resolved selector.
fn single_selector<I: AsRef<str>>(inputs: &[I]) -> Result<EntrySelector> {
    if inputs.iter().all(|s| s.as_ref().trim().is_empty()) {
        return Err(ShopError::Api("No entry selected".to_string()));
    }
    parse_selectors(inputs)
        .into_iter()
        .next()
        .ok_or_else(|| ShopError::Api("No entry selected".to_string()))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn api(store: InMemoryStore) -> ShopApi<InMemoryStore> {
        ShopApi::new(store)
    }

    #[test]
    fn starts_from_loaded_state() {
        let store = StoreFixture::new()
            .with_entries(&["Apple-Fruit"])
            .with_active("Apple")
            .with_theme(Theme::Light)
            .build();
        let api = api(store);
        assert_eq!(api.list().len(), 2);
        assert_eq!(api.theme(), Theme::Light);
        assert_eq!(api.list().project_active().len(), 1);
    }

    #[test]
    fn loaded_duplicate_ids_keep_first_entry() {
        let milk = Entry::item("Milk");
        let mut copy = Entry::item("Milk copy");
        copy.id = milk.id;
        let bread = Entry::item("Bread");
        let store = InMemoryStore::with_state(AppState {
            items: vec![milk.clone(), copy, bread],
            theme: Theme::Dark,
        });

        let api = api(store);
        let names: Vec<&str> = api.list().entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread"]);
        assert!(first_duplicate_id(api.list().entries()).is_none());
    }

    #[test]
    fn each_mutation_saves_once() {
        let mut api = api(InMemoryStore::new());

        api.add("Milk-Dairy").unwrap();
        assert_eq!(api.gateway().save_count(), 1);
        api.toggle(&["2"]).unwrap();
        assert_eq!(api.gateway().save_count(), 2);
        api.set_quantity(&["2"], 3).unwrap();
        api.set_note(&["milk"], Some("oat".into())).unwrap();
        api.edit(&["1"], "Fridge").unwrap();
        api.move_entry(2, 1).unwrap();
        api.delete(&["1"]).unwrap();
        api.reset_active().unwrap();
        api.theme_action(ThemeAction::Toggle).unwrap();
        api.reset_all().unwrap();
        assert_eq!(api.gateway().save_count(), 10);

        let saved = api.gateway().state().unwrap();
        assert!(saved.items.is_empty());
        assert_eq!(saved.theme, Theme::Light);
    }

    #[test]
    fn saved_snapshot_matches_memory() {
        let mut api = api(InMemoryStore::new());
        api.add("Bread").unwrap();
        api.toggle(&["bread"]).unwrap();
        assert_eq!(api.gateway().state(), Some(&api.state()));
    }

    #[test]
    fn reads_do_not_save() {
        let store = StoreFixture::new().with_entries(&["Bread"]).build();
        let api = api(store);
        api.get_entries().unwrap();
        api.get_active().unwrap();
        api.export(true, ExportTarget::Stdout).unwrap();
        assert_eq!(api.gateway().save_count(), 0);
    }

    #[test]
    fn rejected_input_does_not_save() {
        let mut api = api(InMemoryStore::new());
        api.add("   ").unwrap();
        assert_eq!(api.gateway().save_count(), 0);
    }

    #[test]
    fn failing_gateway_never_errors() {
        let mut api = api(InMemoryStore::new().failing());
        assert!(api.list().is_empty());

        let result = api.add("Milk").unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
        api.toggle(&["1"]).unwrap();
        api.reset_all().unwrap();
        assert_eq!(api.gateway().save_count(), 0);
    }

    #[test]
    fn save_resumes_after_failure() {
        let mut api = api(InMemoryStore::new());
        api.add("Milk").unwrap();
        api.gateway.set_failing(true);
        api.add("Bread").unwrap();
        api.gateway.set_failing(false);
        api.add("Eggs").unwrap();
        assert_eq!(api.gateway().state().unwrap().items.len(), 3);
    }

    #[test]
    fn invalid_restore_keeps_state_and_skips_save() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "[{\"nope\": true}]").unwrap();

        let mut api = api(StoreFixture::new().with_entries(&["Milk"]).build());
        let before = api.state();
        assert!(api.restore(&path).is_err());
        assert_eq!(api.state(), before);
        assert_eq!(api.gateway().save_count(), 0);
    }

    #[test]
    fn restore_replaces_and_saves() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backup.json");

        let mut source = api(InMemoryStore::new());
        source.add("Apple-Fruit").unwrap();
        source.theme_action(ThemeAction::Set(Theme::Light)).unwrap();
        source.backup(Some(path.clone())).unwrap();

        let mut target = api(StoreFixture::new().with_entries(&["Milk"]).build());
        target.restore(&path).unwrap();
        assert_eq!(target.state(), source.state());
        assert_eq!(target.gateway().save_count(), 1);
    }

    #[test]
    fn single_entry_commands_need_a_selector() {
        let store = StoreFixture::new().with_entries(&["Milk", "-"]).build();
        let mut api = api(store);
        let before = api.state();
        let none: [&str; 0] = [];

        assert!(api.edit(&none, "Renamed").is_err());
        assert!(api.set_quantity(&none, 3).is_err());
        assert!(api.set_note(&none, Some("oat".into())).is_err());
        assert!(api.edit(&[" "], "Renamed").is_err());

        assert_eq!(api.state(), before);
        assert_eq!(api.gateway().save_count(), 0);
    }

    #[test]
    fn theme_show_does_not_save() {
        let mut api = api(InMemoryStore::new());
        api.theme_action(ThemeAction::Show).unwrap();
        assert_eq!(api.gateway().save_count(), 0);
    }
}
