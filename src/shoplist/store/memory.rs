use super::Gateway;
use crate::error::{Result, ShopError};
use crate::model::AppState;
use std::cell::Cell;

/// In-memory gateway for testing and development.
/// Does NOT persist data.
///
/// A failing store rejects every load and save, standing in for an
/// unreachable server or an unwritable disk.
#[derive(Default)]
pub struct InMemoryStore {
    state: Option<AppState>,
    failing: bool,
    saves: usize,
    loads: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// The last state successfully saved (or seeded).
    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl Gateway for InMemoryStore {
    fn load(&self) -> Result<AppState> {
        self.loads.set(self.loads.get() + 1);
        if self.failing {
            return Err(ShopError::Store("simulated load failure".to_string()));
        }
        Ok(self.state.clone().unwrap_or_default())
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        if self.failing {
            return Err(ShopError::Store("simulated save failure".to_string()));
        }
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::list::ShoppingList;
    use crate::model::Theme;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        list: ShoppingList,
        theme: Theme,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                list: ShoppingList::new(),
                theme: Theme::Dark,
            }
        }

        /// Adds entries using the add syntax (`-Section`, `Item-Section`).
        pub fn with_entries(mut self, inputs: &[&str]) -> Self {
            for input in inputs {
                self.list.add(input).unwrap();
            }
            self
        }

        /// Marks the first entry with this name active.
        pub fn with_active(mut self, name: &str) -> Self {
            let id = self
                .list
                .entries()
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.id)
                .unwrap();
            self.list.toggle_active(&id).unwrap();
            self
        }

        pub fn with_theme(mut self, theme: Theme) -> Self {
            self.theme = theme;
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = self.store;
            store.state = Some(AppState {
                items: self.list.into_entries(),
                theme: self.theme,
            });
            store
        }
    }
}
