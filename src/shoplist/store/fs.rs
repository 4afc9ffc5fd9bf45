use super::Gateway;
use crate::error::{Result, ShopError};
use crate::model::AppState;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "shopping-list.json";

/// Keeps the whole state in one JSON file.
///
/// A missing file reads as the default state; it is created on first save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `shopping-list.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShopError::Io)?;
            }
        }
        Ok(())
    }

    /// Writes the default state if the file does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            self.ensure_parent()?;
            write_state(&self.path, &AppState::default())?;
        }
        Ok(())
    }

    /// Raw file contents, for serving the blob without reshaping it.
    pub fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(ShopError::Io)
    }

    /// Replaces the file with `content` as given.
    pub fn write_raw(&self, content: &str) -> Result<()> {
        self.ensure_parent()?;
        write_atomic(&self.path, content)
    }
}

fn write_state(path: &Path, state: &AppState) -> Result<()> {
    let content = serde_json::to_string_pretty(state).map_err(ShopError::Serialization)?;
    write_atomic(path, &content)
}

// Atomic: write a sibling tmp file, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(ShopError::Io)?;
    fs::rename(&tmp, path).map_err(ShopError::Io)?;
    Ok(())
}

impl Gateway for FileStore {
    fn load(&self) -> Result<AppState> {
        if !self.path.exists() {
            return Ok(AppState::default());
        }
        let content = fs::read_to_string(&self.path).map_err(ShopError::Io)?;
        let state: AppState = serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(state)
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.ensure_parent()?;
        write_state(&self.path, state)?;
        log::debug!("Saved {} entries to {}", state.items.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Theme};
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_default() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path());
        assert_eq!(store.load().unwrap(), AppState::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_creates_directories_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(&temp.path().join("nested").join("dir"));
        let state = AppState {
            items: vec![Entry::divider("Fruit"), Entry::item("Apple")],
            theme: Theme::Light,
        };

        store.save(&state).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(ShopError::Serialization(_))));
    }

    #[test]
    fn ensure_exists_writes_default_once() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp.path());
        store.ensure_exists().unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"items": [], "theme": "dark"}));

        let state = AppState {
            items: vec![Entry::item("Milk")],
            ..AppState::default()
        };
        store.save(&state).unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(store.load().unwrap(), state);
    }
}
