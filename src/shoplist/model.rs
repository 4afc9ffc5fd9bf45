use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Item,
    Divider,
}

/// One row of the list: a purchasable item or a section divider.
///
/// Field names on the wire follow the JSON backups the web version wrote,
/// so old backup files import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "inWeeklyShop", default)]
    pub active: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default = "default_last_added")]
    pub last_added: DateTime<Utc>,
}

fn default_quantity() -> u32 {
    1
}

fn default_last_added() -> DateTime<Utc> {
    Utc::now()
}

impl Entry {
    pub fn item(name: impl Into<String>) -> Self {
        Self::new(name.into(), EntryKind::Item)
    }

    pub fn divider(name: impl Into<String>) -> Self {
        Self::new(name.into(), EntryKind::Divider)
    }

    fn new(name: String, kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            active: false,
            quantity: 1,
            note: None,
            last_added: Utc::now(),
        }
    }

    pub fn is_item(&self) -> bool {
        self.kind == EntryKind::Item
    }

    pub fn is_divider(&self) -> bool {
        self.kind == EntryKind::Divider
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// The blob exchanged with a [`crate::store::Gateway`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_defaults() {
        let e = Entry::item("Milk");
        assert!(e.is_item());
        assert!(!e.active);
        assert_eq!(e.quantity, 1);
        assert_eq!(e.note, None);
    }

    #[test]
    fn serializes_with_web_field_names() {
        let mut e = Entry::item("Milk");
        e.active = true;
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "item");
        assert_eq!(json["inWeeklyShop"], true);
        assert!(json.get("lastAdded").is_some());
        assert!(json.get("note").is_none());
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let json = r#"{"id":"6f1c2b7e-3d0a-4c55-9f43-1b2f5d8e9a10","name":"Fruit","type":"divider"}"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert!(e.is_divider());
        assert_eq!(e.quantity, 1);
        assert!(!e.active);
    }

    #[test]
    fn default_state_is_empty_and_dark() {
        let state = AppState::default();
        assert!(state.items.is_empty());
        assert_eq!(state.theme, Theme::Dark);

        let parsed: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
