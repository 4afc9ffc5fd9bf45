use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Local,
    Remote,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Local => write!(f, "local"),
            Backend::Remote => write!(f, "remote"),
        }
    }
}

/// Configuration for shoplist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShopConfig {
    /// Where the list lives: a local file or a `shoplist serve` endpoint
    #[serde(default)]
    pub backend: Backend,

    /// Server root used when `backend` is `remote`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,

    /// Address `shoplist serve` binds to
    #[serde(default = "default_server_addr")]
    pub server_addr: String,

    /// Override for the local data file (defaults to `shopping-list.json`
    /// in the data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_server_addr() -> String {
    DEFAULT_SERVER_ADDR.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Local,
            remote_url: None,
            server_addr: default_server_addr(),
            data_file: None,
        }
    }
}

impl ShopConfig {
    pub const KEYS: [&'static str; 4] = ["backend", "remote-url", "server-addr", "data-file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "backend" => Some(self.backend.to_string()),
            "remote-url" => Some(self.remote_url.clone().unwrap_or_default()),
            "server-addr" => Some(self.server_addr.clone()),
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty value resets optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "backend" => {
                self.backend = match value {
                    "local" => Backend::Local,
                    "remote" => Backend::Remote,
                    other => return Err(format!("Unknown backend: {} (local, remote)", other)),
                };
            }
            "remote-url" => {
                if !value.is_empty() && !value.starts_with("http://") && !value.starts_with("https://")
                {
                    return Err(format!("remote-url must start with http:// or https://: {}", value));
                }
                self.remote_url = (!value.is_empty()).then(|| value.to_string());
            }
            "server-addr" => {
                if value.parse::<std::net::SocketAddr>().is_err() {
                    return Err(format!("Invalid server address: {}", value));
                }
                self.server_addr = value.to_string();
            }
            "data-file" => {
                self.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .map(|k| (k.to_string(), self.get(k).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.backend, Backend::Local);
        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.remote_url, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShopConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fresh");

        let mut config = ShopConfig::default();
        config.set("backend", "remote").unwrap();
        config.set("remote-url", "http://nas.local:8080").unwrap();
        config.save(&dir).unwrap();

        let loaded = ShopConfig::load(&dir).unwrap();
        assert_eq!(loaded.backend, Backend::Remote);
        assert_eq!(loaded.remote_url.as_deref(), Some("http://nas.local:8080"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"backend":"remote"}"#).unwrap();
        let config = ShopConfig::load(temp.path()).unwrap();
        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.server_addr, DEFAULT_SERVER_ADDR);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ShopConfig::default();
        assert!(config.set("backend", "cloud").is_err());
        assert!(config.set("remote-url", "nas.local").is_err());
        assert!(config.set("server-addr", "not an addr").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_empty_value_clears_optional_keys() {
        let mut config = ShopConfig::default();
        config.set("data-file", "/tmp/list.json").unwrap();
        assert_eq!(config.get("data-file").as_deref(), Some("/tmp/list.json"));
        config.set("data-file", "").unwrap();
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let all = ShopConfig::default().list_all();
        let keys: Vec<_> = all.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ShopConfig::KEYS.to_vec());
    }
}
