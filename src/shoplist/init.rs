use crate::api::ShopApi;
use crate::config::{Backend, ShopConfig};
use crate::error::{Result, ShopError};
use crate::store::fs::FileStore;
use crate::store::remote::RemoteStore;
use crate::store::Gateway;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "SHOPLIST_HOME";

pub struct ShopContext {
    pub api: ShopApi<Box<dyn Gateway>>,
    pub config: ShopConfig,
    pub data_dir: PathBuf,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub data_dir: Option<PathBuf>,
    pub remote: Option<String>,
}

/// `--data-dir`, then `$SHOPLIST_HOME`, then the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shoplist", "shoplist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopError::Store("Could not determine data directory".to_string()))
}

/// Path of the local list file for this config.
pub fn local_data_file(data_dir: &Path, config: &ShopConfig) -> PathBuf {
    match &config.data_file {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => data_dir.join(path),
        None => FileStore::in_dir(data_dir).path().to_path_buf(),
    }
}

/// Picks the gateway: `--remote` wins, then the configured backend.
pub fn build_gateway(
    data_dir: &Path,
    config: &ShopConfig,
    remote: Option<&str>,
) -> Result<Box<dyn Gateway>> {
    let remote_url = match (remote, config.backend) {
        (Some(url), _) => Some(url.to_string()),
        (None, Backend::Remote) => Some(config.remote_url.clone().ok_or_else(|| {
            ShopError::Store("backend is remote but remote-url is not set".to_string())
        })?),
        (None, Backend::Local) => None,
    };

    match remote_url {
        Some(url) => Ok(Box::new(RemoteStore::new(&url)?)),
        None => Ok(Box::new(FileStore::new(local_data_file(data_dir, config)))),
    }
}

pub fn initialize(options: &InitOptions) -> Result<ShopContext> {
    let data_dir = resolve_data_dir(options.data_dir.as_deref())?;
    let config = ShopConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config in {}: {}", data_dir.display(), e);
        ShopConfig::default()
    });

    let gateway = build_gateway(&data_dir, &config, options.remote.as_deref())?;
    log::debug!("Using {}", gateway.describe());
    let api = ShopApi::new(gateway);

    Ok(ShopContext {
        api,
        config,
        data_dir,
    })
}
