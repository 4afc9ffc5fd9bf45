use super::Gateway;
use crate::error::{Result, ShopError};
use crate::model::AppState;
use reqwest::blocking::Client;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to the `/data` endpoint of a `shoplist serve` instance, or any
/// server that speaks the same JSON.
pub struct RemoteStore {
    client: Client,
    data_url: String,
}

impl RemoteStore {
    /// `base_url` is the server root, e.g. `http://nas.local:8080` or
    /// `http://nas.local/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("shoplist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ShopError::Remote)?;
        Ok(Self {
            client,
            data_url: data_url(base_url),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

fn data_url(base_url: &str) -> String {
    format!("{}/data", base_url.trim_end_matches('/'))
}

impl Gateway for RemoteStore {
    fn load(&self) -> Result<AppState> {
        let response = self.client.get(&self.data_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopError::Store(format!(
                "GET {} returned {}",
                self.data_url, status
            )));
        }
        Ok(response.json::<AppState>()?)
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        let response = self.client.post(&self.data_url).json(state).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopError::Store(format!(
                "POST {} returned {}",
                self.data_url, status
            )));
        }
        log::debug!("Saved {} entries to {}", state.items.len(), self.data_url);
        Ok(())
    }

    fn describe(&self) -> String {
        self.data_url.clone()
    }
}
