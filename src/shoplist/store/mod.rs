//! # Persistence Gateway
//!
//! The core never decides how the list is kept. It hands a full
//! [`AppState`] snapshot to a [`Gateway`] after every change and asks for one
//! back at startup. There are no transactions and no versions: the newest
//! save wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file on this machine
//! - [`remote::RemoteStore`]: the same blob behind the `/data` HTTP endpoint
//!   served by [`crate::server`]
//! - [`memory::InMemoryStore`]: for tests, with switchable failures
//!
//! ## Failure policy
//!
//! Gateways report errors honestly through [`Result`]. Absorbing them is the
//! caller's job: [`load_or_default`] turns a failed load into the empty
//! default state, and the API facade logs and drops a failed save.

use crate::error::Result;
use crate::model::AppState;

pub mod fs;
pub mod memory;
pub mod remote;

pub trait Gateway {
    /// Read the whole state.
    fn load(&self) -> Result<AppState>;

    /// Replace the whole state.
    fn save(&mut self, state: &AppState) -> Result<()>;

    /// Where the state lives, for messages and logs.
    fn describe(&self) -> String;
}

impl<G: Gateway + ?Sized> Gateway for Box<G> {
    fn load(&self) -> Result<AppState> {
        (**self).load()
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        (**self).save(state)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Loads the state, falling back to the empty default on any failure.
pub fn load_or_default<G: Gateway + ?Sized>(gateway: &G) -> AppState {
    match gateway.load() {
        Ok(state) => state,
        Err(e) => {
            log::warn!(
                "Could not load list from {}, starting empty: {}",
                gateway.describe(),
                e
            );
            AppState::default()
        }
    }
}
