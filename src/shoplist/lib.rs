//! # Shoplist Architecture
//!
//! Shoplist is a **UI-agnostic shopping-list library**. The terminal client
//! in `cli/` is one way to drive it; the `/data` endpoint in [`server`] lets
//! other machines share the same list.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders lists, owns stdout and exit    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory list and theme                        │
//! │  - Turns raw selectors into positions and ids               │
//! │  - Saves through the Gateway after every change             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation over a ShoppingList             │
//! │  - Returns CmdResult: affected entries plus messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List Model (list.rs, sections.rs, input.rs)                │
//! │  - Ordered entries; dividers define sections by position    │
//! └─────────────────────────────────────────────────────────────┘
//!
//!   Persistence (store/): Gateway trait; FileStore, RemoteStore,
//!   InMemoryStore. Loaded once at startup, saved after each change.
//! ```
//!
//! ## Sections are positional
//!
//! There is no parent pointer from an item to its section. An item belongs
//! to the nearest divider above it, so moving an item across a divider moves
//! it into another section, and deleting a divider folds its items into the
//! section above. See [`sections`].
//!
//! ## No I/O assumptions in the core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never
//! exits the process. Diagnostics go through the `log` facade; the binary
//! decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: logic for each user operation
//! - [`list`], [`sections`], [`input`]: the list model and add syntax
//! - [`selector`]: positions, ranges and names typed by users
//! - [`format`]: plain-text rendering of the weekly shop
//! - [`store`]: persistence gateways
//! - [`server`]: the `/data` HTTP endpoint
//! - [`backup`]: backup files and import validation
//! - [`config`], [`init`]: configuration and wiring
//! - [`clipboard`]: cross-platform clipboard support
//! - [`error`]: error types

pub mod api;
pub mod backup;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod init;
pub mod input;
pub mod list;
pub mod model;
pub mod sections;
pub mod selector;
pub mod server;
pub mod store;
