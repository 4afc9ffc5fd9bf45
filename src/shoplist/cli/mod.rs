//! # CLI Behavior
//!
//! This is **one possible UI client** for shoplist, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes and output formatting. For the overall architecture see the crate
//! documentation of the library.
//!
//! ## Naked Execution
//!
//! Running `shoplist` with no arguments shows the whole list. Looking at the
//! list is most of the usage, so it is the path of least resistance.
//!
//! ## Selectors
//!
//! Entries are addressed by the position printed next to them (`toggle 3`),
//! by ranges (`toggle 3-6`), or by name (`toggle olive oil`). Positions are
//! always positions in the full list, also when printed by `shop`, so a
//! number seen anywhere can be used with any command.
//!
//! ## Remote lists
//!
//! `--remote <url>` (or `backend = remote` in the config) swaps the local
//! file for a `shoplist serve` instance. Everything else behaves the same;
//! a server that cannot be reached shows an empty list and changes are kept
//! only until the process exits.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: list, shop and message output
//! - `setup`: argument parsing via clap, grouped help

mod commands;
mod render;
pub mod setup;

pub use commands::run;
