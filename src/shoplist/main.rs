//! # shoplist
//!
//! Terminal client for the shoplist library. All list logic lives in the
//! library crate; this binary parses arguments, renders results and maps
//! errors to an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
