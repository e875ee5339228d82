//! # Caixa Terminal Entry Point
//!
//! Binary entry point for the register shell.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Caixa POS Terminal                        │
//! │                                                                 │
//! │  main.rs ────► delegates to caixa_terminal::run()               │
//! │                                                                 │
//! │  lib.rs ─────► tracing init, catalog seed, stdin loop           │
//! │                                                                 │
//! │  shell.rs ───► parses "add 1002", "desconto 5", "finalizar"     │
//! │                                                                 │
//! │  commands/ ──► search_catalog, add_to_cart, finalize_sale, ...  │
//! │                                                                 │
//! │  state/ ─────► CatalogState, SessionState, StatusNotifier       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup lives in lib.rs for better testability
    match caixa_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("caixa-terminal: {err}");
            ExitCode::FAILURE
        }
    }
}
