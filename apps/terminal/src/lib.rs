//! # Caixa Terminal Library
//!
//! Shell layer for the Caixa POS register.
//!
//! ## Module Organization
//! ```text
//! caixa_terminal/
//! ├── lib.rs          ◄─── You are here (wiring & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only catalog handle
//! │   └── session.rs  ◄─── Session state + status notifier
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog search
//! │   └── sale.rs     ◄─── Cart/discount/payment/finalize
//! ├── shell.rs        ◄─── Line parser, dispatcher, renderer
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! The layering mirrors what a webview register would use: the shell loop
//! plays the part of the window, the command functions are the IPC surface,
//! and everything below them is `caixa-core`.

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use caixa_core::demo_catalog;
use shell::{Outcome, Shell};

/// Runs the register shell until the operator quits or stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (default `info`, `RUST_LOG` override)
/// 2. Seed the demo catalog
/// 3. Loop: read line → execute → print
pub fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting Caixa POS terminal");

    let mut shell = Shell::new(demo_catalog());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Caixa POS - frente de caixa (digite 'ajuda')");
    print!("caixa> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match shell.execute_line(&line) {
            Outcome::Continue(output) => println!("{output}"),
            Outcome::Quit => break,
        }
        print!("caixa> ");
        stdout.flush()?;
    }

    info!("Caixa POS terminal shutting down");
    Ok(())
}

/// Initializes tracing with an env-filter.
///
/// Default level is `info`; set `RUST_LOG` to override (e.g.
/// `RUST_LOG=caixa_terminal=debug,caixa_core=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
