//! # Advent CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: logging setup, context wiring and dispatch to `AdventApi`
//! - `cli/render.rs`: terminal output for `CmdResult` values
//!
//! Everything from `advent::api` inward is UI agnostic. Errors bubble up here and are
//! printed as `Error: ...` with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
