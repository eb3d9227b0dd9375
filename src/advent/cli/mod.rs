//! # CLI Behavior
//!
//! This is **one possible UI client** for advent, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting. For the overall architecture, see the crate-level documentation.
//!
//! ## Naked Execution
//!
//! Running `advent` with no arguments defaults to `advent list`.
//!
//! ## Data Location
//!
//! `$ADVENT_HOME` if set, otherwise the platform data directory. Both the calendar
//! snapshot and `config.json` live there.
//!
//! ## Payloads vs Messages
//!
//! Commands that produce a payload (`export`, `share`) write it to stdout and send
//! their messages to stderr, so the payload can be piped into a file or into
//! `advent import -`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (day lists, status, colored messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
