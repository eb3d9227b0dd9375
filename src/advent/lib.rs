//! # Advent Architecture
//!
//! Advent keeps one entry per day of a short calendar (24 days by default, anywhere
//! from 1 to 31): a title, an optional 1–10 rating, free-form notes and the streaming
//! service it was watched on. Entries can be edited one field at a time, imported
//! from JSON, CSV or a share code, exported again, and the calendar can be resized
//! or reset.
//!
//! The library is UI-agnostic; the `advent` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session, parses day/field/format strings        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (session.rs, calendar.rs, model.rs, import/, share)   │
//! │  - Calendar invariants and reconciliation                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! The [`calendar::Calendar`] always holds exactly one record per day `1..=days`.
//! Every mutation (field edit, clear, reset, resize, import) preserves that, and
//! every successful mutation is followed by a save. A save that fails is reported
//! but never undoes the change.
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through the `log` facade; anything the user should see
//! travels back in `CmdResult` messages.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Live calendar, selection and persistence hook
//! - [`calendar`]: Day-keyed records, resize and merge
//! - [`model`]: `Record`, `Field` and rating normalization
//! - [`import`]: JSON and CSV parsing into partial day-maps
//! - [`share`]: Share-code encoding
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod session;
pub mod share;
pub mod store;
