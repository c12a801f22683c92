//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book-tracking library**. The `shelf` binary is one
//! client of it; a web or TUI front end would sit on the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Store                │
//! │  - Normalizes inputs (index strings → DisplayIndex)         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                         │
//!                   ▼                         ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Query Service (query.rs)    │ │  Store (store/)            │
//! │  - filter, sort, search,     │ │  - owns the Library        │
//! │    aggregate; never mutates  │ │  - load / seed / save      │
//! └──────────────────────────────┘ │  - add, remove, toggle     │
//!                                  └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never prints and never exits the process. Logging goes
//! through `tracing`; the binary decides where it ends up.
//!
//! ## References, Not Re-Searches
//!
//! Books have no id. Every listing hands back [`index::DisplayBook`]s carrying
//! a [`index::BookRef`] that stays valid until the next mutation. See
//! [`index`] for details.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`query`]: Read-only filter, sort, search and statistics
//! - [`store`]: The Store and its persistence backends
//! - [`model`]: `Book` and `NewBook`
//! - [`index`]: Display indexes and references
//! - [`config`]: Configuration and directory discovery
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod store;
