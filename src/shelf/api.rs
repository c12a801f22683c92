//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every shelf operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Store`], so there is exactly one library per API instance
//!
//! Configuration does not need a library, so [`config`] is a free function
//! over [`ShelfPaths`] rather than a method.
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (index strings and ranges into [`DisplayIndex`]es)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O of its own and no formatting.
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `42`), the number printed next to a book
//! - **Range**: `Start-End` (e.g. `2-5`), inclusive, start must be <= end
//!
//! Duplicates are dropped while preserving order. A range reaching past the
//! end of the library is rejected before it is expanded. All indexes are
//! resolved before anything is changed, so `shelf remove 1 99` on a 10-book
//! library removes nothing.
//!
//! ## Generic Over LibraryBackend
//!
//! `ShelfApi<B: LibraryBackend>`:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands;
use crate::config::ShelfPaths;
use crate::error::{Result, ShelfError};
use crate::index::{parse_index_or_range, DisplayIndex};
use crate::model::NewBook;
use crate::query::SearchField;
use crate::store::library::Store;
use crate::store::LibraryBackend;
use std::collections::HashSet;

/// The main API facade for shelf operations.
pub struct ShelfApi<B: LibraryBackend> {
    store: Store<B>,
}

impl<B: LibraryBackend> ShelfApi<B> {
    pub fn new(store: Store<B>) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, book: NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, book)
    }

    pub fn list_books(&self, options: &ListOptions) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, options)
    }

    pub fn remove_books<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.store.len())?;
        commands::remove::run(&mut self.store, &indexes)
    }

    pub fn toggle_books<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.store.len())?;
        commands::toggle::run(&mut self.store, &indexes)
    }

    pub fn mark_books<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
        read: bool,
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.store.len())?;
        commands::toggle::set(&mut self.store, &indexes, read)
    }

    pub fn search_books(&self, field: SearchField, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, term)
    }

    pub fn stats(&self, recent_count: usize) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, recent_count)
    }

    pub fn recent_books(&self, count: usize) -> Result<commands::CmdResult> {
        commands::recent::run(&self.store, count)
    }

    pub fn genres(&self) -> Result<commands::CmdResult> {
        commands::genres::run(&self.store)
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }
}

/// Shows or changes the settings in `paths.config_dir`.
pub fn config(paths: &ShelfPaths, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(paths, action)
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    if inputs.is_empty() {
        return Err(ShelfError::Api("No books selected".to_string()));
    }

    let mut seen = HashSet::new();
    let mut indexes = Vec::new();
    for input in inputs {
        let expanded = parse_index_or_range(input.as_ref(), len).map_err(ShelfError::Api)?;
        for idx in expanded {
            if seen.insert(idx) {
                indexes.push(idx);
            }
        }
    }
    Ok(indexes)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListOptions;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::query::{GenreFilter, ReadFilter, SortKey};
