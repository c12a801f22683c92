//! # Storage Layer
//!
//! The library lives in memory, owned by a single [`library::Store`]. Raw
//! persistence sits behind the [`LibraryBackend`] trait so the store's logic
//! can be tested without a filesystem.
//!
//! ## Lifecycle
//!
//! 1. **Load**: on start the store asks the backend for the persisted books.
//! 2. **Seed**: if there is no file, or it cannot be parsed, the store falls
//!    back to a fixed set of sample books ([`seed::default_books`]) and
//!    persists them right away.
//! 3. **Mutate + Save**: every add, remove and toggle rewrites the whole file
//!    before returning.
//!
//! ## File Format
//!
//! A single JSON array, no envelope, no version field:
//!
//! ```text
//! [
//!     {
//!         "title": "Atomic Habits",
//!         "author": "James Clear",
//!         "year": 2018,
//!         "genre": "Motivational",
//!         "read": true
//!     }
//! ]
//! ```
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production backend, one file, atomic replace on write.
//! - [`memory::MemBackend`]: in-memory backend for tests, can simulate write failures.

use crate::error::Result;
use crate::model::Book;
use serde::Serialize;
use std::path::PathBuf;

pub mod fs;
pub mod library;
pub mod memory;
pub mod seed;

/// Abstract interface for raw library I/O.
///
/// The backend handles *where* the books live; [`library::Store`] handles
/// what they mean (identity, references, seeding).
pub trait LibraryBackend {
    /// Load the persisted books.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err(Serialization) when the data exists but does not parse,
    /// and any other error when it cannot be read at all.
    fn load_books(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the persisted books.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Move the current persisted data aside so it survives a reseed.
    /// Returns where it went, or None if there was nothing to move.
    fn quarantine(&self) -> Result<Option<PathBuf>>;

    /// Where the books are persisted. Virtual for non-file backends.
    fn location(&self) -> PathBuf;
}

/// Serializes books the way the file has always been written: pretty JSON, 4-space indent.
pub fn encode_books(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn decode_books(content: &str) -> Result<Vec<Book>> {
    Ok(serde_json::from_str(content)?)
}

/// Suffix appended to a quarantined file name, e.g. `.corrupt-20240101120000`.
pub fn quarantine_suffix() -> String {
    format!(".corrupt-{}", chrono::Local::now().format("%Y%m%d%H%M%S"))
}
