use crate::error::Result;
use crate::index::{BookRef, DisplayIndex};
use crate::store::library::Store;
use crate::store::LibraryBackend;

/// Turns user-facing indexes into references against the store as it is now.
pub fn resolve_indexes<B: LibraryBackend>(
    store: &Store<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<BookRef>> {
    indexes.iter().map(|idx| store.reference(*idx)).collect()
}

/// "Title" by Author, for messages.
pub fn describe(title: &str, author: &str) -> String {
    format!("\"{}\" by {}", title, author)
}
