use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Book;
use crate::store::library::Store;
use crate::store::LibraryBackend;

use super::helpers::{describe, resolve_indexes};

/// Flips the read status of each selected book.
pub fn run<B: LibraryBackend>(
    store: &mut Store<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let refs = resolve_indexes(store, indexes)?;
    let updated = store.toggle_read(&refs)?;
    Ok(report(updated))
}

/// Marks each selected book read or unread.
pub fn set<B: LibraryBackend>(
    store: &mut Store<B>,
    indexes: &[DisplayIndex],
    read: bool,
) -> Result<CmdResult> {
    let refs = resolve_indexes(store, indexes)?;
    let updated = store.set_read(&refs, read)?;
    Ok(report(updated))
}

fn report(updated: Vec<Book>) -> CmdResult {
    let mut result = CmdResult::default();
    for book in &updated {
        result.add_message(CmdMessage::success(format!(
            "Marked {} as {}",
            describe(&book.title, &book.author),
            book.status_label().to_lowercase()
        )));
    }
    result.with_affected_books(updated)
}
