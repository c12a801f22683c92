use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::library::Store;
use crate::store::LibraryBackend;

use super::helpers::{describe, resolve_indexes};

pub fn run<B: LibraryBackend>(
    store: &mut Store<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let refs = resolve_indexes(store, indexes)?;
    let removed = store.remove(&refs)?;

    let mut result = CmdResult::default();
    for book in &removed {
        result.add_message(CmdMessage::success(format!(
            "Removed {}",
            describe(&book.title, &book.author)
        )));
    }
    Ok(result.with_affected_books(removed))
}
