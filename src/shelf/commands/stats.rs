use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query;
use crate::store::library::Store;
use crate::store::LibraryBackend;

/// Dashboard data: aggregate statistics plus the most recently added books.
pub fn run<B: LibraryBackend>(store: &Store<B>, recent_count: usize) -> Result<CmdResult> {
    let stats = query::aggregate(store.books());
    let recent = query::recent(&store.entries(), recent_count);

    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info(
            "Your library is empty. Add some books to get started!",
        ));
    }
    Ok(result.with_stats(stats).with_recent_books(recent))
}
