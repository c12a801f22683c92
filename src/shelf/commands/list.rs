use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{self, GenreFilter, ReadFilter, SortKey};
use crate::store::library::Store;
use crate::store::LibraryBackend;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub genre: GenreFilter,
    pub status: ReadFilter,
    pub sort: SortKey,
}

pub fn run<B: LibraryBackend>(store: &Store<B>, options: &ListOptions) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(
            "Your library is empty. Add some books to get started!",
        ));
        return Ok(result);
    }

    let filtered = query::filter(&store.entries(), &options.genre, options.status);
    let listed = query::sort(&filtered, options.sort);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No books match your filters."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} books",
            listed.len(),
            store.len()
        )));
    }
    Ok(result.with_listed_books(listed))
}
