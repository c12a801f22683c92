use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{self, SearchField};
use crate::store::library::Store;
use crate::store::LibraryBackend;

pub fn run<B: LibraryBackend>(
    store: &Store<B>,
    field: SearchField,
    term: &str,
) -> Result<CmdResult> {
    let matches = query::search(&store.entries(), field, term);

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books found matching '{}' in {}.",
            term,
            field.name()
        )));
    } else {
        result.add_message(CmdMessage::info(format!("Found {} books", matches.len())));
    }
    Ok(result.with_listed_books(matches))
}
