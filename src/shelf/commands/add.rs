use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::NewBook;
use crate::store::library::Store;
use crate::store::LibraryBackend;

use super::helpers::describe;

/// Adds a book. A duplicate is reported as a warning, not an error.
pub fn run<B: LibraryBackend>(store: &mut Store<B>, new_book: NewBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.add(new_book) {
        Ok(added) => {
            result.add_message(CmdMessage::success(format!(
                "{} has been added to your library ({})",
                describe(&added.book.title, &added.book.author),
                added.index
            )));
            result.affected_books.push(added.book.clone());
            result.listed_books.push(added);
        }
        Err(ShelfError::Duplicate { title, author }) => {
            result.add_message(CmdMessage::warning(format!(
                "This book already exists in your library: {}",
                describe(&title, &author)
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
