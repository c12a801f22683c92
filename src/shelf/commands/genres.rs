use crate::commands::CmdResult;
use crate::error::Result;
use crate::query;
use crate::store::library::Store;
use crate::store::LibraryBackend;

pub fn run<B: LibraryBackend>(store: &Store<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_genres(query::genres(store.books())))
}
