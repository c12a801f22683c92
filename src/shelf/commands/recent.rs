use crate::commands::CmdResult;
use crate::error::Result;
use crate::query;
use crate::store::library::Store;
use crate::store::LibraryBackend;

pub fn run<B: LibraryBackend>(store: &Store<B>, count: usize) -> Result<CmdResult> {
    let recent = query::recent(&store.entries(), count);
    Ok(CmdResult::default().with_listed_books(recent))
}
