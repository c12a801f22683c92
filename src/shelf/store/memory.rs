use super::{decode_books, encode_books, quarantine_suffix, LibraryBackend};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::cell::RefCell;
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "memory://library.json";

/// In-memory storage backend for testing.
///
/// Keeps the serialized document rather than the parsed books so tests can
/// plant malformed content and exercise the recovery path. Uses `RefCell`
/// since shelf is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    quarantined: RefCell<Vec<(PathBuf, String)>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that starts out holding `content` verbatim.
    pub fn with_content(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.content.borrow_mut() = Some(content.into());
        backend
    }

    /// Backend that starts out holding `books`.
    pub fn with_books(books: &[Book]) -> Result<Self> {
        Ok(Self::with_content(encode_books(books)?))
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make loads fail as an unreadable (not unparsable) file would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// The document as last written, if any.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Documents moved aside by [`LibraryBackend::quarantine`].
    pub fn quarantined(&self) -> Vec<(PathBuf, String)> {
        self.quarantined.borrow().clone()
    }
}

impl LibraryBackend for MemBackend {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        if *self.simulate_read_error.borrow() {
            return Err(ShelfError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated read error",
            )));
        }
        match self.content.borrow().as_deref() {
            Some(content) => Ok(Some(decode_books(content)?)),
            None => Ok(None),
        }
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        let encoded = encode_books(books)?;
        *self.content.borrow_mut() = Some(encoded);
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>> {
        let Some(content) = self.content.borrow_mut().take() else {
            return Ok(None);
        };
        let target = PathBuf::from(format!("{}{}", MEMORY_LOCATION, quarantine_suffix()));
        self.quarantined
            .borrow_mut()
            .push((target.clone(), content));
        Ok(Some(target))
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_LOCATION)
    }
}
