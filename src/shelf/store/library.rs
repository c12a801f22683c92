use super::seed::default_books;
use super::LibraryBackend;
use crate::error::{Result, ShelfError};
use crate::index::{BookRef, DisplayBook, DisplayIndex};
use crate::model::{Book, BookKey, NewBook};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

/// How the library was populated by [`Store::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Read from the persisted file.
    Loaded { count: usize },
    /// Nothing was persisted yet; the sample books were written.
    Seeded,
    /// The persisted data could not be read; the sample books replaced it.
    Recovered {
        error: String,
        backup: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    /// Set when the seeded books could not be written back.
    pub save_error: Option<ShelfError>,
    /// Loaded books whose (title, author) repeats an earlier one.
    pub duplicates: usize,
}

impl LoadReport {
    fn new(outcome: LoadOutcome) -> Self {
        Self {
            outcome,
            save_error: None,
            duplicates: 0,
        }
    }
}

/// Sole owner of the in-memory library.
///
/// All mutations go through here and persist before returning. Each
/// mutation also bumps `generation`, invalidating every [`BookRef`] handed
/// out before it.
pub struct Store<B: LibraryBackend> {
    backend: B,
    books: Vec<Book>,
    generation: u64,
    keep_corrupt: bool,
}

impl<B: LibraryBackend> Store<B> {
    /// An empty, unloaded store. Call [`Store::load`] before use.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            books: Vec::new(),
            generation: 0,
            keep_corrupt: true,
        }
    }

    /// Whether unreadable data is moved aside before reseeding (default: true).
    pub fn with_keep_corrupt(mut self, keep: bool) -> Self {
        self.keep_corrupt = keep;
        self
    }

    /// Builds a store and loads it in one step.
    pub fn open(backend: B) -> Result<(Self, LoadReport)> {
        let mut store = Self::new(backend);
        let report = store.load()?;
        Ok((store, report))
    }

    /// Populates the store from the backend.
    ///
    /// Missing data is seeded and data that does not parse is recovered by
    /// reseeding. Any other read failure is returned untouched, and nothing
    /// at the location is moved or overwritten.
    pub fn load(&mut self) -> Result<LoadReport> {
        match self.backend.load_books() {
            Ok(Some(books)) => {
                let count = books.len();
                let duplicates = duplicate_count(&books);
                if duplicates > 0 {
                    warn!(
                        "Library at {} has {} books sharing a title and author with an earlier one",
                        self.location().display(),
                        duplicates
                    );
                }
                self.replace(books);
                let mut report = LoadReport::new(LoadOutcome::Loaded { count });
                report.duplicates = duplicates;
                Ok(report)
            }
            Ok(None) => {
                debug!("No library at {}, seeding", self.location().display());
                Ok(self.seed(LoadOutcome::Seeded))
            }
            Err(e @ ShelfError::Serialization(_)) => {
                warn!(
                    "Could not read library at {}: {}. Falling back to sample books",
                    self.location().display(),
                    e
                );
                let backup = if self.keep_corrupt {
                    match self.backend.quarantine() {
                        Ok(path) => path,
                        Err(qe) => {
                            warn!("Could not move unreadable library aside: {}", qe);
                            None
                        }
                    }
                } else {
                    None
                };
                Ok(self.seed(LoadOutcome::Recovered {
                    error: e.to_string(),
                    backup,
                }))
            }
            Err(e) => Err(e),
        }
    }

    fn seed(&mut self, outcome: LoadOutcome) -> LoadReport {
        self.replace(default_books());
        let mut report = LoadReport::new(outcome);
        if let Err(e) = self.save() {
            warn!("Could not save sample books: {}", e);
            report.save_error = Some(e);
        }
        report
    }

    fn replace(&mut self, books: Vec<Book>) {
        self.books = books;
        self.generation += 1;
    }

    /// Writes the whole library to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save_books(&self.books)
    }

    /// Saves after a mutation, marking failures as unsynced state.
    fn persist(&self) -> Result<()> {
        self.save().map_err(|e| ShelfError::Unsaved {
            path: self.location(),
            reason: e.to_string(),
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Every book in insertion order, paired with a current reference.
    pub fn entries(&self) -> Vec<DisplayBook> {
        self.books
            .iter()
            .enumerate()
            .map(|(pos, book)| DisplayBook::new(book.clone(), BookRef::new(pos, self.generation)))
            .collect()
    }

    /// Current reference for a user-facing index.
    pub fn reference(&self, index: DisplayIndex) -> Result<BookRef> {
        match index.position() {
            Some(pos) if pos < self.books.len() => Ok(BookRef::new(pos, self.generation)),
            _ => Err(ShelfError::InvalidReference(format!(
                "index {} not found (library has {} books)",
                index,
                self.books.len()
            ))),
        }
    }

    pub fn get(&self, reference: BookRef) -> Result<&Book> {
        let pos = self.resolve_one(reference)?;
        Ok(&self.books[pos])
    }

    /// Case-insensitive lookup by identity.
    pub fn find(&self, title: &str, author: &str) -> Option<DisplayBook> {
        let key = BookKey::new(title, author);
        self.books
            .iter()
            .position(|b| b.key() == key)
            .map(|pos| DisplayBook::new(self.books[pos].clone(), BookRef::new(pos, self.generation)))
    }

    pub fn add(&mut self, new_book: NewBook) -> Result<DisplayBook> {
        let book = new_book.validate()?;
        if self.books.iter().any(|b| b.same_identity(&book)) {
            return Err(ShelfError::Duplicate {
                title: book.title,
                author: book.author,
            });
        }

        self.books.push(book.clone());
        self.generation += 1;
        let reference = BookRef::new(self.books.len() - 1, self.generation);
        self.persist()?;
        Ok(DisplayBook::new(book, reference))
    }

    /// Removes the referenced books, returning them in library order.
    ///
    /// All references are checked before anything is removed; one bad
    /// reference leaves the library untouched.
    pub fn remove(&mut self, references: &[BookRef]) -> Result<Vec<Book>> {
        let mut positions = self.resolve(references)?;
        positions.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed: Vec<Book> = positions
            .into_iter()
            .map(|pos| self.books.remove(pos))
            .collect();
        removed.reverse();

        self.generation += 1;
        self.persist()?;
        Ok(removed)
    }

    /// Flips the read flag on each referenced book.
    pub fn toggle_read(&mut self, references: &[BookRef]) -> Result<Vec<Book>> {
        self.update(references, |book| book.read = !book.read)
    }

    pub fn set_read(&mut self, references: &[BookRef], read: bool) -> Result<Vec<Book>> {
        self.update(references, |book| book.read = read)
    }

    fn update<F>(&mut self, references: &[BookRef], mut f: F) -> Result<Vec<Book>>
    where
        F: FnMut(&mut Book),
    {
        let positions = self.resolve(references)?;
        let mut updated = Vec::with_capacity(positions.len());
        for pos in positions {
            f(&mut self.books[pos]);
            updated.push(self.books[pos].clone());
        }

        self.generation += 1;
        self.persist()?;
        Ok(updated)
    }

    /// Positions for `references`, deduplicated, in the order given.
    fn resolve(&self, references: &[BookRef]) -> Result<Vec<usize>> {
        if references.is_empty() {
            return Err(ShelfError::InvalidReference(
                "no books selected".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        let mut positions = Vec::with_capacity(references.len());
        for reference in references {
            let pos = self.resolve_one(*reference)?;
            if seen.insert(pos) {
                positions.push(pos);
            }
        }
        Ok(positions)
    }

    fn resolve_one(&self, reference: BookRef) -> Result<usize> {
        if reference.generation() != self.generation {
            return Err(ShelfError::InvalidReference(format!(
                "reference to book {} is stale, the library changed since it was read",
                reference.display_index()
            )));
        }
        if reference.position() >= self.books.len() {
            return Err(ShelfError::InvalidReference(format!(
                "book {} does not exist",
                reference.display_index()
            )));
        }
        Ok(reference.position())
    }
}

fn duplicate_count(books: &[Book]) -> usize {
    let mut seen = HashSet::new();
    books.iter().filter(|b| !seen.insert(b.key())).count()
}
