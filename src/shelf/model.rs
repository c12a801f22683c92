use crate::error::{Result, ShelfError};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Oldest publication year accepted for a new book.
pub const MIN_YEAR: i32 = 1800;

/// Latest publication year accepted for a new book: the current calendar year.
pub fn max_year() -> i32 {
    chrono::Local::now().year()
}

/// One record in the library.
///
/// The field names are the on-disk format; renaming any of them breaks
/// existing `library.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

/// Case-insensitive (title, author) identity of a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    title: String,
    author: String,
}

impl BookKey {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            author: author.to_lowercase(),
        }
    }
}

impl Book {
    pub fn key(&self) -> BookKey {
        BookKey::new(&self.title, &self.author)
    }

    pub fn same_identity(&self, other: &Book) -> bool {
        self.key() == other.key()
    }

    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// Unvalidated input for adding a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Trims text fields and checks them against the book invariants.
    pub fn validate(self) -> Result<Book> {
        let title = required("title", &self.title)?;
        let author = required("author", &self.author)?;
        let genre = required("genre", &self.genre)?;

        let max = max_year();
        if self.year < MIN_YEAR || self.year > max {
            return Err(ShelfError::Validation(format!(
                "year must be between {} and {}, got {}",
                MIN_YEAR, max, self.year
            )));
        }

        Ok(Book {
            title,
            author,
            year: self.year,
            genre,
            read: self.read,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShelfError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}
