//! # Query Service
//!
//! Read-only views over the library. Nothing here mutates; every function
//! takes a slice and returns a new `Vec`.
//!
//! List-shaped queries work on [`DisplayBook`]s so each result keeps the
//! reference the presentation layer needs to act on it. Statistics only need
//! the books themselves.

use crate::index::DisplayBook;
use crate::model::Book;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Genre part of a filter. `Only` matches the genre exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    /// `"All"` (any case) or `None` means no genre filter.
    pub fn from_option(genre: Option<&str>) -> Self {
        match genre {
            None => GenreFilter::All,
            Some(g) if g.eq_ignore_ascii_case("all") => GenreFilter::All,
            Some(g) => GenreFilter::Only(g.to_string()),
        }
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => &book.genre == genre,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    fn matches(&self, book: &Book) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Read => book.read,
            ReadFilter::Unread => !book.read,
        }
    }
}

impl FromStr for ReadFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ReadFilter::All),
            "read" => Ok(ReadFilter::Read),
            "unread" => Ok(ReadFilter::Unread),
            _ => Err(format!("Unknown read status: {} (use all, read or unread)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Author,
    YearNewest,
    YearOldest,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::YearNewest => "Year (Newest)",
            SortKey::YearOldest => "Year (Oldest)",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Accepts the display labels ("Year (Oldest)") and short slugs ("oldest").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "newest" | "year-newest" | "year (newest)" => Ok(SortKey::YearNewest),
            "oldest" | "year-oldest" | "year (oldest)" | "year" => Ok(SortKey::YearOldest),
            _ => Err(format!(
                "Unknown sort key: {} (use title, author, newest or oldest)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => &book.genre,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            _ => Err(format!(
                "Unknown search field: {} (use title, author or genre)",
                s
            )),
        }
    }
}

/// Books matching both the genre and read-status filters, in input order.
pub fn filter(books: &[DisplayBook], genre: &GenreFilter, read: ReadFilter) -> Vec<DisplayBook> {
    books
        .iter()
        .filter(|dp| genre.matches(&dp.book) && read.matches(&dp.book))
        .cloned()
        .collect()
}

/// Stable sort: books with equal keys keep their relative order.
pub fn sort(books: &[DisplayBook], key: SortKey) -> Vec<DisplayBook> {
    let mut sorted = books.to_vec();
    match key {
        SortKey::Title => sorted.sort_by(|a, b| a.book.title.cmp(&b.book.title)),
        SortKey::Author => sorted.sort_by(|a, b| a.book.author.cmp(&b.book.author)),
        SortKey::YearNewest => sorted.sort_by(|a, b| b.book.year.cmp(&a.book.year)),
        SortKey::YearOldest => sorted.sort_by(|a, b| a.book.year.cmp(&b.book.year)),
    }
    sorted
}

/// Case-insensitive substring match on one field. An empty term matches everything.
pub fn search(books: &[DisplayBook], field: SearchField, term: &str) -> Vec<DisplayBook> {
    let term_lower = term.to_lowercase();
    books
        .iter()
        .filter(|dp| field.value(&dp.book).to_lowercase().contains(&term_lower))
        .cloned()
        .collect()
}

/// The last `n` books added, newest first.
pub fn recent(books: &[DisplayBook], n: usize) -> Vec<DisplayBook> {
    books.iter().rev().take(n).cloned().collect()
}

/// Distinct genres, sorted.
pub fn genres(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = books.iter().map(|b| b.genre.clone()).collect();
    genres.sort();
    genres.dedup();
    genres
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreStats {
    pub genre: String,
    pub count: usize,
    pub read: usize,
    pub unread: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub read_percentage: f64,
    pub unread_percentage: f64,
    /// Per genre, in order of first appearance in the library.
    pub genres: Vec<GenreStats>,
    /// (year, count), ascending by year.
    pub years: Vec<(i32, usize)>,
}

impl LibraryStats {
    pub fn unique_genres(&self) -> usize {
        self.genres.len()
    }
}

pub fn aggregate(books: &[Book]) -> LibraryStats {
    let total = books.len();
    let read = books.iter().filter(|b| b.read).count();
    let unread = total - read;

    let read_percentage = if total > 0 {
        read as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let unread_percentage = if total > 0 {
        100.0 - read_percentage
    } else {
        0.0
    };

    let mut genres: Vec<GenreStats> = Vec::new();
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for book in books {
        let entry = match genres.iter().position(|g| g.genre == book.genre) {
            Some(i) => &mut genres[i],
            None => {
                genres.push(GenreStats {
                    genre: book.genre.clone(),
                    count: 0,
                    read: 0,
                    unread: 0,
                });
                let last = genres.len() - 1;
                &mut genres[last]
            }
        };
        entry.count += 1;
        if book.read {
            entry.read += 1;
        } else {
            entry.unread += 1;
        }

        *years.entry(book.year).or_insert(0) += 1;
    }

    LibraryStats {
        total,
        read,
        unread,
        read_percentage,
        unread_percentage,
        genres,
        years: years.into_iter().collect(),
    }
}
