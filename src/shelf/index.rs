//! # Book References
//!
//! Books carry no surrogate id. The library hands out two kinds of handles
//! instead:
//!
//! - [`DisplayIndex`]: the 1-based number printed next to each book (`1`, `2`, ...).
//!   This is what users type. It is resolved against the library as it is at
//!   the moment a command runs.
//! - [`BookRef`]: an opaque position plus the store generation it was taken at.
//!   Every mutation bumps the generation, so a `BookRef` taken before an add,
//!   remove or toggle no longer resolves. A stale handle fails with
//!   `InvalidReference` instead of landing on whichever book moved into its slot.
//!
//! Query results are lists of [`DisplayBook`]s, which pair each book with both
//! handles. Callers never need to re-find a book by title and author.

use crate::model::Book;
use std::str::FromStr;

/// A user-facing, 1-based position in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// Zero-based position, or `None` for the invalid index `0`.
    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Index 0 is not valid, indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// Parses a single index ("3") or an inclusive range ("2-4").
///
/// Ranges must be ascending; "4-2" is an error. A range is only expanded
/// once its end is known to fit in a library of `len` books. Single indexes
/// are checked later, when they are resolved against the store.
pub fn parse_index_or_range(s: &str, len: usize) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if !start.is_empty() {
            let start = DisplayIndex::from_str(start)?;
            let end = DisplayIndex::from_str(end)?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            if end.0 > len {
                return Err(format!(
                    "Invalid range {}-{}: index {} not found (library has {} books)",
                    start, end, end, len
                ));
            }
            return Ok((start.0..=end.0).map(DisplayIndex).collect());
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// Opaque handle to one book, valid until the next mutation of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookRef {
    position: usize,
    generation: u64,
}

impl BookRef {
    pub(crate) fn new(position: usize, generation: u64) -> Self {
        Self {
            position,
            generation,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub fn display_index(&self) -> DisplayIndex {
        DisplayIndex::from_position(self.position)
    }
}

/// A book as handed to a presentation layer: the record plus its handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub book: Book,
    pub index: DisplayIndex,
    pub reference: BookRef,
}

impl DisplayBook {
    pub fn new(book: Book, reference: BookRef) -> Self {
        Self {
            index: reference.display_index(),
            book,
            reference,
        }
    }
}
