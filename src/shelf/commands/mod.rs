use crate::config::ShelfConfig;
use crate::index::DisplayBook;
use crate::model::Book;
use crate::query::LibraryStats;
use crate::store::library::{LoadOutcome, LoadReport};

pub mod add;
pub mod config;
pub mod genres;
pub mod helpers;
pub mod list;
pub mod recent;
pub mod remove;
pub mod search;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub stats: Option<LibraryStats>,
    pub recent_books: Vec<DisplayBook>,
    pub genres: Vec<String>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_recent_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.recent_books = books;
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// What the user should hear about how the library was loaded. Quiet on a normal load.
pub fn load_messages(report: &LoadReport) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    match &report.outcome {
        LoadOutcome::Loaded { .. } => {}
        LoadOutcome::Seeded => {
            messages.push(CmdMessage::info(
                "Created a new library with sample books.",
            ));
        }
        LoadOutcome::Recovered { error, backup } => {
            messages.push(CmdMessage::error(format!(
                "Error loading library: {}",
                error
            )));
            match backup {
                Some(path) => messages.push(CmdMessage::warning(format!(
                    "Started over with sample books. The unreadable file was kept at {}",
                    path.display()
                ))),
                None => messages.push(CmdMessage::warning(
                    "Started over with sample books. The unreadable file was discarded.",
                )),
            }
        }
    }
    if report.duplicates > 0 {
        messages.push(CmdMessage::warning(format!(
            "{} books in the library repeat the title and author of another book.",
            report.duplicates
        )));
    }
    if let Some(e) = &report.save_error {
        messages.push(CmdMessage::error(format!(
            "Error saving library: {}. Changes will be lost when shelf exits.",
            e
        )));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use std::path::PathBuf;

    #[test]
    fn loaded_is_quiet() {
        let report = LoadReport {
            outcome: LoadOutcome::Loaded { count: 4 },
            save_error: None,
            duplicates: 0,
        };
        assert!(load_messages(&report).is_empty());
    }

    #[test]
    fn recovered_mentions_backup() {
        let report = LoadReport {
            outcome: LoadOutcome::Recovered {
                error: "expected value at line 1".into(),
                backup: Some(PathBuf::from("/data/library.json.corrupt-1")),
            },
            save_error: None,
            duplicates: 0,
        };
        let messages = load_messages(&report);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].level, MessageLevel::Error);
        assert!(messages[1].content.contains("library.json.corrupt-1"));
    }

    #[test]
    fn seed_save_failure_is_an_error() {
        let report = LoadReport {
            outcome: LoadOutcome::Seeded,
            save_error: Some(ShelfError::Store("disk full".into())),
            duplicates: 0,
        };
        let messages = load_messages(&report);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].level, MessageLevel::Error);
        assert!(messages[1].content.contains("disk full"));
    }

    #[test]
    fn duplicates_in_file_are_a_warning() {
        let report = LoadReport {
            outcome: LoadOutcome::Loaded { count: 3 },
            save_error: None,
            duplicates: 1,
        };
        let messages = load_messages(&report);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, MessageLevel::Warning);
    }
}
