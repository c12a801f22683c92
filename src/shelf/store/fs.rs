use super::{decode_books, encode_books, quarantine_suffix, LibraryBackend};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File-backed library: one JSON document at a fixed path.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("library.json")
            .to_string()
    }
}

impl LibraryBackend for FsBackend {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        if !self.path.is_file() {
            return Err(ShelfError::Store(format!(
                "{} is not a regular file",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let books = decode_books(&content)?;
        debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(Some(books))
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = encode_books(books)?;

        // Atomic write
        let tmp_path = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }

        debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        if !self.path.is_file() {
            return Err(ShelfError::Store(format!(
                "refusing to move {}, it is not a regular file",
                self.path.display()
            )));
        }
        let target = self
            .parent_dir()
            .join(format!("{}{}", self.file_name(), quarantine_suffix()));
        fs::rename(&self.path, &target).map_err(ShelfError::Io)?;
        Ok(Some(target))
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
