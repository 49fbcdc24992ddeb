//! The inventory store: an ordered book collection with whole-file JSON
//! persistence.
//!
//! The store is the sole owner of the collection and the sole writer of the
//! data file. Every mutating operation rewrites the file immediately, so the
//! in-memory sequence and the on-disk state stay synchronized. The file is
//! assumed to be touched by exactly one process at a time.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::book::Book;
use crate::error::Result;
use crate::fs;

/// Outcome of an issue or return request.
///
/// "Not found" and "already in the requested state" are distinct variants,
/// so callers can tell a bad ISBN from a book that is simply in the wrong
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LendOutcome {
    /// The status transition was applied and persisted.
    Applied,
    /// No book with the given ISBN exists.
    NotFound,
    /// The book is already out on loan.
    AlreadyIssued,
    /// The book is already on the shelf.
    AlreadyAvailable,
}

impl LendOutcome {
    /// True iff the transition was applied.
    pub fn applied(&self) -> bool {
        matches!(self, LendOutcome::Applied)
    }
}

/// The inventory store.
///
/// Books are kept in insertion order. ISBN uniqueness is not enforced;
/// duplicate ISBNs are permitted and lookups return the first match.
#[derive(Debug)]
pub struct Inventory {
    data_file: PathBuf,
    books: Vec<Book>,
}

impl Inventory {
    /// Open the inventory backed by `data_file`, loading any existing books.
    ///
    /// A missing file starts an empty inventory; an unreadable or malformed
    /// file is logged and also starts empty.
    pub fn open(data_file: impl Into<PathBuf>) -> Self {
        let mut inventory = Self {
            data_file: data_file.into(),
            books: Vec::new(),
        };
        inventory.load();
        inventory
    }

    /// Path of the backing data file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Number of books in the collection.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True iff the collection holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Reload the collection from the data file.
    ///
    /// Never fails: a missing file means an empty inventory, and a read or
    /// decode failure is logged and resets the collection to empty.
    pub fn load(&mut self) {
        if !self.data_file.exists() {
            info!("Data file does not exist. Starting with empty inventory.");
            self.books = Vec::new();
            return;
        }
        match self.read_books() {
            Ok(books) => {
                info!("Loaded {} books from {}.", books.len(), self.data_file.display());
                self.books = books;
            }
            Err(err) => {
                error!("Failed to load books: {}", err);
                self.books = Vec::new();
            }
        }
    }

    /// Write the whole collection to the data file.
    ///
    /// A write failure is logged and otherwise swallowed; the in-memory
    /// state is kept even though the file may now be stale.
    pub fn save(&self) {
        match self.write_books() {
            Ok(()) => {
                info!("Saved {} books to {}.", self.books.len(), self.data_file.display());
            }
            Err(err) => error!("Failed to save books: {}", err),
        }
    }

    fn read_books(&self) -> Result<Vec<Book>> {
        let contents = std::fs::read_to_string(&self.data_file)?;
        let books = serde_json::from_str(&contents)?;
        Ok(books)
    }

    fn write_books(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.books)?;
        fs::write_atomic(&self.data_file, contents.as_bytes())?;
        Ok(())
    }

    /// Append a book to the collection and persist.
    ///
    /// Always succeeds: no validation, no duplicate check.
    pub fn add_book(&mut self, book: Book) {
        info!("Added book: {}", book.title);
        self.books.push(book);
        self.save();
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Returns all matches in insertion order; an empty result is a valid,
    /// non-error outcome.
    pub fn search_by_title(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Case-sensitive exact ISBN lookup; first match in insertion order.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.iter().find(|book| book.isbn == isbn).cloned()
    }

    /// Snapshot of the full collection in insertion order.
    pub fn display_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Issue the first book matching `isbn` and persist the change.
    pub fn issue_book(&mut self, isbn: &str) -> LendOutcome {
        let book = match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => book,
            None => {
                info!("Could not issue book, no match for ISBN: {}", isbn);
                return LendOutcome::NotFound;
            }
        };
        if book.issue() {
            info!("Issued book: {}", isbn);
            self.save();
            LendOutcome::Applied
        } else {
            info!("Could not issue book {}, already issued.", isbn);
            LendOutcome::AlreadyIssued
        }
    }

    /// Return the first book matching `isbn` and persist the change.
    pub fn return_book(&mut self, isbn: &str) -> LendOutcome {
        let book = match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => book,
            None => {
                info!("Could not return book, no match for ISBN: {}", isbn);
                return LendOutcome::NotFound;
            }
        };
        if book.return_book() {
            info!("Returned book: {}", isbn);
            self.save();
            LendOutcome::Applied
        } else {
            info!("Could not return book {}, already available.", isbn);
            LendOutcome::AlreadyAvailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookStatus;
    use tempfile::tempdir;

    fn open_in(dir: &tempfile::TempDir) -> Inventory {
        Inventory::open(dir.path().join("books.json"))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let inventory = open_in(&dir);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_add_saves_immediately() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);

        inventory.add_book(Book::new("Dune", "Herbert", "111"));

        let contents = std::fs::read_to_string(inventory.data_file()).unwrap();
        assert!(contents.contains("Dune"));
    }

    #[test]
    fn test_search_by_title_is_substring_and_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);
        inventory.add_book(Book::new("The Lord of the Rings", "Tolkien", "222"));
        inventory.add_book(Book::new("Dune", "Herbert", "111"));

        let matches = inventory.search_by_title("lord");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "The Lord of the Rings");

        assert!(inventory.search_by_title("nothing").is_empty());
    }

    #[test]
    fn test_search_by_isbn_is_exact_and_first_match() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);
        inventory.add_book(Book::new("First", "A", "111"));
        inventory.add_book(Book::new("Second", "B", "111"));

        let found = inventory.search_by_isbn("111").unwrap();
        assert_eq!(found.title, "First");

        assert!(inventory.search_by_isbn("999").is_none());
    }

    #[test]
    fn test_display_all_is_a_snapshot() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);
        inventory.add_book(Book::new("Dune", "Herbert", "111"));

        let mut snapshot = inventory.display_all();
        snapshot[0].title = "Changed".to_string();

        assert_eq!(inventory.display_all()[0].title, "Dune");
    }

    #[test]
    fn test_issue_and_return_cycle() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);
        inventory.add_book(Book::new("Dune", "Herbert", "111"));

        assert_eq!(inventory.issue_book("111"), LendOutcome::Applied);
        assert_eq!(
            inventory.search_by_isbn("111").unwrap().status,
            BookStatus::Issued
        );
        assert_eq!(inventory.issue_book("111"), LendOutcome::AlreadyIssued);

        assert_eq!(inventory.return_book("111"), LendOutcome::Applied);
        assert!(inventory.search_by_isbn("111").unwrap().is_available());
        assert_eq!(inventory.return_book("111"), LendOutcome::AlreadyAvailable);
    }

    #[test]
    fn test_lend_outcome_applied_matches_old_boolean() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);
        inventory.add_book(Book::new("Dune", "Herbert", "111"));

        assert!(inventory.issue_book("111").applied());
        assert!(!inventory.issue_book("111").applied());
        assert!(inventory.return_book("111").applied());
        assert!(!inventory.return_book("111").applied());
    }

    #[test]
    fn test_issue_unknown_isbn_is_not_found() {
        let dir = tempdir().unwrap();
        let mut inventory = open_in(&dir);

        assert_eq!(inventory.issue_book("999"), LendOutcome::NotFound);
        assert_eq!(inventory.return_book("999"), LendOutcome::NotFound);
    }

    #[test]
    fn test_malformed_file_resets_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, "not json at all").unwrap();

        let inventory = Inventory::open(&path);
        assert!(inventory.is_empty());
    }
}
