//! The book record and its lending status.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lending status of a book.
///
/// Serialized as the lowercase strings `"available"` / `"issued"`. Decoding
/// is case-insensitive; anything unrecognized (or missing) comes back as
/// `Available`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    /// Parse a status string, ignoring case.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("issued") {
            BookStatus::Issued
        } else {
            BookStatus::Available
        }
    }

    /// The lowercase wire form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(BookStatus::parse(&value))
    }
}

/// One library item and its lending status.
///
/// Fields missing from a stored record decode as empty strings (title,
/// author, isbn) or `Available` (status), so partially written records
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Create a new available book.
    ///
    /// Fields are taken as-is; the caller is responsible for rejecting
    /// empty titles, authors, or ISBNs if it cares.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    /// Create a book with an explicit status string, normalized on the way in.
    pub fn with_status(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        status: &str,
    ) -> Self {
        Self {
            status: BookStatus::parse(status),
            ..Self::new(title, author, isbn)
        }
    }

    /// True iff the book is on the shelf.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Mark the book as issued.
    ///
    /// Returns false without changing state if it is already out.
    pub fn issue(&mut self) -> bool {
        if self.is_available() {
            self.status = BookStatus::Issued;
            true
        } else {
            false
        }
    }

    /// Mark the book as returned.
    ///
    /// Returns false without changing state if it was never issued.
    pub fn return_book(&mut self) -> bool {
        if self.is_available() {
            false
        } else {
            self.status = BookStatus::Available;
            true
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new("Dune", "Herbert", "111");
        assert!(book.is_available());
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(BookStatus::parse("issued"), BookStatus::Issued);
        assert_eq!(BookStatus::parse("ISSUED"), BookStatus::Issued);
        assert_eq!(BookStatus::parse("Available"), BookStatus::Available);
        assert_eq!(BookStatus::parse("lost"), BookStatus::Available);
    }

    #[test]
    fn test_with_status_normalizes() {
        let book = Book::with_status("Dune", "Herbert", "111", "Issued");
        assert_eq!(book.status, BookStatus::Issued);
    }

    #[test]
    fn test_issue_and_return_transitions() {
        let mut book = Book::new("Dune", "Herbert", "111");

        assert!(book.issue());
        assert_eq!(book.status, BookStatus::Issued);
        assert!(!book.issue());

        assert!(book.return_book());
        assert!(book.is_available());
        assert!(!book.return_book());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut book = Book::new("Dune", "Herbert", "111");
        book.issue();

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["status"], "issued");

        let decoded: Book = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let decoded: Book = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert_eq!(decoded.title, "Dune");
        assert_eq!(decoded.author, "");
        assert_eq!(decoded.isbn, "");
        assert_eq!(decoded.status, BookStatus::Available);
    }

    #[test]
    fn test_uppercase_status_decodes() {
        let decoded: Book =
            serde_json::from_str(r#"{"title": "Dune", "status": "ISSUED"}"#).unwrap();
        assert_eq!(decoded.status, BookStatus::Issued);
    }

    #[test]
    fn test_display_format() {
        let book = Book::new("Dune", "Herbert", "111");
        assert_eq!(book.to_string(), "Dune by Herbert (ISBN: 111) - available");
    }
}
