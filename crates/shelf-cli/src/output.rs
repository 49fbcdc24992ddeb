//! Output formatting for book listings.

use std::io::{self, IsTerminal};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use shelf_core::{Book, BookStatus};

/// Render books as a styled table on a TTY, or as plain display lines when
/// stdout is piped.
pub fn render_books(books: &[Book]) -> String {
    if io::stdout().is_terminal() {
        book_table(books).to_string()
    } else {
        books
            .iter()
            .map(|book| book.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn book_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Title", "Author", "ISBN", "Status"]);

    for book in books {
        table.add_row(vec![
            Cell::new(&book.title),
            Cell::new(&book.author),
            Cell::new(&book.isbn),
            status_cell(book.status),
        ]);
    }
    table
}

fn status_cell(status: BookStatus) -> Cell {
    let color = match status {
        BookStatus::Available => Color::Green,
        BookStatus::Issued => Color::Yellow,
    };
    Cell::new(status.as_str()).fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Book;

    #[test]
    fn test_table_contains_all_fields() {
        let books = [Book::new("Dune", "Herbert", "111")];
        let rendered = book_table(&books).to_string();
        assert!(rendered.contains("Dune"));
        assert!(rendered.contains("Herbert"));
        assert!(rendered.contains("111"));
        assert!(rendered.contains("available"));
    }
}
