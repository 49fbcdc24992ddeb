//! Prompt and menu helpers for the interactive shell.
//!
//! On a TTY the prompts use dialoguer; when stdin is piped the same
//! interactions fall back to numbered lists and plain line reads, so the
//! shell stays scriptable.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Issue,
    Return,
    ViewAll,
    Search,
    Exit,
}

/// Search mode entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    Title,
    Isbn,
}

const MENU_ITEMS: [(&str, MenuChoice); 6] = [
    ("Add book", MenuChoice::Add),
    ("Issue book", MenuChoice::Issue),
    ("Return book", MenuChoice::Return),
    ("View all books", MenuChoice::ViewAll),
    ("Search books", MenuChoice::Search),
    ("Exit", MenuChoice::Exit),
];

/// Show the main menu and read one choice.
///
/// End of piped input maps to `Exit` so scripted sessions terminate cleanly.
pub fn menu_choice() -> anyhow::Result<MenuChoice> {
    let labels: Vec<&str> = MENU_ITEMS.iter().map(|(label, _)| *label).collect();
    match select("Library Inventory Manager", &labels)? {
        Some(index) => Ok(MENU_ITEMS[index].1),
        None => Ok(MenuChoice::Exit),
    }
}

/// Show the search submenu. Returns `None` when input is exhausted.
pub fn search_choice() -> anyhow::Result<Option<SearchChoice>> {
    let choice = select("Search by", &["Title", "ISBN"])?.map(|index| match index {
        0 => SearchChoice::Title,
        _ => SearchChoice::Isbn,
    });
    Ok(choice)
}

/// Prompt for one line of input, trimmed.
///
/// End of piped input yields an empty string; the caller decides whether
/// that is acceptable.
pub fn prompt(label: &str) -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        return Ok(value.trim().to_string());
    }
    print!("{}: ", label);
    io::stdout().flush()?;
    Ok(read_line()?.unwrap_or_default())
}

/// Present a selection list.
///
/// On a TTY this is an arrow-key menu; otherwise a numbered list is printed
/// and the selection read from stdin, re-prompting on invalid numbers.
/// Returns `None` when input is exhausted.
fn select(prompt: &str, items: &[&str]) -> anyhow::Result<Option<usize>> {
    if io::stdin().is_terminal() {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read selection: {}", e))?;
        return Ok(Some(index));
    }
    loop {
        println!();
        println!("{}", prompt);
        for (index, item) in items.iter().enumerate() {
            println!("{}. {}", index + 1, item);
        }
        print!("Enter choice: ");
        io::stdout().flush()?;
        let line = match read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse::<usize>() {
            Ok(number) if (1..=items.len()).contains(&number) => return Ok(Some(number - 1)),
            _ => println!(
                "Invalid choice. Please enter a number from 1 to {}.",
                items.len()
            ),
        }
    }
}

/// Read one trimmed line from stdin; `None` at end of input.
fn read_line() -> anyhow::Result<Option<String>> {
    let mut buffer = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_six_entries_ending_in_exit() {
        assert_eq!(MENU_ITEMS.len(), 6);
        assert_eq!(MENU_ITEMS[5].1, MenuChoice::Exit);
    }
}
