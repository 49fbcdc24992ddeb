//! Shelf CLI - a library inventory manager for the terminal.
//!
//! This is the interactive shell around the core inventory store: it shows a
//! six-choice menu, reads the user's input, calls into the store, and prints
//! the results. All diagnostics go to the log file; stdout is reserved for
//! menu output.

mod config;
mod helpers;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;

use shelf_core::{Book, Inventory, LendOutcome, VERSION};

use crate::helpers::{MenuChoice, SearchChoice};

/// Shelf - a library inventory manager for the terminal
#[derive(Parser)]
#[command(name = "shelf")]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the books data file
    #[arg(short, long, env = "SHELF_FILE")]
    file: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, env = "SHELF_LOG")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    let data_file = match cli.file.or_else(|| config.inventory.file.clone().map(PathBuf::from)) {
        Some(path) => path,
        None => config::default_data_path()?,
    };
    let log_file = match cli.log_file.or_else(|| config.log.file.clone().map(PathBuf::from)) {
        Some(path) => path,
        None => config::default_log_path()?,
    };

    logging::init(&log_file)?;
    if let Some(parent) = data_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create data directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }

    let mut inventory = Inventory::open(data_file);

    loop {
        let choice = helpers::menu_choice()?;
        let result = match choice {
            MenuChoice::Add => add_book(&mut inventory),
            MenuChoice::Issue => issue_book(&mut inventory),
            MenuChoice::Return => return_book(&mut inventory),
            MenuChoice::ViewAll => view_all(&inventory),
            MenuChoice::Search => search(&inventory),
            MenuChoice::Exit => {
                println!("Exiting...");
                break;
            }
        };
        // A failed interaction is logged and the menu continues; only the
        // setup code above can take the process down.
        if let Err(err) = result {
            tracing::error!("Unexpected error: {:#}", err);
            println!("An error occurred. Check the log file for details.");
        }
    }

    Ok(())
}

fn add_book(inventory: &mut Inventory) -> anyhow::Result<()> {
    let title = helpers::prompt("Title")?;
    let author = helpers::prompt("Author")?;
    let isbn = helpers::prompt("ISBN")?;
    if title.is_empty() || author.is_empty() || isbn.is_empty() {
        println!("All fields are required.");
        return Ok(());
    }
    inventory.add_book(Book::new(title, author, isbn));
    println!("Book added.");
    Ok(())
}

fn issue_book(inventory: &mut Inventory) -> anyhow::Result<()> {
    let isbn = helpers::prompt("ISBN to issue")?;
    match inventory.issue_book(&isbn) {
        LendOutcome::Applied => println!("Book issued."),
        LendOutcome::NotFound => println!("No book found with that ISBN."),
        _ => println!("Book is already issued."),
    }
    Ok(())
}

fn return_book(inventory: &mut Inventory) -> anyhow::Result<()> {
    let isbn = helpers::prompt("ISBN to return")?;
    match inventory.return_book(&isbn) {
        LendOutcome::Applied => println!("Book returned."),
        LendOutcome::NotFound => println!("No book found with that ISBN."),
        _ => println!("Book is already available."),
    }
    Ok(())
}

fn view_all(inventory: &Inventory) -> anyhow::Result<()> {
    let books = inventory.display_all();
    if books.is_empty() {
        println!("No books in inventory.");
        return Ok(());
    }
    println!("{}", output::render_books(&books));
    Ok(())
}

fn search(inventory: &Inventory) -> anyhow::Result<()> {
    let mode = match helpers::search_choice()? {
        Some(mode) => mode,
        None => return Ok(()),
    };
    match mode {
        SearchChoice::Title => {
            let query = helpers::prompt("Title to search")?;
            let matches = inventory.search_by_title(&query);
            if matches.is_empty() {
                println!("No books found.");
            } else {
                println!("{}", output::render_books(&matches));
            }
        }
        SearchChoice::Isbn => {
            let isbn = helpers::prompt("ISBN to search")?;
            match inventory.search_by_isbn(&isbn) {
                Some(book) => println!("{}", book),
                None => println!("No book found."),
            }
        }
    }
    Ok(())
}
