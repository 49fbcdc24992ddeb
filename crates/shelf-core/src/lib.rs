//! # Shelf Core
//!
//! Core library for Shelf - a CLI-first library inventory manager.
//!
//! This crate provides the book data model and the JSON-backed inventory
//! store, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **book**: The book record and its lending status
//! - **inventory**: The inventory store and its whole-file persistence
//! - **error**: Error types for core operations
//! - **fs**: Filesystem utilities for atomic file replacement
//!
//! Diagnostics go through `tracing`; the crate never touches the terminal.

pub mod book;
pub mod error;
pub mod fs;
pub mod inventory;

pub use book::{Book, BookStatus};
pub use error::{Result, ShelfError};
pub use inventory::{Inventory, LendOutcome};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
