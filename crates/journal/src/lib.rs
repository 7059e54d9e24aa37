//! # Journal Crate
//!
//! A journal of numbered entries, kept apart from the code that persists it.
//!
//! ## Components
//!
//! - **counter**: `EntryCounter`, the injectable sequence generator
//! - **entries**: `Journal`, which manages entries only
//! - **persistence**: the `LineStore` trait with file and in-memory stores
//!
//! ## Example Usage
//!
//! ```ignore
//! use journal::{save_journal, EntryCounter, FileStore, Journal};
//! use std::sync::Arc;
//!
//! let mut journal = Journal::new(Arc::new(EntryCounter::new()));
//! journal.add_entry("I ate banku today")?;
//!
//! save_journal(&FileStore::default(), &journal, "journal.txt")?;
//! ```

pub mod counter;
pub mod error;
pub mod entries;
pub mod persistence;

pub use counter::EntryCounter;
pub use error::{JournalError, Result};
pub use entries::Journal;
pub use persistence::{load_journal, save_journal, FileStore, LineStore, MemoryStore};
