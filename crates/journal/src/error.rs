//! Error types for the journal crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    /// No entry at the requested position
    #[error("No entry at index {index} (journal has {len} entries)")]
    EntryNotFound { index: usize, len: usize },

    /// Nothing was ever stored under this destination
    #[error("Nothing stored at {destination}")]
    NotFound { destination: String },

    /// The counter has no larger value left to hand out
    #[error("Entry counter exhausted at {current}")]
    CounterExhausted { current: u64 },

    /// Lines joined by an empty separator cannot be split apart again
    #[error("Line separator must not be empty")]
    EmptySeparator,

    /// I/O error from a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
