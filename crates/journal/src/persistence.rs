//! Persistence for anything that can be expressed as ordered lines.
//!
//! Stores are injected by the caller; swapping disk for another backend
//! touches neither [`Journal`] nor its callers.

use crate::counter::EntryCounter;
use crate::error::{JournalError, Result};
use crate::entries::Journal;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

/// Durable storage for an ordered sequence of text lines.
pub trait LineStore: Send + Sync {
    /// Store `lines` under `destination`, replacing anything already there.
    fn save(&self, lines: &[String], destination: &str) -> Result<()>;

    /// Return the lines last stored under `destination`.
    ///
    /// # Errors
    /// * `JournalError::NotFound` - Nothing was stored there
    fn load(&self, destination: &str) -> Result<Vec<String>>;
}

/// Stores lines in a file, joined by `line_separator`.
#[derive(Debug, Clone)]
pub struct FileStore {
    line_separator: String,
}

impl FileStore {
    /// # Errors
    /// * `JournalError::EmptySeparator` - If `line_separator` is empty
    pub fn new(line_separator: impl Into<String>) -> Result<Self> {
        let line_separator = line_separator.into();
        if line_separator.is_empty() {
            return Err(JournalError::EmptySeparator);
        }
        Ok(Self { line_separator })
    }

    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
        }
    }
}

impl LineStore for FileStore {
    fn save(&self, lines: &[String], destination: &str) -> Result<()> {
        std::fs::write(destination, lines.join(self.line_separator.as_str()))?;
        tracing::debug!("Saved {} lines to {}", lines.len(), destination);
        Ok(())
    }

    fn load(&self, destination: &str) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(destination).map_err(|e| match e.kind() {
            ErrorKind::NotFound => JournalError::NotFound {
                destination: destination.to_string(),
            },
            _ => JournalError::Io(e),
        })?;

        // Hand-edited files often end with one trailing separator.
        let content = content
            .strip_suffix(self.line_separator.as_str())
            .unwrap_or(&content);

        // An empty file holds no lines, not one empty line.
        if content.is_empty() {
            return Ok(Vec::new());
        }
        let lines: Vec<String> = content
            .split(self.line_separator.as_str())
            .map(str::to_string)
            .collect();
        tracing::debug!("Loaded {} lines from {}", lines.len(), destination);
        Ok(lines)
    }
}

/// In-process store keyed by destination.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineStore for MemoryStore {
    fn save(&self, lines: &[String], destination: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(destination.to_string(), lines.to_vec());
        Ok(())
    }

    fn load(&self, destination: &str) -> Result<Vec<String>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots
            .get(destination)
            .cloned()
            .ok_or_else(|| JournalError::NotFound {
                destination: destination.to_string(),
            })
    }
}

/// Save a journal's entries through `store`.
pub fn save_journal(store: &dyn LineStore, journal: &Journal, destination: &str) -> Result<()> {
    store.save(journal.entries(), destination)
}

/// Load a journal through `store`, numbering new entries with `counter`.
pub fn load_journal(
    store: &dyn LineStore,
    destination: &str,
    counter: Arc<EntryCounter>,
) -> Result<Journal> {
    let lines = store.load(destination)?;
    Ok(Journal::from_lines(lines, counter))
}
