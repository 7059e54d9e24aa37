//! The journal owns its entries and nothing else.
//!
//! Storing and loading entries is the job of a [`LineStore`](crate::LineStore);
//! the journal only exposes its lines and can be rebuilt from them.

use crate::counter::EntryCounter;
use crate::error::{JournalError, Result};
use std::fmt;
use std::sync::Arc;

/// An ordered list of numbered entries.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: Vec<String>,
    counter: Arc<EntryCounter>,
}

impl Journal {
    pub fn new(counter: Arc<EntryCounter>) -> Self {
        Self {
            entries: Vec::new(),
            counter,
        }
    }

    /// Rebuild a journal from previously stored lines.
    ///
    /// Lines are taken verbatim; the counter is not advanced.
    pub fn from_lines(lines: Vec<String>, counter: Arc<EntryCounter>) -> Self {
        Self {
            entries: lines,
            counter,
        }
    }

    /// Append `"{n}. {text}"` where `n` is the counter's next value.
    ///
    /// # Returns
    /// * `Ok(n)` - The number given to the entry
    /// * `Err(JournalError::CounterExhausted)` - If the counter has no value left
    pub fn add_entry(&mut self, text: &str) -> Result<u64> {
        let number = self.counter.next()?;
        self.entries.push(format!("{number}. {text}"));
        tracing::debug!("Added journal entry {} ({} entries)", number, self.entries.len());
        Ok(number)
    }

    /// Remove the entry at zero-based position `index` and return it.
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(JournalError::EntryNotFound {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        tracing::debug!("Removed journal entry at {}", index);
        Ok(removed)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counter(&self) -> &Arc<EntryCounter> {
        &self.counter
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_numbers_from_counter() {
        let mut journal = Journal::new(Arc::new(EntryCounter::new()));

        assert_eq!(journal.add_entry("I ate banku today").unwrap(), 1);
        assert_eq!(journal.add_entry("I think the new keyword works too").unwrap(), 2);
        assert_eq!(
            journal.entries(),
            ["1. I ate banku today", "2. I think the new keyword works too"]
        );
        assert_eq!(
            journal.to_string(),
            "1. I ate banku today\n2. I think the new keyword works too"
        );
    }

    #[test]
    fn test_shared_counter_spans_journals() {
        let counter = Arc::new(EntryCounter::new());
        let mut first = Journal::new(counter.clone());
        let mut second = Journal::new(counter.clone());

        first.add_entry("a").unwrap();
        assert_eq!(second.add_entry("b").unwrap(), 2);
        assert_eq!(first.add_entry("c").unwrap(), 3);
        assert_eq!(counter.current(), 3);
    }

    #[test]
    fn test_remove_entry() {
        let mut journal = Journal::new(Arc::new(EntryCounter::new()));
        journal.add_entry("a").unwrap();
        journal.add_entry("b").unwrap();

        assert_eq!(journal.remove_entry(0).unwrap(), "1. a");
        assert_eq!(journal.entries(), ["2. b"]);

        let err = journal.remove_entry(5).unwrap_err();
        assert!(matches!(err, JournalError::EntryNotFound { index: 5, len: 1 }));
    }

    #[test]
    fn test_from_lines_keeps_counter() {
        let counter = Arc::new(EntryCounter::starting_after(2));
        let mut journal = Journal::from_lines(vec!["1. a".into(), "2. b".into()], counter);

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.add_entry("c").unwrap(), 3);
    }

    #[test]
    fn test_add_entry_fails_when_counter_exhausted() {
        let counter = Arc::new(EntryCounter::starting_after(u64::MAX));
        let mut journal = Journal::new(counter);

        assert!(matches!(
            journal.add_entry("one too many"),
            Err(JournalError::CounterExhausted { .. })
        ));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_empty_journal_displays_nothing() {
        let journal = Journal::new(Arc::new(EntryCounter::new()));
        assert!(journal.is_empty());
        assert_eq!(journal.to_string(), "");
    }
}
