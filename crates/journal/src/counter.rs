//! Sequence generator for numbering journal entries.
//!
//! Journals share one counter by handle, so numbering keeps increasing
//! across every journal built from the same `Arc<EntryCounter>`. Tests build
//! their own counter instead of sharing process-global state.

use crate::error::{JournalError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct EntryCounter {
    current: AtomicU64,
}

impl EntryCounter {
    /// Counter whose first `next()` returns 1.
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Counter whose first `next()` returns `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self {
            current: AtomicU64::new(last),
        }
    }

    /// Advance and return the new value.
    ///
    /// Fails instead of wrapping once `u64::MAX` has been handed out.
    pub fn next(&self) -> Result<u64> {
        self.current
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|current| JournalError::CounterExhausted { current })
    }

    /// Last value handed out (0 if none).
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    /// Make sure the next value is greater than `value`.
    ///
    /// Never moves the counter backwards.
    pub fn advance_to(&self, value: u64) {
        self.current.fetch_max(value, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.current.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_is_monotonic() {
        let counter = EntryCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next().unwrap(), 1);
        assert_eq!(counter.next().unwrap(), 2);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_counters_are_independent() {
        let a = EntryCounter::new();
        let b = EntryCounter::new();
        a.next().unwrap();
        a.next().unwrap();
        assert_eq!(b.next().unwrap(), 1);
    }

    #[test]
    fn test_reset_and_starting_after() {
        let counter = EntryCounter::starting_after(41);
        assert_eq!(counter.next().unwrap(), 42);
        counter.reset();
        assert_eq!(counter.next().unwrap(), 1);
    }

    #[test]
    fn test_advance_to_never_goes_backwards() {
        let counter = EntryCounter::new();
        counter.advance_to(5);
        assert_eq!(counter.next().unwrap(), 6);
        counter.advance_to(2);
        assert_eq!(counter.next().unwrap(), 7);
    }

    #[test]
    fn test_next_at_max_fails_without_wrapping() {
        let counter = EntryCounter::new();
        counter.advance_to(u64::MAX - 1);
        assert_eq!(counter.next().unwrap(), u64::MAX);

        let err = counter.next().unwrap_err();
        assert!(matches!(err, JournalError::CounterExhausted { current: u64::MAX }));
        // Still exhausted, never back to a small value.
        assert!(counter.next().is_err());
        assert_eq!(counter.current(), u64::MAX);
    }

    #[test]
    fn test_shared_counter_hands_out_unique_values() {
        let counter = Arc::new(EntryCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = counter.clone();
                thread::spawn(move || (0..250).map(|_| counter.next().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let mut values: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        values.sort_unstable();
        values.dedup();

        assert_eq!(values.len(), 1000);
        assert_eq!(counter.current(), 1000);
    }
}
