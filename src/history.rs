use crate::buffer::PixelBuffer;
use crate::util::time;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of retained history entries
pub const DEFAULT_CAPACITY: usize = 50;

/// Errors that can occur when configuring a history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Capacity must be at least 1; a zero-capacity history could never
    /// hold the current state
    #[error("History capacity must be positive, got {0}")]
    InvalidCapacity(usize),
}

/// An immutable full copy of a pixel buffer's contents at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    buffer: PixelBuffer,
    /// Seconds since the UNIX epoch when the snapshot was taken
    timestamp: u64,
}

impl Snapshot {
    /// Capture the current contents of `buffer`
    pub fn of(buffer: &PixelBuffer) -> Self {
        Self {
            buffer: buffer.clone(),
            timestamp: time::timestamp_secs(),
        }
    }

    /// Apply this snapshot's contents back onto `target`, adopting the
    /// snapshot's dimensions if they differ
    pub fn restore(&self, target: &mut PixelBuffer) {
        target.copy_from(&self.buffer);
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// A capacity-bounded linear undo/redo stack over opaque state snapshots.
///
/// A single cursor points at the currently-displayed entry. Pushing while
/// the cursor is not at the tail discards the abandoned redo branch, and
/// pushing at capacity evicts the oldest entry. After every `push` the
/// cursor indexes the entry just pushed.
#[derive(Debug)]
pub struct BoundedHistory<S> {
    entries: Vec<S>,
    /// Index of the current entry; meaningless while `entries` is empty
    cursor: usize,
    capacity: usize,
}

impl<S> Default for BoundedHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> BoundedHistory<S> {
    /// Creates an empty history with the default capacity
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty history holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        history.configure(capacity)?;
        Ok(history)
    }

    /// Change the retention bound. Shrinking below the current length
    /// evicts the oldest entries; the cursor follows the survivors.
    pub fn configure(&mut self, capacity: usize) -> Result<(), HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::InvalidCapacity(capacity));
        }
        if self.entries.len() > capacity {
            let excess = self.entries.len() - capacity;
            log::warn!("History capacity shrunk to {capacity}, evicting {excess} oldest entries");
            self.entries.drain(0..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Record a new state. Everything after the cursor (the redo branch
    /// abandoned by earlier undos) is discarded first; if the history is
    /// full the oldest entry is evicted. The cursor ends up on `entry`.
    pub fn push(&mut self, entry: S) {
        if !self.entries.is_empty() {
            let discarded = self.entries.len() - (self.cursor + 1);
            if discarded > 0 {
                log::debug!("Discarding {discarded} redoable entries after new edit");
            }
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            // Eviction only caps the length; the cursor keeps tracking the
            // entry just pushed, so it shifts down with everything else.
            self.entries.remove(0);
            self.cursor -= 1;
            log::debug!("History at capacity {}, evicted oldest entry", self.capacity);
        }
    }

    /// Step the cursor back one entry and return the entry it now points
    /// at. Returns `None` at the oldest retained entry (which represents
    /// the earliest restorable state and cannot be undone past).
    pub fn undo(&mut self) -> Option<&S> {
        if self.can_undo() {
            self.cursor -= 1;
            Some(&self.entries[self.cursor])
        } else {
            None
        }
    }

    /// Step the cursor forward one entry and return the entry it now
    /// points at. Returns `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&S> {
        if self.can_redo() {
            self.cursor += 1;
            Some(&self.entries[self.cursor])
        } else {
            None
        }
    }

    /// Returns true if there is an older entry to step back to
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    /// Returns true if there is a newer entry to step forward to
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }

    /// The entry the cursor points at, if any
    pub fn current(&self) -> Option<&S> {
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_tracks_pushed_entry_across_eviction() {
        let mut history = BoundedHistory::with_capacity(3).unwrap();
        for label in ["a", "b", "c", "d", "e"] {
            history.push(label);
            assert_eq!(history.current(), Some(&label));
        }
        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_stops_at_oldest_retained_entry() {
        let mut history = BoundedHistory::with_capacity(2).unwrap();
        history.push(1);
        history.push(2);
        history.push(3); // evicts 1

        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), Some(&2));
    }

    #[test]
    fn shrinking_capacity_evicts_and_clamps_cursor() {
        let mut history = BoundedHistory::new();
        for i in 0..5 {
            history.push(i);
        }
        history.undo();
        history.undo(); // cursor on entry 2

        history.configure(2).unwrap();
        assert_eq!(history.len(), 2);
        // Entries 0..=2 evicted; cursor clamped to the oldest survivor.
        assert_eq!(history.current(), Some(&3));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            BoundedHistory::<u8>::with_capacity(0).unwrap_err(),
            HistoryError::InvalidCapacity(0)
        );

        let mut history = BoundedHistory::<u8>::new();
        history.push(1);
        assert!(history.configure(0).is_err());
        // Failed configuration leaves the history untouched.
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn empty_history_is_inert() {
        let mut history = BoundedHistory::<u8>::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), None);
    }
}
