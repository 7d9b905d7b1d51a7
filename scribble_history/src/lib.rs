// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scribble History: a bounded stack of undo snapshots.
//!
//! [`History`] behaves as a stack (push before a destructive action, pop on
//! undo) backed by a capacity-bounded ring: when a push would exceed the
//! capacity, the *oldest* entry is evicted first. The net effect is that the
//! history always holds at most the N most recent states, in push order.
//!
//! The container is generic over the snapshot type; the drawing surface
//! stores full-resolution raster snapshots in it with a capacity of 20.
//!
//! ```
//! use scribble_history::History;
//!
//! let mut h: History<u32> = History::new(3);
//! for n in 0..5 {
//!     h.push(n);
//! }
//! assert_eq!(h.len(), 3);
//! assert_eq!(h.pop(), Some(4));
//! assert_eq!(h.pop(), Some(3));
//! assert_eq!(h.pop(), Some(2));
//! assert_eq!(h.pop(), None);
//! ```

use std::collections::VecDeque;

/// A capacity-bounded LIFO history with FIFO eviction.
#[derive(Clone, Debug)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is permitted and yields a history on which every
    /// push is immediately discarded.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The maximum number of entries retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently held. Always `<= capacity`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a [`History::pop`] would yield an entry.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Appends an entry, evicting the oldest one if at capacity.
    pub fn push(&mut self, entry: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Empties the history unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over retained entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
