//! The set of resident pages, bounded by frame capacity.

use crate::common::PageId;

/// An ordered, capacity-bounded collection of resident pages.
///
/// Each policy owns one `FrameSet`, and each reads something different into
/// the ordering:
/// - **FIFO**: insertion order (front = resident longest)
/// - **LRU**: recency order (front = least recent, tail = most recent)
/// - **OPT**: arbitrary — OPT picks its victim by lookahead, not position,
///   but iteration order still decides the "never used again" tie-break,
///   so it must stay deterministic
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - a page is resident at most once (no duplicates)
///
/// A linear `Vec` scan is the right data structure here: frame counts in a
/// replacement simulation are tiny (single digits in the textbook cases),
/// so a HashSet sidecar for membership would cost more than it saves.
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages in policy-defined order.
    frames: Vec<PageId>,

    /// Fixed at construction; zero is legal (nothing is ever retained).
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The fixed frame capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently resident pages.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no pages are resident.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the set has no room left (always true at capacity zero).
    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    /// Whether `page` is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    /// Admit `page` at the tail if there is room and it is not already
    /// resident. Returns whether the page was admitted.
    ///
    /// At capacity zero this always refuses, which is exactly the
    /// "every access faults, nothing is retained" behavior.
    pub fn admit(&mut self, page: PageId) -> bool {
        if self.is_full() || self.contains(page) {
            return false;
        }
        self.frames.push(page);
        true
    }

    /// Remove and return the page at the front, if any.
    pub fn evict_front(&mut self) -> Option<PageId> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.frames.remove(0))
        }
    }

    /// Remove `page` wherever it sits, preserving the order of the rest.
    /// Returns whether the page was resident.
    pub fn evict(&mut self, page: PageId) -> bool {
        match self.frames.iter().position(|&p| p == page) {
            Some(idx) => {
                self.frames.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move a resident `page` to the tail (the "most recent" end).
    /// Returns whether the page was resident.
    pub fn touch(&mut self, page: PageId) -> bool {
        if self.evict(page) {
            self.frames.push(page);
            true
        } else {
            false
        }
    }

    /// Iterate resident pages front-to-tail.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().copied()
    }

    /// Resident pages as a slice, front-to-tail.
    pub fn as_slice(&self) -> &[PageId] {
        &self.frames
    }
}
