//! LRU (Least Recently Used) replacement policy.

use crate::common::{PageId, Result};
use crate::policy::{checked_capacity, FrameSet, ReplacementPolicy};

/// Evicts the page unused for the longest time.
///
/// The frame set doubles as the recency list: every access moves the page
/// to the tail, so the front is always the least-recently-used page and
/// eviction is just `evict_front`. No tie-break is needed — accesses
/// arrive in a total order, so recency is total too.
pub struct LruPolicy {
    /// Resident pages in recency order (front = least recent).
    frames: FrameSet,

    /// Accesses that missed.
    faults: u64,
}

impl LruPolicy {
    /// Create an LRU policy with the given frame capacity.
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(checked_capacity(capacity)?),
            faults: 0,
        })
    }
}

impl ReplacementPolicy for LruPolicy {
    fn access(&mut self, page: PageId, _lookahead: &[PageId]) {
        if self.frames.touch(page) {
            // Hit: touch already refreshed recency.
            return;
        }
        self.faults += 1;
        if self.frames.is_full() {
            self.frames.evict_front();
        }
        self.frames.admit(page);
    }

    fn fault_count(&self) -> u64 {
        self.faults
    }

    fn resident(&self) -> &FrameSet {
        &self.frames
    }
}
