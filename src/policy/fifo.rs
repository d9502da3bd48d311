//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{PageId, Result};
use crate::policy::{checked_capacity, FrameSet, ReplacementPolicy};

/// Evicts the page that has been resident the longest.
///
/// Pure insertion order: re-accessing a resident page does not move it, so
/// a page's eviction slot is decided the moment it is admitted. No
/// tie-break is needed — insertion order is total.
pub struct FifoPolicy {
    /// Resident pages in insertion order (front = oldest).
    frames: FrameSet,

    /// Accesses that missed.
    faults: u64,
}

impl FifoPolicy {
    /// Create a FIFO policy with the given frame capacity.
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(checked_capacity(capacity)?),
            faults: 0,
        })
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn access(&mut self, page: PageId, _lookahead: &[PageId]) {
        if self.frames.contains(page) {
            // Hit. FIFO deliberately does not reorder on re-access.
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
