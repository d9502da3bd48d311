//! OPT (optimal, clairvoyant) replacement policy.
//!
//! Belady's algorithm: evict the resident page whose next use lies
//! furthest in the future. It needs the full remainder of the reference
//! string on every access, so it is unrealizable in a real VM subsystem —
//! its value is as the lower bound the realizable policies are measured
//! against.

use crate::common::{PageId, Result};
use crate::policy::{checked_capacity, FrameSet, ReplacementPolicy};

/// Evicts the resident page used furthest in the future.
///
/// Victim selection on a fault at full capacity:
/// 1. A resident page that never appears in the lookahead wins
///    immediately; if several qualify, the first one in frame-set
///    iteration order is taken. This tie-break is deliberately pinned
///    down rather than left to container-iteration accident.
/// 2. Otherwise the page with the largest next-use index is taken; on
///    equal distances the earlier frame keeps the candidacy (distances
///    over distinct pages cannot actually tie, since each next-use index
///    names one page).
///
/// A page missing from the lookahead is the normal "not used again" path,
/// never an error — short lookaheads near the end of the string degrade
/// gracefully.
pub struct OptPolicy {
    /// Resident pages; order only matters for the tie-break above.
    frames: FrameSet,

    /// Accesses that missed.
    faults: u64,
}

impl OptPolicy {
    /// Create an OPT policy with the given frame capacity.
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(checked_capacity(capacity)?),
            faults: 0,
        })
    }

    /// Pick the victim for the current fault, per the rules above.
    ///
    /// Returns `None` only when nothing is resident (capacity zero).
    fn select_victim(&self, lookahead: &[PageId]) -> Option<PageId> {
        let mut victim = None;
        let mut furthest = 0usize;

        for resident in self.frames.iter() {
            match lookahead.iter().position(|&p| p == resident) {
                // Never used again: unambiguous victim, first in frame order wins.
                None => return Some(resident),
                Some(next_use) => {
                    if victim.is_none() || next_use > furthest {
                        furthest = next_use;
                        victim = Some(resident);
                    }
                }
            }
        }
        victim
    }
}

impl ReplacementPolicy for OptPolicy {
    fn access(&mut self, page: PageId, lookahead: &[PageId]) {
        if self.frames.contains(page) {
            // Hit. OPT keeps no recency state to refresh.
            return;
        }
        self.faults += 1;
        if self.frames.is_full() {
            if let Some(victim) = self.select_victim(lookahead) {
                self.frames.evict(victim);
            }
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
