//! Replacement policy implementations.
//!
//! Three policies share one contract, [`ReplacementPolicy`], so the
//! simulation driver stays policy-agnostic:
//! - [`FifoPolicy`] - evict the page resident the longest
//! - [`LruPolicy`] - evict the page unused the longest
//! - [`OptPolicy`] - evict the page whose next use is furthest away
//!   (clairvoyant; the theoretical lower bound on faults)

mod fifo;
mod frame_set;
mod lru;
mod opt;

use std::fmt;

use crate::common::{Error, PageId, Result};

pub use fifo::FifoPolicy;
pub use frame_set::FrameSet;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

/// The common contract every replacement policy implements.
///
/// A policy instance is created with a fixed capacity, an empty frame set
/// and a zero fault counter, then mutated by successive [`access`] calls.
/// It holds no external resources, so there is no teardown.
///
/// [`access`]: ReplacementPolicy::access
pub trait ReplacementPolicy {
    /// Record one page access.
    ///
    /// `lookahead` is the remainder of the reference string strictly after
    /// this access. Only OPT reads it; FIFO and LRU ignore it, but sharing
    /// the signature keeps the driver oblivious to which policy it runs.
    ///
    /// If `page` is already resident this is a hit: no fault is counted
    /// (LRU still refreshes recency). Otherwise the fault counter bumps by
    /// one, a victim is evicted if the frame set is at capacity, and
    /// `page` is admitted (capacity zero admits nothing).
    fn access(&mut self, page: PageId, lookahead: &[PageId]);

    /// Cumulative number of page faults so far. Non-mutating, idempotent.
    fn fault_count(&self) -> u64;

    /// The currently resident pages.
    fn resident(&self) -> &FrameSet;
}

/// Selects which replacement policy a simulation run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Optimal (clairvoyant, full lookahead).
    Opt,
}

impl PolicyKind {
    /// All policies, in the order experiments conventionally report them.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Opt];

    /// Build a fresh policy instance with the given frame capacity.
    ///
    /// Fails with [`Error::NegativeCapacity`] before any state is created
    /// if `capacity` is below zero.
    pub fn build(self, capacity: i64) -> Result<Box<dyn ReplacementPolicy>> {
        Ok(match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(capacity)?),
            PolicyKind::Lru => Box::new(LruPolicy::new(capacity)?),
            PolicyKind::Opt => Box::new(OptPolicy::new(capacity)?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fifo => write!(f, "FIFO"),
            PolicyKind::Lru => write!(f, "LRU"),
            PolicyKind::Opt => write!(f, "OPT"),
        }
    }
}

/// Validate a caller-supplied capacity.
///
/// Capacity arrives as `i64` at the API boundary so a negative value is
/// representable and rejected here, rather than silently wrapping.
pub(crate) fn checked_capacity(capacity: i64) -> Result<usize> {
    if capacity < 0 {
        return Err(Error::NegativeCapacity(capacity));
    }
    Ok(capacity as usize)
}
