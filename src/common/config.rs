//! Configuration constants for pagesim.

/// Number of distinct pages a synthetic workload draws from by default.
///
/// Random reference strings pick page numbers in `0..DEFAULT_PAGE_COUNT`.
/// Ten pages is the classic textbook alphabet; it is small enough that a
/// handful of frames produces interesting eviction behavior.
pub const DEFAULT_PAGE_COUNT: u32 = 10;

/// Default length of a synthetic reference string.
pub const DEFAULT_REFERENCE_LENGTH: usize = 15;
