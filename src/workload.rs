//! Synthetic workload generation.
//!
//! Experiments that go beyond the canned textbook strings need random
//! reference strings. The generator takes the RNG as an argument instead
//! of reaching for ambient global randomness, so a seeded
//! [`StdRng`](rand::rngs::StdRng) makes any run reproducible in tests.

use rand::Rng;

use crate::common::PageId;

/// Generate a random reference string.
///
/// Draws `length` page numbers uniformly from `0..page_count`.
///
/// # Panics
/// Panics if `page_count` is zero — an empty page alphabet has nothing to
/// draw from.
///
/// # Example
/// ```
/// use pagesim::workload::random_reference_string;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let reference = random_reference_string(&mut rng, 15, 10);
/// assert_eq!(reference.len(), 15);
/// ```
pub fn random_reference_string<R: Rng>(
    rng: &mut R,
    length: usize,
    page_count: u32,
) -> Vec<PageId> {
    assert!(page_count > 0, "page_count must be positive");
    (0..length)
        .map(|_| PageId::new(rng.gen_range(0..page_count)))
        .collect()
}
