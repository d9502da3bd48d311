//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference string.
///
/// The simulator treats page numbers as opaque, comparable values: the
/// policies only ever ask "is this the same page?" and never interpret the
/// number itself. Using `u32` matches the `page_id_t` convention of
/// BusTub-style buffer pools and is plenty for any workload we synthesize.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
