//! Simulation driver: runs a policy over a reference string.

use std::fmt;

use crate::common::{PageId, Result};
use crate::policy::PolicyKind;

/// Run one policy over a reference string and return its fault count.
///
/// Builds a fresh policy instance, feeds it every access along with the
/// lookahead slice (empty at the final access; only OPT reads it), and
/// returns the cumulative fault count. This is a pure function of its
/// inputs: identical arguments always yield the identical count.
///
/// # Errors
/// [`Error::NegativeCapacity`] if `capacity` is below zero; no partial
/// result is produced.
///
/// [`Error::NegativeCapacity`]: crate::Error::NegativeCapacity
///
/// # Example
/// ```
/// use pagesim::{run, PageId, PolicyKind};
///
/// let reference: Vec<PageId> = [1u32, 2, 3, 1, 4].iter().map(|&n| PageId::new(n)).collect();
/// let faults = run(PolicyKind::Lru, &reference, 3).unwrap();
/// assert_eq!(faults, 4);
/// ```
pub fn run(kind: PolicyKind, reference: &[PageId], capacity: i64) -> Result<u64> {
    let mut policy = kind.build(capacity)?;
    for (i, &page) in reference.iter().enumerate() {
        policy.access(page, &reference[i + 1..]);
    }
    Ok(policy.fault_count())
}

/// Fault counts of all three policies over the same inputs.
///
/// Produced by [`compare`]; OPT is the lower bound the other two are
/// measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultComparison {
    pub fifo: u64,
    pub lru: u64,
    pub opt: u64,
}

impl fmt::Display for FaultComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FIFO: {} faults, LRU: {} faults, OPT: {} faults",
            self.fifo, self.lru, self.opt
        )
    }
}

/// Run all three policies over the same reference string and capacity.
///
/// Each policy gets its own fresh instance; nothing is shared between the
/// three runs.
pub fn compare(reference: &[PageId], capacity: i64) -> Result<FaultComparison> {
    Ok(FaultComparison {
        fifo: run(PolicyKind::Fifo, reference, capacity)?,
        lru: run(PolicyKind::Lru, reference, capacity)?,
        opt: run(PolicyKind::Opt, reference, capacity)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn pids(ns: &[u32]) -> Vec<PageId> {
        ns.iter().map(|&n| PageId::new(n)).collect()
    }

    #[test]
    fn test_run_counts_distinct_pages_when_capacity_suffices() {
        let reference = pids(&[1, 2, 3, 1, 2, 3, 1]);
        for kind in PolicyKind::ALL {
            assert_eq!(run(kind, &reference, 3).unwrap(), 3, "{kind}");
        }
    }

    #[test]
    fn test_run_empty_reference_has_no_faults() {
        for kind in PolicyKind::ALL {
            assert_eq!(run(kind, &[], 3).unwrap(), 0);
        }
    }

    #[test]
    fn test_run_rejects_negative_capacity() {
        let reference = pids(&[1, 2]);
        assert_eq!(
            run(PolicyKind::Fifo, &reference, -1),
            Err(Error::NegativeCapacity(-1))
        );
    }

    #[test]
    fn test_compare_textbook_reference_string() {
        let reference = pids(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
        let result = compare(&reference, 3).unwrap();
        assert_eq!(
            result,
            FaultComparison {
                fifo: 15,
                lru: 12,
                opt: 9
            }
        );
    }

    #[test]
    fn test_comparison_display() {
        let result = FaultComparison {
            fifo: 15,
            lru: 12,
            opt: 9,
        };
        assert_eq!(
            format!("{}", result),
            "FIFO: 15 faults, LRU: 12 faults, OPT: 9 faults"
        );
    }
}
