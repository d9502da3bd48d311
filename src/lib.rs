//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         pagesim                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────┐   │
//! │  │          Simulation Driver (sim/)                  │   │
//! │  │     run(policy, reference, capacity) → faults      │   │
//! │  └───────────────────────────────────────────────────┘   │
//! │                            ↓                              │
//! │  ┌───────────────────────────────────────────────────┐   │
//! │  │     Replacement Policies (policy/)  [Swappable]   │   │
//! │  │   ┌───────────────────────────────────────────┐   │   │
//! │  │   │         FIFO  |  LRU  |  OPT              │   │   │
//! │  │   └───────────────────────────────────────────┘   │   │
//! │  │            FrameSet (resident pages)               │   │
//! │  └───────────────────────────────────────────────────┘   │
//! │                            ↑                              │
//! │  ┌───────────────────────────────────────────────────┐   │
//! │  │          Workload Synthesis (workload/)            │   │
//! │  │      seeded random reference strings               │   │
//! │  └───────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`policy`] - The replacement policies and the frame-set they manage
//! - [`sim`] - The driver that folds a reference string through a policy
//! - [`workload`] - Random reference-string generation
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, PageId, PolicyKind};
//!
//! let reference: Vec<PageId> = [7u32, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]
//!     .iter()
//!     .map(|&n| PageId::new(n))
//!     .collect();
//!
//! let result = compare(&reference, 3).unwrap();
//! assert_eq!((result.fifo, result.lru, result.opt), (15, 12, 9));
//! ```

pub mod common;
pub mod policy;
pub mod sim;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};
pub use policy::{FifoPolicy, FrameSet, LruPolicy, OptPolicy, PolicyKind, ReplacementPolicy};
pub use sim::{compare, run, FaultComparison};
