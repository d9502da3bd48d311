//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Workload-synthesis constants
//! - Error types
//! - The page identifier type

pub mod config;
pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;
