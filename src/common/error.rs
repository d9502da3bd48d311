//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulator is a total function over well-formed input: any page
/// identifier and any non-negative capacity produce a deterministic fault
/// count. The one thing a caller can get wrong is the configuration, so
/// that is the one error we surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested frame capacity was negative.
    ///
    /// Capacity zero is legal (every access faults, nothing is retained);
    /// anything below that is a caller bug and no policy instance is built.
    #[error("frame capacity cannot be negative (got {0})")]
    NegativeCapacity(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NegativeCapacity(-3);
        assert_eq!(
            format!("{}", err),
            "frame capacity cannot be negative (got -3)"
        );
    }

    #[test]
    fn test_result_type_alias() {
        // This function returns our Result type
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
