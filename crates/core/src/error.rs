//! Error types for block planning.

use thiserror::Error;

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating input or running a plan.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid product dimensions or attributes.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Invalid auxiliary part definition.
    #[error("Invalid part: {0}")]
    InvalidPart(String),

    /// The row partition search would exceed the configured candidate cap.
    #[error("Partition search space too large: {candidates} candidates (limit {limit})")]
    SearchSpaceExceeded {
        /// Number of partitions the search would have to visit.
        candidates: u64,
        /// Configured cap on that number.
        limit: u64,
    },
}
