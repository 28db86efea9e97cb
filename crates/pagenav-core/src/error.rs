//! Error types for pagination state construction.

use thiserror::Error;

/// Configuration errors raised while building a [`PaginationState`].
///
/// These are surfaced before any navigation item is produced.
///
/// [`PaginationState`]: crate::PaginationState
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The individual page window must hold at least one page.
    #[error("Configuration error: individual pages displayed count must be at least 1")]
    ZeroWindowWidth,

    /// Page size must be at least one record.
    #[error("Configuration error: page size must be at least 1")]
    ZeroPageSize,

    /// The current page lies outside `[0, total_pages)`.
    #[error("Configuration error: page index {page_index} is out of range for {total_pages} pages")]
    PageIndexOutOfRange {
        /// Requested zero-based page index.
        page_index: usize,
        /// Total number of pages.
        total_pages: usize,
    },

    /// Exactly one of `total_pages` / `total_records` is zero.
    #[error(
        "Configuration error: total pages ({total_pages}) and total records ({total_records}) must both be zero or both be non-zero"
    )]
    InconsistentTotals {
        /// Total number of pages.
        total_pages: usize,
        /// Total number of records.
        total_records: u64,
    },
}

impl Error {
    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ZeroWindowWidth
                | Self::ZeroPageSize
                | Self::PageIndexOutOfRange { .. }
                | Self::InconsistentTotals { .. }
        )
    }
}

/// Result type alias using the core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
