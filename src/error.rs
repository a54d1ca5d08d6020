//! Error types for mosaic generation

use thiserror::Error;

/// Errors that can occur during mosaic generation or queries
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MosaicError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// An internal invariant was broken; indicates a logic defect
    #[error("internal invariant violated: {0}")]
    Internal(String),
    /// Requested site ID does not exist
    #[error("site not found: {0}")]
    SiteNotFound(usize),
}

/// Result type alias for mosaic operations
pub type Result<T> = std::result::Result<T, MosaicError>;
