//! Error types for point-cloud analysis.

use thiserror::Error;

/// Result type alias for point-cloud analysis.
pub type CloudResult<T> = Result<T, CloudError>;

/// Errors that can occur during point-cloud analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloudError {
    /// The point cloud has no points; extrema and color ramps are
    /// undefined for empty input.
    #[error("point cloud is empty")]
    EmptyCloud,
}
