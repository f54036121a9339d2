//! Error types for clipping operations.

use thiserror::Error;

/// Result type alias for clipping operations.
pub type ClipResult<T> = Result<T, ClipError>;

/// Errors that can occur during bounds analysis and clipping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipError {
    /// Input mesh has no vertices; a bounding box and a cutting plane are
    /// undefined for empty geometry.
    #[error("input mesh is empty")]
    EmptyMesh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClipError::EmptyMesh;
        assert_eq!(format!("{err}"), "input mesh is empty");
    }
}
