//! Error types for pipeline orchestration.

use clip_cloud::CloudError;
use clip_halfspace::ClipError;
use thiserror::Error;

/// Errors that can occur while running the pipeline.
///
/// The pipeline fails fast: the first stage error aborts the run and is
/// propagated unchanged inside the corresponding variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The bounds-analysis or clipping stage failed.
    #[error("clipping stage failed: {0}")]
    Clip(#[from] ClipError),

    /// The extrema-location or colorization stage failed.
    #[error("cloud analysis stage failed: {0}")]
    Cloud(#[from] CloudError),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
