//! End-to-end mesh clipping and cloud analysis pipeline.
//!
//! This crate assembles the lower-level stages into a single run:
//! bounds analysis, half-space clipping, extrema location, gradient
//! colorization, and extremum marker generation.
//!
//! # Features
//!
//! - **Orchestration**: [`run_pipeline`] chains the stages fail-fast
//! - **Markers**: colored icospheres marking the six cloud extrema
//! - **Reporting**: [`PipelineReport`] aggregates counts and derived
//!   quantities for downstream display
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no rendering dependencies. It can be
//! used in CLI tools, web applications (WASM), and servers.
//!
//! # Example
//!
//! ```
//! use clip_pipeline::{run_pipeline, PipelineParams};
//! use clip_types::{unit_cube, PointCloud};
//!
//! let cube = unit_cube();
//! let cloud = PointCloud::from_mesh(&cube);
//!
//! let output = run_pipeline(&cube, &cloud, &PipelineParams::default())?;
//! println!("{}", output.report);
//! # Ok::<(), clip_pipeline::PipelineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod markers;
mod params;
mod pipeline;
mod report;

pub use error::{PipelineError, PipelineResult};
pub use markers::{extremum_markers, marker_color, unit_icosphere, Marker};
pub use params::{
    PipelineParams, DEFAULT_MARKER_RADIUS_RATIO, DEFAULT_MARKER_SUBDIVISIONS,
};
pub use pipeline::{run_pipeline, PipelineOutput};
pub use report::PipelineReport;
