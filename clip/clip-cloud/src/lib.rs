//! Point-cloud extrema location and height-gradient colorization.
//!
//! This crate analyzes a sampled point cloud independently of any mesh
//! connectivity:
//!
//! - **Extrema location**: the six points achieving the minimum and maximum
//!   coordinate along each axis, found in one fused linear pass
//! - **Gradient colorization**: a deterministic two-channel color ramp over
//!   one coordinate axis, producing a new colored cloud
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no rendering dependencies. It can be used in
//! CLI tools, web applications (WASM), and servers.
//!
//! # Example
//!
//! ```
//! use clip_types::{Axis, Point3, PointCloud};
//! use clip_cloud::{colorize_by_axis, locate_extrema};
//!
//! let cloud = PointCloud::from_positions(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 2.0, 3.0),
//! ]);
//!
//! let extrema = locate_extrema(&cloud)?;
//! assert_eq!(extrema.len(), 6);
//!
//! let colored = colorize_by_axis(&cloud, Axis::Z)?;
//! assert!(colored.has_colors());
//! # Ok::<(), clip_cloud::CloudError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod extrema;
mod gradient;

// Re-export main types and functions
pub use error::{CloudError, CloudResult};
pub use extrema::{locate_extrema, Direction, Extremum, EXTREMA_PER_CLOUD};
pub use gradient::{colorize_by_axis, colorize_in_range};
