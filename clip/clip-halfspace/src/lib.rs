//! Half-space mesh clipping against an axis-aligned cutting plane.
//!
//! This crate derives a canonical cutting plane from a mesh's axis-aligned
//! bounding box and partitions the mesh by that plane, retaining only
//! geometry fully on the closed positive side.
//!
//! # Features
//!
//! - **Bounds analysis**: Bounding box, characteristic length, and cutting
//!   plane derivation in one pass
//! - **Conservative clipping**: Triangles straddling the plane are discarded
//!   whole; no re-tessellation is performed
//! - **Graceful degradation**: When no triangle survives, the retained
//!   vertices are returned as a bare point set
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no rendering dependencies. It can be used in
//! CLI tools, web applications (WASM), and servers.
//!
//! # Example
//!
//! ```
//! use clip_types::unit_cube;
//! use clip_halfspace::{analyze_bounds, clip_mesh};
//!
//! let cube = unit_cube();
//! let analysis = analyze_bounds(&cube)?;
//!
//! // The plane bisects the cube along X, so half the triangles survive
//! let output = clip_mesh(&cube, &analysis.plane)?;
//! assert!(output.stats.vertices_kept <= output.stats.vertices_in);
//! # Ok::<(), clip_halfspace::ClipError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analysis;
mod clipper;
mod error;
mod plane;
mod result;

// Re-export main types and functions
pub use analysis::{analyze_bounds, BoundsAnalysis, VOXELS_ACROSS_MAX_EXTENT};
pub use clipper::clip_mesh;
pub use error::{ClipError, ClipResult};
pub use plane::ClipPlane;
pub use result::{ClipOutput, ClipStats, ClippedGeometry};
