//! Core geometry types for half-space clipping and point-cloud analysis.
//!
//! This crate provides the foundational types shared by the clipping and
//! cloud-analysis crates:
//!
//! - [`Axis`] - A coordinate axis selector
//! - [`Color`] - An RGB color with floating-point channels in `[0, 1]`
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`PointCloud`] - Unconnected 3D positions with optional per-point colors
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no dependencies beyond `nalgebra`. It can be
//! used in CLI tools, web applications (WASM), and servers.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use clip_types::{Bounded, IndexedMesh, Point3};
//!
//! // Create a single triangle
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.bounds().is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod bounds;
mod cloud;
mod color;
mod mesh;
mod traits;

// Re-export core types
pub use axis::Axis;
pub use bounds::Aabb;
pub use cloud::PointCloud;
pub use color::Color;
pub use mesh::{unit_cube, IndexedMesh};
pub use traits::Bounded;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
