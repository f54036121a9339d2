//! Extremal point location.

use std::fmt;

use clip_types::{Axis, Point3, PointCloud};
use tracing::debug;

use crate::error::{CloudError, CloudResult};

/// Number of extrema per cloud: one (axis, direction) pair for each of the
/// three axes.
pub const EXTREMA_PER_CLOUD: usize = 6;

/// Whether an extremum is the minimum or the maximum along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The smallest coordinate value.
    Min,
    /// The largest coordinate value.
    Max,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// A point achieving the extreme coordinate value along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// The axis being scanned.
    pub axis: Axis,
    /// Whether this is the minimum or maximum along that axis.
    pub direction: Direction,
    /// Index of the owning point in the cloud.
    pub index: usize,
    /// Position of the owning point.
    pub position: Point3<f64>,
}

/// Locate the six extremal points of a cloud.
///
/// For each axis and each direction, finds the point with the extremal
/// coordinate in a single fused pass over the cloud, tracking six running
/// `(value, index)` accumulators. Comparisons are strict, so ties resolve
/// to the **first occurrence** in iteration order.
///
/// The result is ordered `(X, min), (X, max), (Y, min), (Y, max),
/// (Z, min), (Z, max)`.
///
/// # Errors
///
/// Returns [`CloudError::EmptyCloud`] if the cloud has no points.
///
/// # Example
///
/// ```
/// use clip_types::{Axis, Point3, PointCloud};
/// use clip_cloud::{locate_extrema, Direction};
///
/// let cloud = PointCloud::from_positions(vec![
///     Point3::new(-1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ]);
///
/// let extrema = locate_extrema(&cloud)?;
/// assert_eq!(extrema[0].axis, Axis::X);
/// assert_eq!(extrema[0].direction, Direction::Min);
/// assert_eq!(extrema[0].index, 0);
/// assert_eq!(extrema[1].index, 1);
/// # Ok::<(), clip_cloud::CloudError>(())
/// ```
pub fn locate_extrema(cloud: &PointCloud) -> CloudResult<[Extremum; EXTREMA_PER_CLOUD]> {
    let positions = cloud.positions();
    let first = positions.first().ok_or(CloudError::EmptyCloud)?;

    // Six running accumulators, seeded from the first point.
    let mut min_value = [0.0_f64; 3];
    let mut max_value = [0.0_f64; 3];
    let mut min_index = [0_usize; 3];
    let mut max_index = [0_usize; 3];
    for axis in Axis::ALL {
        min_value[axis.index()] = axis.component(first);
        max_value[axis.index()] = axis.component(first);
    }

    for (index, position) in positions.iter().enumerate().skip(1) {
        for axis in Axis::ALL {
            let value = axis.component(position);
            let slot = axis.index();
            // Strict comparisons keep the first occurrence on ties.
            if value < min_value[slot] {
                min_value[slot] = value;
                min_index[slot] = index;
            }
            if value > max_value[slot] {
                max_value[slot] = value;
                max_index[slot] = index;
            }
        }
    }

    debug!(points = positions.len(), "Extrema located");

    let extremum = |axis: Axis, direction: Direction| {
        let index = match direction {
            Direction::Min => min_index[axis.index()],
            Direction::Max => max_index[axis.index()],
        };
        Extremum {
            axis,
            direction,
            index,
            position: positions[index],
        }
    };

    Ok([
        extremum(Axis::X, Direction::Min),
        extremum(Axis::X, Direction::Max),
        extremum(Axis::Y, Direction::Min),
        extremum(Axis::Y, Direction::Max),
        extremum(Axis::Z, Direction::Min),
        extremum(Axis::Z, Direction::Max),
    ])
}
