//! Coordinate axis selection.

use std::fmt;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
///
/// Used to select a coordinate when deriving a clipping plane, locating
/// extremal points, or mapping a coordinate to a color ramp.
///
/// # Example
///
/// ```
/// use clip_types::{Axis, Point3};
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.component(&p), 2.0);
/// assert_eq!(Axis::Z.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All three axes in canonical order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The numeric index of this axis (X = 0, Y = 1, Z = 2).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// The coordinate of `point` along this axis.
    #[inline]
    #[must_use]
    pub fn component(self, point: &Point3<f64>) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}
