//! Height-gradient colorization of a point cloud.

use clip_types::{Axis, Color, PointCloud};
use tracing::debug;

use crate::error::{CloudError, CloudResult};

/// Colorize a cloud by its coordinate range along one axis.
///
/// Scans the cloud for the minimum and maximum coordinate along `axis`,
/// then applies the same ramp as [`colorize_in_range`].
///
/// # Errors
///
/// Returns [`CloudError::EmptyCloud`] if the cloud has no points.
///
/// # Example
///
/// ```
/// use clip_types::{Axis, Point3, PointCloud};
/// use clip_cloud::colorize_by_axis;
///
/// let cloud = PointCloud::from_positions(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 4.0),
/// ]);
/// let colored = colorize_by_axis(&cloud, Axis::Z)?;
///
/// // Lowest point is pure blue, highest is pure red
/// assert_eq!(colored.colors()[0].channels(), [0.0, 0.0, 1.0]);
/// assert_eq!(colored.colors()[1].channels(), [1.0, 0.0, 0.0]);
/// # Ok::<(), clip_cloud::CloudError>(())
/// ```
pub fn colorize_by_axis(cloud: &PointCloud, axis: Axis) -> CloudResult<PointCloud> {
    let positions = cloud.positions();
    let first = positions.first().ok_or(CloudError::EmptyCloud)?;

    let mut min_v = axis.component(first);
    let mut max_v = min_v;
    for position in &positions[1..] {
        let value = axis.component(position);
        min_v = min_v.min(value);
        max_v = max_v.max(value);
    }

    colorize_in_range(cloud, axis, min_v, max_v)
}

/// Colorize a cloud over a known coordinate range.
///
/// Use this form when the range is already available from a bounding-box
/// analysis; it skips the dedicated min/max scan of
/// [`colorize_by_axis`].
///
/// Each point's coordinate is normalized to `t = (v - min_v) / (max_v -
/// min_v)` and colored `(t, 0, 1 - t)`: channel 0 rises and channel 2
/// falls linearly, channel 1 is always zero. A degenerate range (`max_v <=
/// min_v`) yields `t = 0` for every point, producing a uniform `(0, 0, 1)`
/// cloud rather than a division error. Coordinates outside the supplied
/// range are clamped into `[0, 1]`.
///
/// The input cloud is never mutated; the result carries the same positions
/// in the same order with fresh colors, and is a pure function of its
/// inputs.
///
/// # Errors
///
/// Returns [`CloudError::EmptyCloud`] if the cloud has no points.
pub fn colorize_in_range(
    cloud: &PointCloud,
    axis: Axis,
    min_v: f64,
    max_v: f64,
) -> CloudResult<PointCloud> {
    if cloud.is_empty() {
        return Err(CloudError::EmptyCloud);
    }

    let range = max_v - min_v;
    let degenerate = range <= 0.0;

    debug!(%axis, min = min_v, max = max_v, degenerate, "Colorizing cloud");

    Ok(PointCloud::from_positions_with(
        cloud.positions().to_vec(),
        |position| {
            let t = if degenerate {
                0.0
            } else {
                (axis.component(position) - min_v) / range
            };
            Color::new(t, 0.0, 1.0 - t)
        },
    ))
}
