//! Parameters controlling a pipeline run.

use clip_types::Axis;

/// Default ratio of marker sphere radius to characteristic length.
pub const DEFAULT_MARKER_RADIUS_RATIO: f64 = 0.02;

/// Default icosphere subdivision level for extremum markers.
pub const DEFAULT_MARKER_SUBDIVISIONS: u32 = 2;

/// Configuration for [`run_pipeline`](crate::run_pipeline).
///
/// # Example
///
/// ```
/// use clip_pipeline::PipelineParams;
/// use clip_types::Axis;
///
/// let params = PipelineParams::default()
///     .with_gradient_axis(Axis::Y)
///     .with_marker_subdivisions(3);
/// assert_eq!(params.gradient_axis, Axis::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineParams {
    /// Axis along which the gradient colorization runs.
    pub gradient_axis: Axis,

    /// Marker sphere radius as a fraction of the characteristic length.
    pub marker_radius_ratio: f64,

    /// Icosphere subdivision level for marker spheres.
    ///
    /// Level 0 is a 20-face icosahedron; each level quadruples the face
    /// count. Level 2 (320 faces) is smooth enough for small markers.
    pub marker_subdivisions: u32,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            gradient_axis: Axis::Z,
            marker_radius_ratio: DEFAULT_MARKER_RADIUS_RATIO,
            marker_subdivisions: DEFAULT_MARKER_SUBDIVISIONS,
        }
    }
}

impl PipelineParams {
    /// Set the gradient colorization axis.
    #[must_use]
    pub const fn with_gradient_axis(mut self, axis: Axis) -> Self {
        self.gradient_axis = axis;
        self
    }

    /// Set the marker radius ratio.
    #[must_use]
    pub const fn with_marker_radius_ratio(mut self, ratio: f64) -> Self {
        self.marker_radius_ratio = ratio;
        self
    }

    /// Set the marker icosphere subdivision level.
    #[must_use]
    pub const fn with_marker_subdivisions(mut self, subdivisions: u32) -> Self {
        self.marker_subdivisions = subdivisions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let params = PipelineParams::default();
        assert_eq!(params.gradient_axis, Axis::Z);
        assert_eq!(params.marker_radius_ratio, DEFAULT_MARKER_RADIUS_RATIO);
        assert_eq!(params.marker_subdivisions, DEFAULT_MARKER_SUBDIVISIONS);
    }

    #[test]
    fn builders_override_fields() {
        let params = PipelineParams::default()
            .with_gradient_axis(Axis::X)
            .with_marker_radius_ratio(0.05)
            .with_marker_subdivisions(0);
        assert_eq!(params.gradient_axis, Axis::X);
        assert_eq!(params.marker_radius_ratio, 0.05);
        assert_eq!(params.marker_subdivisions, 0);
    }
}
