//! RGB colors with floating-point channels.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with each channel in `[0, 1]`.
///
/// Channels are stored as `f64` so color ramps computed from geometry stay
/// exact; conversion to 8-bit channels is left to the visualization sink.
///
/// # Example
///
/// ```
/// use clip_types::Color;
///
/// let c = Color::new(0.25, 0.0, 0.75);
/// assert_eq!(c.r, 0.25);
///
/// // Out-of-range channels are clamped
/// let clamped = Color::new(2.0, -1.0, 0.5);
/// assert_eq!(clamped.r, 1.0);
/// assert_eq!(clamped.g, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel in `[0, 1]`.
    pub r: f64,
    /// Green channel in `[0, 1]`.
    pub g: f64,
    /// Blue channel in `[0, 1]`.
    pub b: f64,
}

impl Color {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// White (1, 1, 1).
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Red (1, 0, 0).
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0 };

    /// Green (0, 1, 0).
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0 };

    /// Blue (0, 0, 1).
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0 };

    /// Neutral gray (0.7, 0.7, 0.7), the conventional display color for
    /// uncolored geometry.
    pub const GRAY: Self = Self { r: 0.7, g: 0.7, b: 0.7 };

    /// Create a color, clamping each channel to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// The channels as an `[r, g, b]` array.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_channels() {
        let c = Color::new(1.5, -0.5, 0.5);
        assert!((c.r - 1.0).abs() < f64::EPSILON);
        assert!(c.g.abs() < f64::EPSILON);
        assert!((c.b - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn constants() {
        assert_eq!(Color::RED.channels(), [1.0, 0.0, 0.0]);
        assert_eq!(Color::BLUE.channels(), [0.0, 0.0, 1.0]);
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn display_format() {
        let c = Color::new(0.25, 0.0, 0.75);
        assert_eq!(format!("{c}"), "(0.250, 0.000, 0.750)");
    }
}
