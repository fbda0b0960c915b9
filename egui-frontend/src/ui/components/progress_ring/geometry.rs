//! # Progress Ring Geometry
//!
//! This module computes the ring dimensions from a completion percentage and
//! the widget's outer size. The arc is modelled as a dashed circle: the full
//! circumference is the dash, and the offset hides the unfilled remainder.

use std::f32::consts::TAU;

/// Derived dimensions for one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Radius of the stroke centerline
    pub radius: f32,
    /// Full circumference at that radius
    pub circumference: f32,
    /// Hidden portion of the circumference. Zero when the ring is full,
    /// negative when the percentage runs past 100.
    pub dash_offset: f32,
}

impl RingGeometry {
    /// Compute ring dimensions for a completion percentage.
    ///
    /// The percentage is not clamped: overshooting goals report values above
    /// 100 and the offset goes negative, so callers can see (and render) the
    /// overshoot instead of having it silently capped.
    pub fn new(percentage: f32, size: f32, stroke_width: f32) -> Self {
        debug_assert!(percentage.is_finite());

        let radius = (size - stroke_width) / 2.0;
        let circumference = TAU * radius;
        let dash_offset = circumference - (percentage / 100.0) * circumference;

        Self {
            radius,
            circumference,
            dash_offset,
        }
    }

    /// Visible fraction of the circumference
    pub fn filled_fraction(&self) -> f32 {
        (self.circumference - self.dash_offset) / self.circumference
    }

    /// Angle swept by the visible arc, in radians from the top of the ring
    pub fn arc_sweep(&self) -> f32 {
        TAU * self.filled_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dimensions() {
        let geometry = RingGeometry::new(75.0, 120.0, 8.0);

        assert_eq!(geometry.radius, 56.0);
        assert!((geometry.circumference - 351.86).abs() < 0.01);
        assert!((geometry.dash_offset - 87.96).abs() < 0.01);
    }

    #[test]
    fn test_empty_and_full_rings() {
        let empty = RingGeometry::new(0.0, 120.0, 8.0);
        assert_eq!(empty.dash_offset, empty.circumference);
        assert_eq!(empty.arc_sweep(), 0.0);

        let full = RingGeometry::new(100.0, 120.0, 8.0);
        assert_eq!(full.dash_offset, 0.0);
        assert!((full.arc_sweep() - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let overshot = RingGeometry::new(150.0, 120.0, 8.0);

        assert!(overshot.dash_offset < 0.0);
        assert!((overshot.dash_offset + overshot.circumference / 2.0).abs() < 0.01);
        assert!(overshot.arc_sweep() > TAU);
    }

    #[test]
    fn test_same_inputs_give_identical_output() {
        let first = RingGeometry::new(42.5, 90.0, 6.0);
        let second = RingGeometry::new(42.5, 90.0, 6.0);

        assert_eq!(first, second);
    }

    #[test]
    fn test_quarter_sweep() {
        let geometry = RingGeometry::new(25.0, 120.0, 8.0);

        assert!((geometry.filled_fraction() - 0.25).abs() < 1e-6);
        assert!((geometry.arc_sweep() - TAU / 4.0).abs() < 1e-5);
    }
}
