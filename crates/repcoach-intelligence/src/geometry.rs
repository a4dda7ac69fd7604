// ABOUTME: Joint angle computation from three 2D landmarks
// ABOUTME: Returns the unsigned interior angle at the vertex in degrees, 0 to 180
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use repcoach_core::constants::thresholds::COINCIDENT_EPSILON;
use repcoach_core::errors::FrameError;
use repcoach_core::models::Point2D;

/// Interior angle at `b` formed by rays `b→a` and `b→c`, in degrees.
///
/// Uses the difference of the two `atan2` bearings, folded into `[0, 180]`
/// so the result does not depend on the ordering of `a` and `c`.
///
/// # Errors
///
/// Returns `FrameError::GeometryDegenerate` when a coordinate is not finite
/// or when `a` or `c` coincides with the vertex `b`.
pub fn angle_at(a: Point2D, b: Point2D, c: Point2D) -> Result<f64, FrameError> {
    let finite = [a, b, c]
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite());
    if !finite || coincident(a, b) || coincident(c, b) {
        return Err(FrameError::GeometryDegenerate);
    }

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();
    let folded = if angle > 180.0 { 360.0 - angle } else { angle };
    Ok(folded.clamp(0.0, 180.0))
}

fn coincident(p: Point2D, q: Point2D) -> bool {
    (p.x - q.x).hypot(p.y - q.y) < COINCIDENT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_right_angle() {
        let angle = angle_at(
            Point2D::new(0.0, 1.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        )
        .unwrap();
        assert!((angle - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_straight_line_is_180() {
        let angle = angle_at(
            Point2D::new(-1.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
        )
        .unwrap();
        assert!((angle - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_reflex_bearing_difference_is_folded() {
        // Bearings of -170 and +170 degrees differ by 340; interior angle is 20
        let a = Point2D::new(170_f64.to_radians().cos(), 170_f64.to_radians().sin());
        let c = Point2D::new(
            (-170_f64).to_radians().cos(),
            (-170_f64).to_radians().sin(),
        );
        let angle = angle_at(a, Point2D::new(0.0, 0.0), c).unwrap();
        assert!((angle - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_vertex_is_degenerate() {
        let p = Point2D::new(0.3, 0.3);
        assert_eq!(
            angle_at(p, p, Point2D::new(1.0, 1.0)),
            Err(FrameError::GeometryDegenerate)
        );
        assert_eq!(
            angle_at(Point2D::new(f64::NAN, 0.0), p, Point2D::new(1.0, 1.0)),
            Err(FrameError::GeometryDegenerate)
        );
    }
}
