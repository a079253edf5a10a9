//! Tapered leaf silhouette.
//!
//! The leaf is built along the straight segment from `base` to the tip at
//! `length` pixels in direction `angle_deg` (counter-clockwise from +x, with
//! screen y pointing down). Each of the `num_points + 1` samples is offset
//! perpendicular to the segment by
//!
//! ```text
//! width(t) = length * 0.30 * sin(πt) * (1 - 0.25t)
//! ```
//!
//! which is zero at both ends and fullest a little before the middle.

use crate::draw::Point;
use std::f64::consts::PI;

/// Peak half-width as a fraction of the leaf length, before the taper
const WIDTH_RATIO: f64 = 0.30;

/// How much narrower the tip half is than the base half
const TIP_TAPER: f64 = 0.25;

/// Half-width of the leaf at parameter `t` in `[0, 1]`
pub fn leaf_half_width(length: f64, t: f64) -> f64 {
    length * WIDTH_RATIO * (t * PI).sin() * (1.0 - TIP_TAPER * t)
}

/// The tip of a leaf growing from `base`
pub fn leaf_tip(base: Point, length: f64, angle_deg: f64) -> Point {
    let angle = angle_deg.to_radians();
    Point::new(
        base.x + length * angle.cos(),
        base.y - length * angle.sin(),
    )
}

/// Build the closed leaf outline
///
/// Returns `2 * (num_points + 1)` points: the forward pass along one side,
/// then the return pass along the other. Because the width is zero at the
/// base, the first and last points coincide.
pub fn leaf_polygon(base: Point, length: f64, angle_deg: f64, num_points: usize) -> Vec<Point> {
    let angle = angle_deg.to_radians();
    let tip = leaf_tip(base, length, angle_deg);
    let (perp_x, perp_y) = (-angle.sin(), -angle.cos());

    let sample = |i: usize, side: f64| {
        let t = if num_points == 0 { 0.0 } else { i as f64 / num_points as f64 };
        let cx = base.x + t * (tip.x - base.x);
        let cy = base.y + t * (tip.y - base.y);
        let width = leaf_half_width(length, t) * side;
        Point::new(cx + width * perp_x, cy + width * perp_y)
    };

    let forward = (0..=num_points).map(|i| sample(i, 1.0));
    let back = (0..=num_points).rev().map(|i| sample(i, -1.0));
    forward.chain(back).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_polygon_length_and_closure() {
        let base = Point::new(527.0, 332.0);
        for n in [1, 2, 10, 80] {
            let points = leaf_polygon(base, 200.0, 52.0, n);
            assert_eq!(points.len(), 2 * (n + 1));
            assert!(close(points[0], base));
            assert!(close(points[points.len() - 1], points[0]));
        }
    }

    #[test]
    fn test_tip_is_shared_by_both_passes() {
        let base = Point::new(527.0, 332.0);
        let n = 80;
        let points = leaf_polygon(base, 200.0, 52.0, n);
        let tip = leaf_tip(base, 200.0, 52.0);

        // sin(π) is not exactly zero, so the tip points are only nearly equal
        assert!((points[n].x - tip.x).abs() < 1e-6);
        assert!((points[n + 1].y - tip.y).abs() < 1e-6);
    }

    #[test]
    fn test_tip_direction() {
        // 90 degrees points straight up on screen
        let tip = leaf_tip(Point::new(10.0, 100.0), 50.0, 90.0);
        assert!((tip.x - 10.0).abs() < 1e-9);
        assert!((tip.y - 50.0).abs() < 1e-9);

        let tip = leaf_tip(Point::new(10.0, 100.0), 50.0, 0.0);
        assert!(close(tip, Point::new(60.0, 100.0)));
    }

    #[test]
    fn test_sides_are_mirrored() {
        let base = Point::new(0.0, 0.0);
        let n = 20;
        let points = leaf_polygon(base, 100.0, 0.0, n);

        // Horizontal leaf: forward pass above the axis, return pass below
        for i in 1..n {
            let upper = points[i];
            let lower = points[2 * n + 1 - i];
            assert!(upper.y < 0.0);
            assert!((upper.x - lower.x).abs() < EPS);
            assert!((upper.y + lower.y).abs() < EPS);
        }
    }

    #[test]
    fn test_half_width_profile() {
        assert_eq!(leaf_half_width(200.0, 0.0), 0.0);
        assert!(leaf_half_width(200.0, 1.0).abs() < 1e-9);

        // Fuller before the midpoint than after it
        assert!(leaf_half_width(200.0, 0.4) > leaf_half_width(200.0, 0.6));
        assert!(leaf_half_width(200.0, 0.45) < 200.0 * WIDTH_RATIO);
    }
}
