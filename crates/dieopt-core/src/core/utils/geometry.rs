use crate::core::models::wafer::Wafer;
use nalgebra::{Point2, Vector2};

/// Relative slack on squared radii; absorbs rounding at exact tangency only.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-9;

pub fn usable_radius(wafer: &Wafer) -> f64 {
    0.5 * wafer.diameter - wafer.edge_exclusion
}

/// Corner offsets of an axis-aligned rectangle centred at the origin, ordered
/// bottom-left, bottom-right, top-right, top-left.
pub fn local_corners(width: f64, height: f64) -> [Vector2<f64>; 4] {
    let hw = 0.5 * width;
    let hh = 0.5 * height;
    [
        Vector2::new(-hw, -hh),
        Vector2::new(hw, -hh),
        Vector2::new(hw, hh),
        Vector2::new(-hw, hh),
    ]
}

/// Compares squared distances, so only `|radius|` matters.
#[inline]
pub fn is_within_circle(point: &Point2<f64>, radius: f64, tol: f64) -> bool {
    point.coords.norm_squared() <= radius * radius * (1.0 + tol)
}

pub fn within_circle(points: &[Point2<f64>], radius: f64, tol: f64) -> Vec<bool> {
    points
        .iter()
        .map(|p| is_within_circle(p, radius, tol))
        .collect()
}
