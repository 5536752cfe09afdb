use crate::core::models::die::Die;
use crate::core::utils::geometry::{CONTAINMENT_TOLERANCE, is_within_circle, local_corners};
use nalgebra::{Point2, Vector2};

/// Keeps centres no farther than `radius - half_diagonal` from the wafer centre.
///
/// While that bound is positive every survivor is guaranteed to fit; the exact stage
/// still checks each one. Centres in the annulus between that bound
/// and `radius` are dropped here even when all their corners would fit; the exact
/// stage never sees them, so reported counts may under-approximate capacity there.
pub fn coarse_prune<I>(centers: I, radius: f64, half_diagonal: f64) -> Vec<Point2<f64>>
where
    I: IntoIterator<Item = Point2<f64>>,
{
    let inner_radius = radius - half_diagonal;
    centers
        .into_iter()
        .filter(|c| is_within_circle(c, inner_radius, CONTAINMENT_TOLERANCE))
        .collect()
}

#[inline]
pub fn corners_within(center: &Point2<f64>, corners: &[Vector2<f64>; 4], radius: f64) -> bool {
    corners
        .iter()
        .all(|corner| is_within_circle(&(center + corner), radius, CONTAINMENT_TOLERANCE))
}

/// Keeps the centres whose four die corners all lie inside `radius`, in input order.
pub fn exact_filter(centers: Vec<Point2<f64>>, die: &Die, radius: f64) -> Vec<Point2<f64>> {
    let corners = local_corners(die.width, die.height);
    centers
        .into_iter()
        .filter(|c| corners_within(c, &corners, radius))
        .collect()
}
