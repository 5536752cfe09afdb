use super::containment::{coarse_prune, exact_filter};
use super::grid::Lattice;
use crate::core::models::die::Die;
use crate::core::models::placement::PlacementResult;
use crate::core::models::wafer::Wafer;
use nalgebra::Vector2;
use tracing::trace;

/// Counts the dies that fit when the lattice origin is shifted by `(x_offset, y_offset)`.
///
/// Degenerate inputs (non-positive usable radius, zero-area die) yield an empty
/// result rather than an error.
pub fn evaluate(wafer: &Wafer, die: &Die, x_offset: f64, y_offset: f64) -> PlacementResult {
    let offset = Vector2::new(x_offset, y_offset);
    let radius = wafer.usable_radius();

    if !die.has_area() {
        trace!(width = die.width, height = die.height, "Die has no area; nothing to place.");
        return PlacementResult::empty(offset);
    }

    let lattice = Lattice::new(radius, die, offset);
    let candidates = coarse_prune(lattice.centers(), radius, die.half_diagonal());
    trace!(
        x_offset,
        y_offset,
        lattice_points = lattice.len(),
        after_prune = candidates.len(),
        "Coarse containment prune complete."
    );

    if candidates.is_empty() {
        return PlacementResult::empty(offset);
    }

    let positions = exact_filter(candidates, die, radius);
    trace!(x_offset, y_offset, dpw = positions.len(), "Exact containment check complete.");
    PlacementResult::new(offset, positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::{CONTAINMENT_TOLERANCE, is_within_circle, local_corners};
    use nalgebra::Point2;

    fn reference_wafer() -> Wafer {
        Wafer::new(50.8, 2.0)
    }

    fn reference_die() -> Die {
        Die::new(1.0, 1.0, 7.0)
    }

    fn assert_all_corners_inside(result: &PlacementResult, wafer: &Wafer, die: &Die) {
        let corners = local_corners(die.width, die.height);
        for center in &result.positions {
            for corner in &corners {
                assert!(
                    is_within_circle(&(center + corner), wafer.usable_radius(), CONTAINMENT_TOLERANCE),
                    "corner of die at {:?} lies outside the usable area",
                    center
                );
            }
        }
    }

    #[test]
    fn centred_grid_on_two_inch_wafer_places_25_dies() {
        let result = evaluate(&reference_wafer(), &reference_die(), 0.0, 0.0);
        assert_eq!(result.dpw, 25);
        assert_eq!(result.positions.len(), 25);
        assert_eq!(result.angle_deg, 0.0);
        assert_eq!(result.offset, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn positions_follow_lattice_enumeration_order() {
        let result = evaluate(&reference_wafer(), &reference_die(), 0.0, 0.0);
        assert_eq!(result.positions[0], Point2::new(-16.0, -16.0));
        assert_eq!(result.positions[1], Point2::new(-8.0, -16.0));
        assert_eq!(result.positions[4], Point2::new(16.0, -16.0));
        assert_eq!(result.positions[24], Point2::new(16.0, 16.0));
    }

    #[test]
    fn half_pitch_offsets_change_the_count() {
        let wafer = reference_wafer();
        let die = reference_die();
        assert_eq!(evaluate(&wafer, &die, 4.0, 0.0).dpw, 26);
        assert_eq!(evaluate(&wafer, &die, 0.0, 4.0).dpw, 26);
        assert_eq!(evaluate(&wafer, &die, 4.0, 4.0).dpw, 24);
    }

    #[test]
    fn offset_is_echoed_back_in_the_result() {
        let result = evaluate(&reference_wafer(), &reference_die(), 1.25, -0.5);
        assert_eq!(result.offset, Vector2::new(1.25, -0.5));
    }

    #[test]
    fn dpw_always_matches_number_of_positions() {
        let wafer = Wafer::new(200.0, 5.0);
        let die = Die::new(7.5, 12.25, 0.08);
        for (x, y) in [(0.0, 0.0), (3.79, 0.0), (0.0, 6.165), (3.79, 6.165), (1.0, 2.0)] {
            let result = evaluate(&wafer, &die, x, y);
            assert_eq!(result.dpw, result.positions.len());
        }
    }

    #[test]
    fn every_reported_die_lies_fully_inside_the_usable_area() {
        let cases = [
            (Wafer::new(50.8, 2.0), Die::new(2.0, 2.0, 7.0)),
            (Wafer::new(100.0, 3.0), Die::new(10.0, 5.0, 0.1)),
            (Wafer::new(300.0, 3.0), Die::new(10.0, 10.0, 0.1)),
            (Wafer::new(20.0, 0.0), Die::new(5.0, 5.0, 0.0)),
        ];
        for (wafer, die) in cases {
            for (x, y) in [(0.0, 0.0), (0.5 * die.pitch_x(), 0.5 * die.pitch_y())] {
                assert_all_corners_inside(&evaluate(&wafer, &die, x, y), &wafer, &die);
            }
        }
    }

    #[test]
    fn small_wafer_counts_match_hand_enumeration() {
        let wafer = Wafer::new(20.0, 0.0);
        let die = Die::new(5.0, 5.0, 0.0);

        let centred = evaluate(&wafer, &die, 0.0, 0.0);
        assert_eq!(
            centred.positions,
            vec![
                Point2::new(0.0, -5.0),
                Point2::new(-5.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 0.0),
                Point2::new(0.0, 5.0),
            ]
        );

        let shifted = evaluate(&wafer, &die, 2.5, 2.5);
        assert_eq!(
            shifted.positions,
            vec![
                Point2::new(-2.5, -2.5),
                Point2::new(2.5, -2.5),
                Point2::new(-2.5, 2.5),
                Point2::new(2.5, 2.5),
            ]
        );
    }

    #[test]
    fn die_larger_than_wafer_places_nothing() {
        let result = evaluate(&reference_wafer(), &Die::new(100.0, 100.0, 0.0), 0.0, 0.0);
        assert_eq!(result.dpw, 0);
        assert!(result.positions.is_empty());
    }

    #[test]
    fn die_exactly_filling_the_usable_circle_is_kept() {
        let cases = [
            (Wafer::new(9.2, 2.1), Die::new(3.0, 4.0, 0.0)),
            (Wafer::new(1.4, 0.2), Die::new(0.6, 0.8, 0.0)),
            (Wafer::new(16.4, 0.7), Die::new(9.0, 12.0, 0.0)),
        ];
        for (wafer, die) in cases {
            let result = evaluate(&wafer, &die, 0.0, 0.0);
            assert_eq!(result.dpw, 1, "wafer {:?}, die {:?}", wafer, die);
            assert_eq!(result.positions, vec![Point2::origin()]);
        }
    }

    #[test]
    fn non_positive_usable_radius_places_nothing() {
        let die = Die::new(1.0, 1.0, 0.0);
        for wafer in [Wafer::new(10.0, 6.0), Wafer::new(10.0, 5.0), Wafer::new(0.0, 0.0)] {
            for (x, y) in [(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.5, 0.5)] {
                assert_eq!(evaluate(&wafer, &die, x, y).dpw, 0);
            }
        }
    }

    #[test]
    fn zero_area_die_places_nothing() {
        let wafer = Wafer::new(100.0, 0.0);
        assert_eq!(evaluate(&wafer, &Die::new(0.0, 1.0, 1.0), 0.0, 0.0).dpw, 0);
        assert_eq!(evaluate(&wafer, &Die::new(0.0, 0.0, 0.0), 0.0, 0.0).dpw, 0);
    }

    #[test]
    fn growing_edge_exclusion_never_increases_dpw() {
        let die = Die::new(10.0, 5.0, 0.1);
        for (x, y) in [(0.0, 0.0), (5.05, 0.0), (5.05, 2.55)] {
            let mut previous = usize::MAX;
            for step in 0..40 {
                let wafer = Wafer::new(100.0, step as f64 * 0.5);
                let dpw = evaluate(&wafer, &die, x, y).dpw;
                assert!(dpw <= previous, "dpw grew at edge exclusion {}", step as f64 * 0.5);
                previous = dpw;
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let wafer = Wafer::new(150.0, 3.0);
        let die = Die::new(4.2, 6.9, 0.1);
        let first = evaluate(&wafer, &die, 2.15, 0.0);
        let second = evaluate(&wafer, &die, 2.15, 0.0);
        assert_eq!(first, second);
    }
}
