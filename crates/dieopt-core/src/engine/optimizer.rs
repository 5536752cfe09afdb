use super::counter::evaluate;
use crate::core::models::die::Die;
use crate::core::models::placement::{Axis, PlacementResult, ThreeRunSummary};
use crate::core::models::wafer::Wafer;
use nalgebra::Vector2;
use tracing::{debug, info, instrument};

/// The four lattice translations evaluated by [`optimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateOffsets {
    pub centred: Vector2<f64>,
    pub half_x: Vector2<f64>,
    pub half_y: Vector2<f64>,
    pub half_xy: Vector2<f64>,
}

impl CandidateOffsets {
    pub fn for_die(die: &Die) -> Self {
        let hx = 0.5 * die.pitch_x();
        let hy = 0.5 * die.pitch_y();
        Self {
            centred: Vector2::new(0.0, 0.0),
            half_x: Vector2::new(hx, 0.0),
            half_y: Vector2::new(0.0, hy),
            half_xy: Vector2::new(hx, hy),
        }
    }
}

struct CandidateRuns {
    centred: PlacementResult,
    half_x: PlacementResult,
    half_y: PlacementResult,
    half_xy: PlacementResult,
}

#[cfg(not(feature = "parallel"))]
fn evaluate_candidates(wafer: &Wafer, die: &Die, offsets: &CandidateOffsets) -> CandidateRuns {
    let run = |o: &Vector2<f64>| evaluate(wafer, die, o.x, o.y);
    CandidateRuns {
        centred: run(&offsets.centred),
        half_x: run(&offsets.half_x),
        half_y: run(&offsets.half_y),
        half_xy: run(&offsets.half_xy),
    }
}

#[cfg(feature = "parallel")]
fn evaluate_candidates(wafer: &Wafer, die: &Die, offsets: &CandidateOffsets) -> CandidateRuns {
    let run = |o: &Vector2<f64>| evaluate(wafer, die, o.x, o.y);
    let ((centred, half_x), (half_y, half_xy)) = rayon::join(
        || rayon::join(|| run(&offsets.centred), || run(&offsets.half_x)),
        || rayon::join(|| run(&offsets.half_y), || run(&offsets.half_xy)),
    );
    CandidateRuns {
        centred,
        half_x,
        half_y,
        half_xy,
    }
}

/// Runs the three fixed-offset iterations and keeps the one with the highest DPW.
///
/// 1. centred lattice
/// 2. half a pitch along x or along y, whichever fits more (x on ties)
/// 3. half a pitch along both axes
///
/// Ties between iterations go to the earlier one, independent of evaluation order.
#[instrument(skip_all, name = "three_offset_optimizer")]
pub fn optimize(wafer: &Wafer, die: &Die) -> ThreeRunSummary {
    info!(
        diameter = wafer.diameter,
        edge_exclusion = wafer.edge_exclusion,
        width = die.width,
        height = die.height,
        scribe = die.scribe,
        "Starting three fixed-offset placement search."
    );

    let offsets = CandidateOffsets::for_die(die);
    let runs = evaluate_candidates(wafer, die, &offsets);

    debug!(
        iter2_x = runs.half_x.dpw,
        iter2_y = runs.half_y.dpw,
        "Comparing half-pitch candidates for iteration 2."
    );
    let (iter2, note_iter2) = if runs.half_x.dpw >= runs.half_y.dpw {
        (runs.half_x, Axis::X)
    } else {
        (runs.half_y, Axis::Y)
    };

    let summary = ThreeRunSummary::new(runs.centred, iter2, runs.half_xy, note_iter2);
    for (label, result) in summary.per_iter() {
        debug!(
            iteration = label.as_str(),
            dpw = result.dpw,
            x_offset = result.offset.x,
            y_offset = result.offset.y,
            "Iteration evaluated."
        );
    }
    info!(
        best = summary.best_label().as_str(),
        dpw = summary.best().dpw,
        iter2_axis = note_iter2.as_str(),
        "Placement search complete."
    );
    summary
}
