use nalgebra::{Point2, Vector2};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementResult {
    pub dpw: usize,
    pub angle_deg: f64,
    pub offset: Vector2<f64>,
    #[serde(skip_serializing)]
    pub positions: Vec<Point2<f64>>, // Die centres in wafer-centred mm, lattice order
}

impl PlacementResult {
    pub(crate) fn new(offset: Vector2<f64>, positions: Vec<Point2<f64>>) -> Self {
        Self {
            dpw: positions.len(),
            angle_deg: 0.0,
            offset,
            positions,
        }
    }

    pub(crate) fn empty(offset: Vector2<f64>) -> Self {
        Self::new(offset, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Die centres as plain `(x, y)` pairs.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.positions.iter().map(|p| (p.x, p.y)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationLabel {
    Iter1,
    Iter2,
    Iter3,
}

impl IterationLabel {
    /// Labels in tie-break precedence order.
    pub const ALL: [IterationLabel; 3] = [Self::Iter1, Self::Iter2, Self::Iter3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iter1 => "iter1",
            Self::Iter2 => "iter2",
            Self::Iter3 => "iter3",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Iter1 => 0,
            Self::Iter2 => 1,
            Self::Iter3 => 2,
        }
    }
}

impl fmt::Display for IterationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the three fixed-offset iterations.
///
/// The best result is stored as a label into `per_iter` rather than as a separate
/// copy, so it is always one of the three iterations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreeRunSummary {
    #[serde(rename = "iterations")]
    per_iter: [PlacementResult; 3],
    best: IterationLabel,
    note_iter2: Axis,
}

impl ThreeRunSummary {
    /// Assembles a summary, picking the highest DPW with earlier iterations winning ties.
    pub(crate) fn new(
        iter1: PlacementResult,
        iter2: PlacementResult,
        iter3: PlacementResult,
        note_iter2: Axis,
    ) -> Self {
        let per_iter = [iter1, iter2, iter3];
        let mut best = IterationLabel::Iter1;
        for label in IterationLabel::ALL {
            if per_iter[label.index()].dpw > per_iter[best.index()].dpw {
                best = label;
            }
        }
        Self {
            per_iter,
            best,
            note_iter2,
        }
    }

    pub fn best(&self) -> &PlacementResult {
        self.get(self.best)
    }

    pub fn best_label(&self) -> IterationLabel {
        self.best
    }

    pub fn get(&self, label: IterationLabel) -> &PlacementResult {
        &self.per_iter[label.index()]
    }

    /// Axis that won the half-pitch comparison of the second iteration.
    pub fn note_iter2(&self) -> Axis {
        self.note_iter2
    }

    pub fn per_iter(&self) -> impl Iterator<Item = (IterationLabel, &PlacementResult)> {
        IterationLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    pub fn max_dpw(&self) -> usize {
        self.best().dpw
    }
}
