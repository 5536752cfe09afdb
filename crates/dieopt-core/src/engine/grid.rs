use crate::core::models::die::Die;
use nalgebra::{Point2, Vector2};

/// Half-extent of the index lattice along each axis; indices run over `-n..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub nx: i64,
    pub ny: i64,
}

impl GridBounds {
    /// Bounds that overshoot the usable circle by at least one full pitch.
    ///
    /// Returns `None` when nothing can be placed: a non-positive radius, or a pitch
    /// that is not a positive finite number.
    pub fn covering(radius: f64, pitch_x: f64, pitch_y: f64) -> Option<Self> {
        let is_positive = |v: f64| v.is_finite() && v > 0.0;
        if !is_positive(radius) || !is_positive(pitch_x) || !is_positive(pitch_y) {
            return None;
        }
        let max_half = radius + pitch_x.max(pitch_y);
        Some(Self {
            nx: (max_half / pitch_x).ceil() as i64,
            ny: (max_half / pitch_y).ceil() as i64,
        })
    }

    /// Number of lattice sites covered by these bounds, saturating at `usize::MAX`.
    pub fn point_count(&self) -> usize {
        let side = |n: i64| 2 * u128::from(n.unsigned_abs()) + 1;
        usize::try_from(side(self.nx) * side(self.ny)).unwrap_or(usize::MAX)
    }
}

/// A rectangular die lattice translated by `offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    bounds: Option<GridBounds>,
    pitch: Vector2<f64>,
    offset: Vector2<f64>,
}

impl Lattice {
    pub fn new(radius: f64, die: &Die, offset: Vector2<f64>) -> Self {
        let pitch = Vector2::new(die.pitch_x(), die.pitch_y());
        Self {
            bounds: GridBounds::covering(radius, pitch.x, pitch.y),
            pitch,
            offset,
        }
    }

    pub fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |b| b.point_count())
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Physical centres in row-major order: `y` index outer, `x` index inner.
    pub fn centers(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        let (nx, ny) = self.bounds.map_or((0, -1), |b| (b.nx, b.ny));
        (-ny..=ny).flat_map(move |j| {
            (-nx..=nx).map(move |i| {
                Point2::new(
                    i as f64 * self.pitch.x + self.offset.x,
                    j as f64 * self.pitch.y + self.offset.y,
                )
            })
        })
    }
}
