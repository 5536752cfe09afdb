use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Die {
    pub width: f64,  // Footprint along x, in mm
    pub height: f64, // Footprint along y, in mm
    pub scribe: f64, // Street between neighbouring dies, in mm
}

impl Die {
    pub fn new(width: f64, height: f64, scribe: f64) -> Self {
        Self {
            width,
            height,
            scribe,
        }
    }

    /// Centre-to-centre spacing along x.
    #[inline]
    pub fn pitch_x(&self) -> f64 {
        self.width + self.scribe
    }

    /// Centre-to-centre spacing along y.
    #[inline]
    pub fn pitch_y(&self) -> f64 {
        self.height + self.scribe
    }

    /// Distance from the die centre to any of its corners.
    #[inline]
    pub fn half_diagonal(&self) -> f64 {
        0.5 * self.width.hypot(self.height)
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
