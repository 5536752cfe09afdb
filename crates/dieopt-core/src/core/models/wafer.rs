use crate::core::presets;
use crate::core::utils::geometry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wafer {
    pub diameter: f64,       // Substrate diameter in mm
    pub edge_exclusion: f64, // Unusable ring at the rim, in mm
}

impl Wafer {
    pub fn new(diameter: f64, edge_exclusion: f64) -> Self {
        Self {
            diameter,
            edge_exclusion,
        }
    }

    /// Builds a wafer from a named standard size such as `"2in"` or `"300mm"`.
    pub fn from_preset(name: &str, edge_exclusion: f64) -> Option<Self> {
        presets::diameter_of(name).map(|diameter| Self::new(diameter, edge_exclusion))
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        0.5 * self.diameter
    }

    /// Radius of the area available for placement. May be zero or negative, in which
    /// case nothing fits.
    #[inline]
    pub fn usable_radius(&self) -> f64 {
        geometry::usable_radius(self)
    }
}
