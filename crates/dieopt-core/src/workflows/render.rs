/// A drawing target for wafer maps.
///
/// The placement engine never depends on a surface; workflows forward outlines and
/// die centres to one only when the caller asks for drawing. Implementors decide how
/// (or whether) anything is actually rendered.
pub trait WaferSurface {
    /// Draws the wafer outline and the inner edge-exclusion boundary.
    ///
    /// # Arguments
    ///
    /// * `diameter` - The wafer diameter in mm.
    /// * `edge_exclusion` - The width of the exclusion ring in mm.
    fn draw_wafer(&mut self, diameter: f64, edge_exclusion: f64);

    /// Plots die centres in wafer-centred mm.
    ///
    /// # Arguments
    ///
    /// * `label` - The name of the point set (`"best"`, `"iter1"`, ...).
    /// * `points` - The die centres to plot; never empty.
    fn scatter(&mut self, label: &str, points: &[(f64, f64)]);
}
