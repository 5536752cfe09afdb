use super::present::{Coordinates, Selection, select};
use super::render::WaferSurface;
use crate::core::models::die::Die;
use crate::core::models::placement::ThreeRunSummary;
use crate::core::models::wafer::Wafer;
use crate::engine::config::JobConfig;
use crate::engine::error::DieOptError;
use crate::engine::optimizer::optimize;
use tracing::{debug, info, instrument};

#[derive(Default)]
pub struct DieOptOptions<'s> {
    pub selection: Selection,
    pub draw: bool,
    pub surface: Option<&'s mut dyn WaferSurface>,
}

impl<'s> DieOptOptions<'s> {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Forwards the wafer outline and the selected die centres to `surface`.
    pub fn drawing_on(mut self, surface: &'s mut dyn WaferSurface) -> Self {
        self.draw = true;
        self.surface = Some(surface);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DieOptOutput {
    pub coordinates: Coordinates,
    pub summary: ThreeRunSummary,
}

/// Runs the three fixed-offset placement and returns the selected die centres.
///
/// When `options.draw` is set the wafer outline is drawn first and every non-empty
/// selected point set is scattered afterwards. Drawing without a surface fails
/// before any work is done.
#[instrument(skip_all, name = "dieopt_workflow")]
pub fn dieopt(
    config: &JobConfig,
    options: DieOptOptions<'_>,
) -> Result<DieOptOutput, DieOptError> {
    let DieOptOptions {
        selection,
        draw,
        surface,
    } = options;

    let surface = match (draw, surface) {
        (true, None) => return Err(DieOptError::MissingSurface),
        (true, Some(surface)) => Some(surface),
        (false, _) => None,
    };

    let summary = optimize(&config.wafer, &config.die);
    let coordinates = select(&summary, selection);
    info!(
        selection = selection.as_str(),
        points = coordinates.len(),
        "Selected die coordinates."
    );

    if let Some(surface) = surface {
        debug!("Forwarding wafer outline and die centres to the drawing surface.");
        surface.draw_wafer(config.wafer.diameter, config.wafer.edge_exclusion);
        for (label, points) in coordinates.groups(selection.as_str()) {
            if !points.is_empty() {
                surface.scatter(label, points);
            }
        }
    }

    Ok(DieOptOutput {
        coordinates,
        summary,
    })
}

/// Object-style wrapper holding a wafer and a die between runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieOpt {
    pub wafer: Wafer,
    pub die: Die,
}

impl DieOpt {
    pub fn new(wafer: Wafer, die: Die) -> Self {
        Self { wafer, die }
    }

    pub fn config(&self) -> JobConfig {
        JobConfig {
            wafer: self.wafer,
            die: self.die,
        }
    }

    pub fn summary(&self) -> ThreeRunSummary {
        optimize(&self.wafer, &self.die)
    }

    pub fn run(&self, options: DieOptOptions<'_>) -> Result<DieOptOutput, DieOptError> {
        dieopt(&self.config(), options)
    }
}

impl From<JobConfig> for DieOpt {
    fn from(config: JobConfig) -> Self {
        Self::new(config.wafer, config.die)
    }
}
