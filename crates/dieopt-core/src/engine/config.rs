use crate::core::models::die::Die;
use crate::core::models::wafer::Wafer;
use crate::core::presets;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown wafer preset: '{0}'")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobConfig {
    pub wafer: Wafer,
    pub die: Die,
}

/// Normalizes either structured models or loose scalars into a [`JobConfig`].
///
/// A structured `Wafer` or `Die` takes precedence over the corresponding scalars.
/// Edge exclusion and scribe default to zero; everything else is required.
#[derive(Debug, Default, Clone)]
pub struct JobConfigBuilder {
    wafer: Option<Wafer>,
    die: Option<Die>,
    wafer_diameter: Option<f64>,
    wafer_preset: Option<String>,
    edge_exclusion: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    scribe: Option<f64>,
}

impl JobConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wafer(mut self, wafer: Wafer) -> Self {
        self.wafer = Some(wafer);
        self
    }
    pub fn die(mut self, die: Die) -> Self {
        self.die = Some(die);
        self
    }
    pub fn wafer_diameter(mut self, diameter: f64) -> Self {
        self.wafer_diameter = Some(diameter);
        self
    }
    /// Named wafer size; an explicit diameter overrides it.
    pub fn wafer_preset(mut self, name: impl Into<String>) -> Self {
        self.wafer_preset = Some(name.into());
        self
    }
    pub fn edge_exclusion(mut self, edge_exclusion: f64) -> Self {
        self.edge_exclusion = Some(edge_exclusion);
        self
    }
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
    pub fn scribe(mut self, scribe: f64) -> Self {
        self.scribe = Some(scribe);
        self
    }

    pub fn build(self) -> Result<JobConfig, ConfigError> {
        let wafer = match self.wafer {
            Some(wafer) => wafer,
            None => {
                let diameter = match (self.wafer_diameter, self.wafer_preset) {
                    (Some(diameter), _) => diameter,
                    (None, Some(name)) => {
                        presets::diameter_of(&name).ok_or(ConfigError::UnknownPreset(name))?
                    }
                    (None, None) => {
                        return Err(ConfigError::MissingParameter("wafer or wafer_diameter"));
                    }
                };
                Wafer::new(diameter, self.edge_exclusion.unwrap_or(0.0))
            }
        };

        let die = match self.die {
            Some(die) => die,
            None => Die::new(
                self.width
                    .ok_or(ConfigError::MissingParameter("die or width"))?,
                self.height
                    .ok_or(ConfigError::MissingParameter("die or height"))?,
                self.scribe.unwrap_or(0.0),
            ),
        };

        Ok(JobConfig { wafer, die })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_structured_models() {
        let config = JobConfigBuilder::new()
            .wafer(Wafer::new(50.8, 2.0))
            .die(Die::new(1.0, 1.0, 7.0))
            .build()
            .unwrap();
        assert_eq!(config.wafer, Wafer::new(50.8, 2.0));
        assert_eq!(config.die, Die::new(1.0, 1.0, 7.0));
    }

    #[test]
    fn build_from_scalars() {
        let config = JobConfigBuilder::new()
            .wafer_diameter(150.0)
            .edge_exclusion(3.0)
            .width(5.0)
            .height(4.0)
            .scribe(0.1)
            .build()
            .unwrap();
        assert_eq!(config.wafer, Wafer::new(150.0, 3.0));
        assert_eq!(config.die, Die::new(5.0, 4.0, 0.1));
    }

    #[test]
    fn optional_scalars_default_to_zero() {
        let config = JobConfigBuilder::new()
            .wafer_diameter(100.0)
            .width(2.0)
            .height(3.0)
            .build()
            .unwrap();
        assert_eq!(config.wafer.edge_exclusion, 0.0);
        assert_eq!(config.die.scribe, 0.0);
    }

    #[test]
    fn structured_models_take_precedence_over_scalars() {
        let config = JobConfigBuilder::new()
            .wafer(Wafer::new(200.0, 5.0))
            .wafer_diameter(100.0)
            .edge_exclusion(1.0)
            .die(Die::new(1.0, 2.0, 0.5))
            .width(9.0)
            .build()
            .unwrap();
        assert_eq!(config.wafer, Wafer::new(200.0, 5.0));
        assert_eq!(config.die, Die::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn preset_supplies_diameter() {
        let config = JobConfigBuilder::new()
            .wafer_preset("2in")
            .edge_exclusion(2.0)
            .width(1.0)
            .height(1.0)
            .build()
            .unwrap();
        assert_eq!(config.wafer, Wafer::new(50.8, 2.0));
    }

    #[test]
    fn explicit_diameter_overrides_preset() {
        let config = JobConfigBuilder::new()
            .wafer_preset("300mm")
            .wafer_diameter(76.2)
            .width(1.0)
            .height(1.0)
            .build()
            .unwrap();
        assert_eq!(config.wafer.diameter, 76.2);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = JobConfigBuilder::new()
            .wafer_preset("9in")
            .width(1.0)
            .height(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownPreset("9in".to_string()));
    }

    #[test]
    fn missing_wafer_is_an_error() {
        let err = JobConfigBuilder::new()
            .edge_exclusion(2.0)
            .die(Die::new(1.0, 1.0, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("wafer or wafer_diameter"));
    }

    #[test]
    fn missing_die_dimension_is_an_error() {
        let err = JobConfigBuilder::new()
            .wafer_diameter(100.0)
            .width(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("die or height"));

        let err = JobConfigBuilder::new()
            .wafer_diameter(100.0)
            .height(1.0)
            .scribe(0.5)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("die or width"));
    }

    #[test]
    fn error_messages_name_the_missing_parameter() {
        let err = ConfigError::MissingParameter("die or width");
        assert_eq!(err.to_string(), "Missing required parameter: die or width");
    }
}
