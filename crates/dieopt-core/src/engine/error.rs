use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DieOptError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown selection '{0}'. Expected one of: best, iter1, iter2, iter3, all")]
    InvalidSelector(String),

    #[error("Drawing was requested but no wafer surface was provided")]
    MissingSurface,
}
