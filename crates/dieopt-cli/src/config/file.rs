use crate::error::{CliError, Result};
use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub wafer: Option<FileWaferConfig>,
    pub die: Option<FileDieConfig>,
    pub output: Option<FileOutputConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileWaferConfig {
    pub diameter: Option<f64>,
    pub preset: Option<String>,
    #[serde(rename = "edge-exclusion")]
    pub edge_exclusion: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileDieConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scribe: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub selection: Option<String>,
    pub format: Option<OutputFormat>,
    pub path: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading job configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
