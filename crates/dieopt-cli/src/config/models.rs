use crate::output::OutputFormat;
use dieopt::engine::config::JobConfig;
use dieopt::workflows::present::Selection;
use std::path::PathBuf;

pub struct AppConfig {
    pub job: JobConfig,
    pub selection: Selection,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
}
