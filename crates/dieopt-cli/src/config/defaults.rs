use crate::output::OutputFormat;

pub struct DefaultsConfig {
    pub edge_exclusion: f64,
    pub scribe: f64,
    pub selection: String,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            edge_exclusion: 0.0,
            scribe: 0.0,
            selection: "best".to_string(),
            format: OutputFormat::Text,
        }
    }
}
