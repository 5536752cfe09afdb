use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;
use clap::ValueEnum;
use dieopt::engine::config::JobConfigBuilder;
use dieopt::engine::error::DieOptError;
use dieopt::workflows::present::Selection;
use tracing::debug;

pub fn build_config(args: &RunArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let wafer_file = file_config.wafer.take().unwrap_or_default();
    let die_file = file_config.die.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    // The wafer size is resolved as a unit so a CLI preset is not shadowed by a file diameter.
    let (diameter, preset) = if args.diameter.is_some() || args.preset.is_some() {
        (args.diameter, args.preset.clone())
    } else {
        (wafer_file.diameter, wafer_file.preset)
    };

    let mut builder = JobConfigBuilder::new()
        .edge_exclusion(
            args.edge_exclusion
                .or(wafer_file.edge_exclusion)
                .unwrap_or(defaults.edge_exclusion),
        )
        .scribe(args.scribe.or(die_file.scribe).unwrap_or(defaults.scribe));
    if let Some(diameter) = diameter {
        builder = builder.wafer_diameter(diameter);
    }
    if let Some(preset) = preset {
        builder = builder.wafer_preset(preset);
    }
    if let Some(width) = args.width.or(die_file.width) {
        builder = builder.width(width);
    }
    if let Some(height) = args.height.or(die_file.height) {
        builder = builder.height(height);
    }
    let job = builder.build().map_err(DieOptError::from)?;

    let selection: Selection = args
        .selection
        .as_deref()
        .or(output_file.selection.as_deref())
        .unwrap_or(&defaults.selection)
        .parse()?;
    let format = args
        .format
        .or(output_file.format)
        .unwrap_or(defaults.format);
    let output_path = args.output.clone().or(output_file.path);

    debug!(
        ?job,
        %selection,
        ?format,
        ?output_path,
        "Resolved job configuration."
    );

    Ok(AppConfig {
        job,
        selection,
        format,
        output_path,
    })
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid float value for {}: {}", key, value_str)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "wafer.diameter" => {
                config.wafer.get_or_insert_with(Default::default).diameter =
                    Some(parse_float(key, value_str)?);
            }
            "wafer.preset" => {
                config.wafer.get_or_insert_with(Default::default).preset =
                    Some(value_str.to_string());
            }
            "wafer.edge-exclusion" => {
                config
                    .wafer
                    .get_or_insert_with(Default::default)
                    .edge_exclusion = Some(parse_float(key, value_str)?);
            }
            "die.width" => {
                config.die.get_or_insert_with(Default::default).width =
                    Some(parse_float(key, value_str)?);
            }
            "die.height" => {
                config.die.get_or_insert_with(Default::default).height =
                    Some(parse_float(key, value_str)?);
            }
            "die.scribe" => {
                config.die.get_or_insert_with(Default::default).scribe =
                    Some(parse_float(key, value_str)?);
            }
            "output.selection" => {
                value_str.parse::<Selection>()?;
                config.output.get_or_insert_with(Default::default).selection =
                    Some(value_str.to_string());
            }
            "output.format" => {
                let format = OutputFormat::from_str(value_str, true).map_err(|_| {
                    CliError::Config(format!("Invalid format for {}: {}", key, value_str))
                })?;
                config.output.get_or_insert_with(Default::default).format = Some(format);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
