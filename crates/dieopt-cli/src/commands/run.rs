use crate::cli::RunArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::output::{self, OutputFormat};
use dieopt::workflows::place::{DieOptOptions, DieOptOutput, dieopt};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args)?;
    warn_on_degenerate_inputs(&app);

    info!("Invoking the placement workflow...");
    let output = dieopt(&app.job, DieOptOptions::new(app.selection))?;

    if output.summary.max_dpw() == 0 {
        warn!("No die fits inside the usable area for any offset.");
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    match &app.output_path {
        Some(path) => {
            info!(format = ?app.format, path = %path.display(), "Writing coordinates to file.");
            output::write_summary(&mut stdout, &app.job, &output.summary)?;
            write_to_file(&app, &output, path)?;
            writeln!(stdout, "Coordinates written to: {}", path.display())?;
        }
        None => {
            if app.format == OutputFormat::Text {
                output::write_summary(&mut stdout, &app.job, &output.summary)?;
                writeln!(stdout)?;
            }
            output::write_coordinates(&mut stdout, app.format, app.selection, &app.job, &output)?;
        }
    }
    Ok(())
}

fn write_to_file(app: &AppConfig, output: &DieOptOutput, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| CliError::OutputFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    output::write_coordinates(
        BufWriter::new(file),
        app.format,
        app.selection,
        &app.job,
        output,
    )
}

fn warn_on_degenerate_inputs(app: &AppConfig) {
    let usable_radius = app.job.wafer.usable_radius();
    if usable_radius <= 0.0 {
        warn!(
            usable_radius,
            "Edge exclusion leaves no usable wafer area; every count will be zero."
        );
    }
    if !app.job.die.has_area() {
        warn!(
            width = app.job.die.width,
            height = app.job.die.height,
            "Die has no area; every count will be zero."
        );
    }
}
