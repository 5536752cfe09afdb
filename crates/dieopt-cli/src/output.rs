use crate::error::Result;
use clap::ValueEnum;
use dieopt::core::io::wafermap;
use dieopt::core::models::die::Die;
use dieopt::core::models::placement::{IterationLabel, ThreeRunSummary};
use dieopt::core::models::wafer::Wafer;
use dieopt::engine::config::JobConfig;
use dieopt::workflows::place::DieOptOutput;
use dieopt::workflows::present::{Coordinates, Selection};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// Human-readable summary followed by the coordinates.
    #[default]
    Text,
    /// `label,x_mm,y_mm` rows.
    Csv,
    /// Summary and coordinates as a single JSON document.
    Json,
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    /// Case-insensitive, matching the `--format` flag.
    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        <Self as ValueEnum>::from_str(&value, true)
            .map_err(|_| format!("unknown output format '{}'", value))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    wafer: &'a Wafer,
    die: &'a Die,
    selection: &'a str,
    #[serde(flatten)]
    summary: &'a ThreeRunSummary,
    coordinates: &'a Coordinates,
}

/// Writes the per-iteration table and the winning iteration.
pub fn write_summary<W: Write>(
    writer: &mut W,
    job: &JobConfig,
    summary: &ThreeRunSummary,
) -> Result<()> {
    let JobConfig { wafer, die } = job;
    writeln!(
        writer,
        "Wafer: {:.3} mm diameter, {:.3} mm edge exclusion (usable radius {:.3} mm)",
        wafer.diameter,
        wafer.edge_exclusion,
        wafer.usable_radius()
    )?;
    writeln!(
        writer,
        "Die:   {:.3} x {:.3} mm, scribe {:.3} mm (pitch {:.3} x {:.3} mm)",
        die.width,
        die.height,
        die.scribe,
        die.pitch_x(),
        die.pitch_y()
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<9} {:>6} {:>14} {:>14}",
        "Iteration", "DPW", "Offset X (mm)", "Offset Y (mm)"
    )?;
    for (label, result) in summary.per_iter() {
        let note = match label {
            IterationLabel::Iter2 => format!("  (half pitch in {})", summary.note_iter2()),
            _ => String::new(),
        };
        writeln!(
            writer,
            "{:<9} {:>6} {:>14.4} {:>14.4}{}",
            label.as_str(),
            result.dpw,
            result.offset.x,
            result.offset.y,
            note
        )?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Best: {} ({} dies)",
        summary.best_label(),
        summary.best().dpw
    )?;
    Ok(())
}

/// Writes the selected die centres in `format`.
pub fn write_coordinates<W: Write>(
    mut writer: W,
    format: OutputFormat,
    selection: Selection,
    job: &JobConfig,
    output: &DieOptOutput,
) -> Result<()> {
    let groups = output.coordinates.groups(selection.as_str());
    match format {
        OutputFormat::Text => {
            for (label, points) in groups {
                writeln!(writer, "# {} ({} dies)", label, points.len())?;
                for (x, y) in points {
                    writeln!(writer, "{:>12.4} {:>12.4}", x, y)?;
                }
            }
            writer.flush()?;
        }
        OutputFormat::Csv => wafermap::write_to(writer, groups)?,
        OutputFormat::Json => {
            let report = JsonReport {
                wafer: &job.wafer,
                die: &job.die,
                selection: selection.as_str(),
                summary: &output.summary,
                coordinates: &output.coordinates,
            };
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dieopt::engine::config::JobConfigBuilder;
    use dieopt::workflows::place::{DieOptOptions, dieopt};

    fn reference_job() -> JobConfig {
        JobConfigBuilder::new()
            .wafer_preset("2in")
            .edge_exclusion(2.0)
            .width(1.0)
            .height(1.0)
            .scribe(7.0)
            .build()
            .unwrap()
    }

    fn render(format: OutputFormat, selection: Selection) -> String {
        let job = reference_job();
        let output = dieopt(&job, DieOptOptions::new(selection)).unwrap();
        let mut buffer = Vec::new();
        write_coordinates(&mut buffer, format, selection, &job, &output).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn summary_lists_every_iteration_and_the_best() {
        let job = reference_job();
        let summary = dieopt(&job, DieOptOptions::default()).unwrap().summary;
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &job, &summary).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("usable radius 23.400 mm"));
        assert!(text.contains("pitch 8.000 x 8.000 mm"));
        let rows: Vec<_> = text.lines().filter(|l| l.starts_with("iter")).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(" 25 "));
        assert!(rows[1].contains(" 26 "));
        assert!(rows[1].ends_with("(half pitch in x)"));
        assert!(rows[2].contains(" 24 "));
        assert!(text.contains("Best: iter2 (26 dies)"));
    }

    #[test]
    fn text_coordinates_have_a_header_per_group() {
        let text = render(OutputFormat::Text, Selection::All);
        let headers: Vec<_> = text.lines().filter(|l| l.starts_with('#')).collect();
        assert_eq!(
            headers,
            vec!["# iter1 (25 dies)", "# iter2 (26 dies)", "# iter3 (24 dies)"]
        );
        assert_eq!(text.lines().count(), 3 + 25 + 26 + 24);
    }

    #[test]
    fn csv_coordinates_can_be_read_back() {
        let text = render(OutputFormat::Csv, Selection::Best);
        assert!(text.starts_with("label,x_mm,y_mm\n"));
        let groups = wafermap::read_from(text.as_bytes()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["best"].len(), 26);
    }

    #[test]
    fn json_report_contains_summary_and_coordinates() {
        let text = render(OutputFormat::Json, Selection::Best);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["best"], "iter2");
        assert_eq!(value["note_iter2"], "x");
        assert_eq!(value["selection"], "best");
        assert_eq!(value["wafer"]["diameter"], 50.8);
        let dpws: Vec<_> = value["iterations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|it| it["dpw"].as_u64().unwrap())
            .collect();
        assert_eq!(dpws, vec![25, 26, 24]);
        assert_eq!(value["coordinates"].as_array().unwrap().len(), 26);
        assert_eq!(value["iterations"][1]["offset"][0], 4.0);
        assert_eq!(value["iterations"][1]["angle_deg"], 0.0);
        assert!(value["iterations"][0].get("positions").is_none());
    }

    #[test]
    fn json_all_selection_keys_coordinates_by_iteration() {
        let text = render(OutputFormat::Json, Selection::All);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let coords = value["coordinates"].as_object().unwrap();
        assert_eq!(coords["iter1"].as_array().unwrap().len(), 25);
        assert_eq!(coords["iter3"].as_array().unwrap().len(), 24);
    }
}
