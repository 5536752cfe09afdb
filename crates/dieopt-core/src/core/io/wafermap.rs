use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaferMapError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct WaferMapRecord {
    label: String,
    x_mm: f64,
    y_mm: f64,
}

/// Die centres in mm grouped by a free-form label (usually an iteration name).
pub type LabeledPoints = BTreeMap<String, Vec<(f64, f64)>>;

/// Writes `label,x_mm,y_mm` rows, one per die centre, keeping the order of the input.
pub fn write_to<'a, W, I>(writer: W, groups: I) -> Result<(), WaferMapError>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a [(f64, f64)])>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (label, points) in groups {
        for &(x_mm, y_mm) in points {
            csv_writer.serialize(WaferMapRecord {
                label: label.to_string(),
                x_mm,
                y_mm,
            })?;
        }
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_to_path<'a, P, I>(path: P, groups: I) -> Result<(), WaferMapError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a str, &'a [(f64, f64)])>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| WaferMapError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_to(BufWriter::new(file), groups)
}

/// Reads rows written by [`write_to`], grouping points by label in file order.
pub fn read_from<R: Read>(reader: R) -> Result<LabeledPoints, WaferMapError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut groups = LabeledPoints::new();
    for record in csv_reader.deserialize::<WaferMapRecord>() {
        let record = record?;
        groups
            .entry(record.label)
            .or_default()
            .push((record.x_mm, record.y_mm));
    }
    Ok(groups)
}

pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<LabeledPoints, WaferMapError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| WaferMapError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_from(BufReader::new(file))
}
