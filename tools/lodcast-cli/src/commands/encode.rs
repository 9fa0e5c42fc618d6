//! Encode command implementation.

use std::fs;
use std::path::Path;

use lodcast_core::{Encoder, LodTile, PointBuffer};

use crate::error::{CliError, Result};
use crate::PointFormat;

/// Run the encode command - reads a point file, runs the LOD pipeline, and
/// writes the blob.
pub fn run(input: &Path, depth: u32, output: &Path, format: PointFormat) -> Result<()> {
    let points = match format {
        PointFormat::Csv => read_csv(input)?,
        PointFormat::Raw => PointBuffer::from_le_bytes(&fs::read(input)?)?,
    };

    let point_count = points.len();
    let tile = LodTile::build(points, depth)?;
    let blob = tile.encode()?;
    fs::write(output, &blob)?;

    println!(
        "encoded {point_count} points into {} partitions ({} bytes) -> {}",
        tile.offsets().len(),
        blob.len(),
        output.display()
    );
    Ok(())
}

/// Read a headerless CSV of `x,y` rows into a point buffer.
fn read_csv(path: &Path) -> Result<PointBuffer> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path)?;
    let mut scalars = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(CliError::InvalidInput(format!(
                "row {} has {} fields; expected x,y",
                line + 1,
                record.len()
            )));
        }
        for field in record.iter() {
            let value: f32 = field.trim().parse().map_err(|_| {
                CliError::InvalidInput(format!("row {}: {field:?} is not a number", line + 1))
            })?;
            scalars.push(value);
        }
    }
    Ok(PointBuffer::new(scalars)?)
}
