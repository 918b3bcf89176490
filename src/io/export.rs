//! CSV export for sampled power curves.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::curve::CurvePoint;

/// Column header for curve CSV export.
pub const HEADER: [&str; 2] = ["wind_speed_ms", "power_mw"];

/// Exports a sampled curve to a CSV file at the given path.
///
/// Writes a header row followed by one data row per point. Produces
/// deterministic output for identical inputs.
///
/// # Arguments
///
/// * `points` - Sampled curve, in sweep order
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(points: &[CurvePoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(points, buf)
}

/// Writes a sampled curve as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(points: &[CurvePoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for p in points {
        wtr.write_record(&[
            format!("{:.2}", p.wind_speed_ms),
            format!("{:.4}", p.power_mw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
