use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use log::info;

use crate::error::{AppError, Result};
use crate::record::PlaceRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
pub const PREVIEW_ROWS: usize = 5;

/// Writes records as a BOM-prefixed UTF-8 CSV file and prints a short preview.
///
/// Returns the number of data rows written. An empty slice is a no-op:
/// neither the file nor its parent directory is created.
pub fn write_csv(records: &[PlaceRecord], path: &Path) -> Result<usize> {
    if records.is_empty() {
        info!("No data to save");
        return Ok(0);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    println!("Data saved to {}", path.display());
    println!("Total records: {}", records.len());
    println!("\nFirst {} records:", PREVIEW_ROWS.min(records.len()));
    println!("{}", preview(records, PREVIEW_ROWS)?);
    println!("Columns: {}", PlaceRecord::FIELDS.join(", "));

    Ok(records.len())
}

/// Header plus the first `rows` records, rendered as CSV text.
pub fn preview(records: &[PlaceRecord], rows: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records.iter().take(rows) {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::OutputError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::OutputError(e.to_string()))
}
