use crate::data::{Row, HEADER};
use anyhow::Context;
use std::path::Path;

/// Basic CSV exporter for a day's `Row`s. The header is always written, even
/// for an empty day.
pub(crate) fn write_rows<W: std::io::Write>(writer: W, rows: &[Row]) -> Result<(), anyhow::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Replaces the whole day file with `rows`.
pub(crate) fn write_day(path: &Path, rows: &[Row]) -> Result<(), anyhow::Error> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_rows(file, rows).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote day file");
    Ok(())
}
