use crate::data::Row;
use anyhow::Context;
use std::path::Path;

/// Simple CSV importer for a day's `Row`s, in file order.
pub(crate) fn read_rows<R: std::io::Read>(reader: R) -> Result<Vec<Row>, anyhow::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Loads a day file. A day nobody has recorded anything for yet has no file,
/// which is just an empty day.
pub(crate) fn read_day(path: &Path) -> Result<Vec<Row>, anyhow::Error> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to open {}", path.display()));
        }
    };
    let rows = read_rows(file).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded day file");
    Ok(rows)
}
