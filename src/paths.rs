use anyhow::Context;
use chrono::{DateTime, Datelike, TimeZone};
use std::path::{Path, PathBuf};

/// Where one calendar day lives: `<root>/<YYYY>/<MM>/<YYYY-MM-DD>.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayPaths {
    pub year_dir: PathBuf,
    pub month_dir: PathBuf,
    pub file: PathBuf,
    pub date: String,
}

impl DayPaths {
    /// The date is taken in whatever timezone `now` carries; the binary passes
    /// local time.
    pub fn for_day<Tz: TimeZone>(root: &Path, now: &DateTime<Tz>) -> Self {
        let year = format!("{:04}", now.year());
        let month = format!("{:02}", now.month());
        let date = format!("{year}-{month}-{:02}", now.day());
        let year_dir = root.join(&year);
        let month_dir = year_dir.join(&month);
        let file = month_dir.join(format!("{date}.csv"));
        Self {
            year_dir,
            month_dir,
            file,
            date,
        }
    }

    pub fn ensure_dirs(&self) -> Result<(), anyhow::Error> {
        ensure_dir(&self.year_dir)?;
        ensure_dir(&self.month_dir)?;
        Ok(())
    }
}

/// Creates `dir` and its missing ancestors. Returns whether anything had to be
/// created, and tells the user when it did.
pub(crate) fn ensure_dir(dir: &Path) -> Result<bool, anyhow::Error> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    tracing::debug!(path = %dir.display(), "created directory");
    println!("Created directory: {}", dir.display());
    Ok(true)
}
