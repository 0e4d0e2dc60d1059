//! Where timesheets are stored.

use crate::data::Error;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Directory holding the `<YYYY>/<MM>/<YYYY-MM-DD>.csv` tree.
    pub root: PathBuf,
}

impl Config {
    /// `<home>/timesheets`.
    pub fn with_home(home: &Path) -> Self {
        Self {
            root: home.join("timesheets"),
        }
    }

    /// Resolves the home directory through the OS; the root is always
    /// `timesheets` under it.
    pub fn load() -> Result<Self, anyhow::Error> {
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(Self::with_home(&home))
    }
}
