use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Sub-category stored when the user leaves it blank.
pub const DEFAULT_SUB_CATEGORY: &str = "NA";

/// Header row of every day file, in column order.
pub const HEADER: [&str; 5] = ["Timestamp", "Hours", "Category", "Description", "Sub-Category"];

/// One validated entry as typed by the user. It has no timestamp yet: that is
/// assigned when it lands in a `Row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub hours: Decimal,
    pub category: String,
    pub description: String,
    pub sub_category: String,
}

/// One record of a day file, exactly as it sits on disk. Every field is kept
/// as text so a hand-edited file with an odd `Hours` cell still loads; the
/// value is only interpreted when hours get accumulated (see `stored_hours`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Row {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
}

impl Row {
    pub fn new(entry: &Entry, timestamp: String) -> Self {
        Self {
            timestamp,
            hours: format_hours(entry.hours),
            category: entry.category.clone(),
            description: entry.description.clone(),
            sub_category: entry.sub_category.clone(),
        }
    }

    /// Category and description are the merge key: byte-for-byte equality,
    /// case included.
    pub fn has_key(&self, category: &str, description: &str) -> bool {
        self.category == category && self.description == description
    }

    /// Hours already recorded in this row; anything unparseable counts as zero.
    pub fn stored_hours(&self) -> Decimal {
        parse_number(&self.hours).unwrap_or(Decimal::ZERO)
    }
}

/// Accepts plain (`2.5`) and scientific (`2.5e0`) notation, surrounding
/// whitespace ignored.
pub(crate) fn parse_number(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Canonical text for hours: no trailing zeros, so `4.0` is written as `4`.
pub(crate) fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,
    #[error("Please enter a valid positive number for hours (got {0:?})")]
    InvalidHours(String),
    #[error("Please enter a valid positive number for hours")]
    NonPositiveHours,
    #[error("Hours must be between 1e-28 and 7.9e28 (got {0})")]
    HoursOutOfRange(String),
    #[error("Total hours are too large to record")]
    HoursOverflow,
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("Could not read answer: {0}")]
    Prompt(#[from] std::io::Error),
    #[error("Terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}
