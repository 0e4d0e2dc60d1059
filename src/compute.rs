use crate::data::{format_hours, Entry, Error, Row};
use rust_decimal::Decimal;

/// This is where a day's rows live between reading and rewriting the file.
/// Single process, read-modify-write: two concurrent runs on the same day
/// race and the last writer wins.
#[derive(Debug, Default)]
pub(crate) struct Timesheet {
    pub rows: Vec<Row>,
}

/// What `Timesheet::add` did with the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Accumulated into the existing row at `index`, which now holds `total`.
    Updated { index: usize, total: Decimal },
    Added,
}

impl Timesheet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Folds `entry` into the first row with the same category and
    /// description, or appends it. A merged row keeps its position but gets
    /// the new timestamp; its sub-category is left alone. A sum past what
    /// `Decimal` can hold is refused and the row is not touched.
    pub fn add(&mut self, entry: &Entry, timestamp: String) -> Result<Outcome, Error> {
        let existing = self
            .rows
            .iter()
            .position(|row| row.has_key(&entry.category, &entry.description));
        match existing {
            Some(index) => {
                let row = &mut self.rows[index];
                let total = row
                    .stored_hours()
                    .checked_add(entry.hours)
                    .ok_or(Error::HoursOverflow)?;
                row.hours = format_hours(total);
                row.timestamp = timestamp;
                Ok(Outcome::Updated { index, total })
            }
            None => {
                self.rows.push(Row::new(entry, timestamp));
                Ok(Outcome::Added)
            }
        }
    }
}
