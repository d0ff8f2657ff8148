use chrono::{DateTime, FixedOffset, NaiveDate};

/// One logged change, parsed from a pipe-delimited `git log` line.
/// Immutable after parsing; owned by the date-bucket map until exit.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub repo: String,
    pub hash: String,
    pub raw_date: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
    pub branch: String,
    pub subject: String,
}

impl CommitRecord {
    /// Calendar day of the commit in its own offset; bucket key.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Inclusive date bounds resolved once from the CLI.
///
/// Carried as calendar dates: git's `--since`/`--until` filters take
/// date-only boundaries here, so nothing downstream needs a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
