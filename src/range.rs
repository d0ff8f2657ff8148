use crate::error::{Result, SheetError};
use crate::model::DateRange;
use chrono::{DateTime, Datelike, NaiveDate};

/// Resolve the CLI date inputs into a concrete range.
///
/// Explicit start+end wins over a month; a month alone expands to its
/// first and last calendar day; neither is a usage error.
pub fn resolve(
    start: Option<&str>,
    end: Option<&str>,
    month: Option<&str>,
) -> Result<DateRange> {
    match (start, end, month) {
        (Some(s), Some(e), _) => Ok(DateRange {
            start: parse_date(s)?,
            end: parse_date(e)?,
        }),
        (_, _, Some(m)) => month_range(m),
        _ => Err(SheetError::MissingRange),
    }
}

/// Permissive date parsing: RFC3339, `YYYY-MM-DD`, or `YYYY/MM/DD`.
fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }
    Err(SheetError::InvalidDate(input.to_string()))
}

fn month_range(input: &str) -> Result<DateRange> {
    let start = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| SheetError::InvalidDate(input.to_string()))?;
    Ok(DateRange {
        start,
        end: last_day_of_month(start)?,
    })
}

/// Last calendar day of the month containing `date`: day before the
/// first of the following month, which handles leap Februaries for free.
fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or_else(|| SheetError::InvalidDate(date.to_string()))
}
