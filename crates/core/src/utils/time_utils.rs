use chrono::{Datelike, Days, NaiveDate};

use crate::constants::DATE_KEY_FORMAT;
use crate::errors::{Result, ValidationError};

/// Formats a date as the `YYYY-MM-DD` key used by the presentation layer.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT)?;
    Ok(date)
}

/// Weekday index with Monday = 0 and Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// ISO-8601 week number of the date (1..=53).
///
/// Weeks 52/53 are followed by week 1, so parity is not continuous across
/// some year boundaries.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Last day number of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        // Only reachable at the end of chrono's supported range, where the
        // final month is December.
        .unwrap_or(31)
}

/// Moves `date` by a signed number of days, failing at the ends of the
/// representable range.
pub fn shift_days(date: NaiveDate, delta: i64) -> Result<NaiveDate> {
    let magnitude = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or_else(|| {
        ValidationError::InvalidInput(format!(
            "Date {} shifted by {} days is out of range",
            date, delta
        ))
        .into()
    })
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}
