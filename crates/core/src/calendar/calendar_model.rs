//! Calendar page models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::{date_key, weekday_index};

/// A single cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u32,
    pub day_number: u32,
    pub month: u32,
    pub year: i32,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, is_today: bool, weekends: &[u32]) -> Self {
        let weekday = weekday_index(date);
        CalendarDay {
            date,
            weekday,
            day_number: date.day(),
            month: date.month(),
            year: date.year(),
            is_today,
            is_weekend: weekends.contains(&weekday),
        }
    }

    /// `YYYY-MM-DD` key matching the occurrence map.
    pub fn key(&self) -> String {
        date_key(self.date)
    }

    /// Styling class for the grid cell.
    pub fn css_class(&self) -> String {
        let mut class = String::from("day");
        if self.is_today {
            class.push_str(" today");
        }
        if self.is_weekend {
            class.push_str(" weekend");
        }
        class
    }
}

/// Targets of the step/leap navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOffsets {
    pub leap_back: NaiveDate,
    pub step_back: NaiveDate,
    pub step_forward: NaiveDate,
    pub leap_forward: NaiveDate,
}

/// Everything the month page needs besides the occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub target_date: NaiveDate,
    pub grid: Vec<CalendarDay>,
    pub navigation: NavigationOffsets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_fields() {
        let day = CalendarDay::new(NaiveDate::from_ymd_opt(2020, 5, 10).unwrap(), true, &[5, 6]);
        assert_eq!(day.weekday, 6);
        assert_eq!(day.day_number, 10);
        assert_eq!(day.month, 5);
        assert_eq!(day.year, 2020);
        assert_eq!(day.key(), "2020-05-10");
        assert_eq!(day.css_class(), "day today weekend");
    }

    #[test]
    fn test_css_class_for_plain_day() {
        let day = CalendarDay::new(NaiveDate::from_ymd_opt(2020, 5, 11).unwrap(), false, &[5, 6]);
        assert_eq!(day.css_class(), "day");
    }
}
