//! Month grid and navigation date arithmetic.
//!
//! ```text
//! leap_back  step_back  target  step_forward  leap_forward
//!     │          │         │          │             │
//!     │          │         │          │             └── target + leap (21)
//!     │          │         │          └──────────────── target + step (7)
//!     │          │         └─────────────────────────── target
//!     │          └───────────────────────────────────── target - step (7)
//!     └──────────────────────────────────────────────── target - leap (21)
//! ```

use chrono::{Days, NaiveDate};

use super::calendar_model::{CalendarDay, NavigationOffsets};
use crate::constants::{
    DEFAULT_LEAP_SIZE, DEFAULT_STEP_SIZE, DEFAULT_WEEKENDS, MONTH_LENGTH, TARGET_ROW, WEEK_LENGTH,
};
use crate::errors::Result;
use crate::utils::time_utils::{shift_days, weekday_index};

/// Navigation targets with the default step and leap sizes.
pub fn offsets(target_date: NaiveDate) -> NavigationOffsets {
    offsets_with_sizes(target_date, DEFAULT_STEP_SIZE, DEFAULT_LEAP_SIZE)
}

/// Navigation targets for arbitrary step and leap sizes.
///
/// Saturates at the ends of the supported date range.
pub fn offsets_with_sizes(target_date: NaiveDate, step: u32, leap: u32) -> NavigationOffsets {
    let back = |days: u32| {
        target_date
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN)
    };
    let forward = |days: u32| {
        target_date
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX)
    };

    NavigationOffsets {
        leap_back: back(leap),
        step_back: back(step),
        step_forward: forward(step),
        leap_forward: forward(leap),
    }
}

/// Grid position of `target_date`: third row, natural weekday column.
pub fn target_index(target_date: NaiveDate) -> usize {
    TARGET_ROW * WEEK_LENGTH + weekday_index(target_date) as usize
}

/// 35-day grid with Saturday and Sunday as weekend.
pub fn month_grid(target_date: NaiveDate) -> Result<Vec<CalendarDay>> {
    month_grid_with_weekends(target_date, &DEFAULT_WEEKENDS)
}

/// 35-day grid with `target_date` on the third row.
///
/// Shows two full weeks before the target's week and at least two weeks
/// after it. Only the target cell has `is_today` set.
pub fn month_grid_with_weekends(target_date: NaiveDate, weekends: &[u32]) -> Result<Vec<CalendarDay>> {
    let index = target_index(target_date) as i64;

    (0..MONTH_LENGTH as i64)
        .map(|position| {
            let date = shift_days(target_date, position - index)?;
            Ok(CalendarDay::new(date, position == index, weekends))
        })
        .collect()
}
