/// Days in a calendar week
pub const WEEK_LENGTH: usize = 7;

/// Rows in the month grid
pub const WEEKS_IN_MONTH: usize = 5;

/// Cells in the month grid
pub const MONTH_LENGTH: usize = WEEK_LENGTH * WEEKS_IN_MONTH;

/// Row of the month grid that holds the target date
pub const TARGET_ROW: usize = 2;

/// Navigation step, in days
pub const DEFAULT_STEP_SIZE: u32 = 7;

/// Navigation leap, in days
pub const DEFAULT_LEAP_SIZE: u32 = 21;

/// Days searched in both directions when rendering a month
pub const DEFAULT_MONTH_OFFSET: u32 = 20;

/// Largest window offset accepted per side
pub const DEFAULT_MAX_WINDOW_OFFSET: u32 = 20;

/// Weekday indexes (0 = Monday) treated as weekend: Saturday and Sunday
pub const DEFAULT_WEEKENDS: [u32; 2] = [5, 6];

/// Date key format used by the presentation layer
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
