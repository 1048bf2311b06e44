//! Calendar module - month grid, navigation and the rendering service.

mod calendar_model;
mod calendar_service;
mod calendar_traits;
pub mod window_builder;

pub use calendar_model::{CalendarDay, MonthView, NavigationOffsets};
pub use calendar_service::CalendarService;
pub use calendar_traits::{CalendarServiceTrait, ClockTrait, FixedClock, SystemClock};
pub use window_builder::{month_grid, offsets};

#[cfg(test)]
mod calendar_service_tests;
