//! A composite date picker for [`egui`](https://github.com/emilk/egui).
//!
//! [`Calendar`] is built from three smaller widgets that can also be used on their own:
//! a [`MonthChooser`] (combo box with spinner arrows), a [`YearChooser`] (numeric spinner)
//! and a [`DayChooser`] (a seven column sheet for one month).
//! The calendar keeps the three in sync: moving the month from December to January advances the
//! year, going back from January to December moves to the previous year, and every change
//! of month or year lays the day sheet out anew.
//!
//! ```
//! use ogcalendar::{Calendar, EventKind, YearMonth};
//!
//! let mut calendar = Calendar::new(YearMonth::new(2017, chrono::Month::December));
//! calendar.subscribe(EventKind::DateSelected, |event| {
//!     assert_eq!(event.kind(), EventKind::DateSelected);
//! });
//!
//! calendar.step_month_forward();
//! assert_eq!(calendar.current_year_month(), YearMonth::new(2018, chrono::Month::January));
//! ```
//!
//! Inside an egui app:
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! # let mut calendar = ogcalendar::Calendar::default();
//! for event in calendar.show(ui).inner {
//!     ui.label(format!("{event:?}"));
//! }
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod calendar;
mod captions;
mod day_chooser;
mod event;
mod grid;
mod month_chooser;
mod year_chooser;
mod year_month;

pub use crate::{
    calendar::Calendar,
    captions::{CaptionError, MonthNames, WeekdayCaptions},
    day_chooser::DayChooser,
    event::{CalendarEvent, EventKind, Subscribers, SubscriptionId},
    grid::{DayCell, DayGrid},
    month_chooser::MonthChooser,
    year_chooser::{YearChooser, year_range},
    year_month::{YearMonth, days_in_month, is_leap_year},
};

/// Today's date according to the local clock.
pub(crate) fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
