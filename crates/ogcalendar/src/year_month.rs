use chrono::{Datelike as _, Month, NaiveDate};

/// Returns `true` for leap years of the proleptic Gregorian calendar.
///
/// Years outside of what [`NaiveDate`] can represent are never leap years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|date| date.leap_year())
}

/// Number of days (28..=31) in the given month.
///
/// 0 for years outside of what [`NaiveDate`] can represent.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|_| month.num_days(year))
        .map_or(0, u32::from)
}

/// `1..=12` to [`Month`].
pub(crate) fn month_from_number(number: u32) -> Option<Month> {
    u8::try_from(number)
        .ok()
        .and_then(|number| Month::try_from(number).ok())
}

/// All twelve months, January first.
pub(crate) fn all_months() -> impl Iterator<Item = Month> {
    (1..=12).filter_map(month_from_number)
}

/// A month of a specific year, e.g. December 2017.
///
/// This is what the day sheet of a calendar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month we are in right now, according to the local clock.
    pub fn current() -> Self {
        Self::from_date(crate::local_today())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: month_from_number(date.month()).unwrap_or(Month::January),
        }
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> Month {
        self.month
    }

    /// Same month, different year.
    #[inline]
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Same year, different month.
    #[inline]
    pub fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    /// Number of days in this month.
    pub fn length_of_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The date of the given day of this month.
    ///
    /// Returns `None` if the month has no such day (e.g. day 0 or February 30th),
    /// or if the year is outside of what [`NaiveDate`] can represent.
    pub fn at_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), day)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.at_day(1)
    }

    /// Does `date` fall into this month?
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }
}

impl Default for YearMonth {
    fn default() -> Self {
        Self::current()
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month.number_from_month())
            .cmp(&(other.year, other.month.number_from_month()))
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number_from_month())
    }
}
