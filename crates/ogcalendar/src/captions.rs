use chrono::{Month, Weekday};

/// Returned when a list of captions has the wrong number of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptionError {
    #[error("expected {expected} captions, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

fn to_array<const N: usize, S: AsRef<str>>(values: &[S]) -> Result<[String; N], CaptionError> {
    if values.len() != N {
        return Err(CaptionError::WrongLength {
            expected: N,
            actual: values.len(),
        });
    }
    Ok(std::array::from_fn(|i| values[i].as_ref().to_owned()))
}

fn owned<const N: usize>(values: [&str; N]) -> [String; N] {
    values.map(str::to_owned)
}

// ----------------------------------------------------------------------------

/// The seven column headers of the day sheet, Monday first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WeekdayCaptions([String; 7]);

impl WeekdayCaptions {
    /// Captions in ISO order: Monday, Tuesday, …, Sunday.
    pub fn new(captions: [String; 7]) -> Self {
        Self(captions)
    }

    /// # Errors
    /// If `captions` does not have exactly seven entries.
    pub fn try_from_slice<S: AsRef<str>>(captions: &[S]) -> Result<Self, CaptionError> {
        to_array(captions).map(Self)
    }

    pub fn english() -> Self {
        Self(owned(["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]))
    }

    pub fn german() -> Self {
        Self(owned(["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]))
    }

    pub fn get(&self, weekday: Weekday) -> &str {
        &self.0[weekday.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, weekday: Weekday, caption: impl Into<String>) {
        self.0[weekday.num_days_from_monday() as usize] = caption.into();
    }

    /// Monday first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for WeekdayCaptions {
    fn default() -> Self {
        Self::english()
    }
}

// ----------------------------------------------------------------------------

/// The month names shown by the [`crate::MonthChooser`], January first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MonthNames([String; 12]);

impl MonthNames {
    pub fn new(names: [String; 12]) -> Self {
        Self(names)
    }

    /// # Errors
    /// If `names` does not have exactly twelve entries.
    pub fn try_from_slice<S: AsRef<str>>(names: &[S]) -> Result<Self, CaptionError> {
        to_array(names).map(Self)
    }

    pub fn english() -> Self {
        Self(owned([
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ]))
    }

    pub fn german() -> Self {
        Self(owned([
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ]))
    }

    pub fn get(&self, month: Month) -> &str {
        &self.0[month.number_from_month() as usize - 1]
    }

    /// January first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::english()
    }
}
