use std::ops::RangeInclusive;

use chrono::{Datelike as _, NaiveDate};
use egui::{DragValue, Id, InnerResponse, Ui};

use crate::CalendarEvent;

/// The years a [`YearChooser`] accepts: every year [`NaiveDate`] can represent.
pub fn year_range() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

fn clamp_year(year: i32) -> i32 {
    let range = year_range();
    year.clamp(*range.start(), *range.end())
}

/// Pick a year with a spinner: arrow buttons or typing/dragging the number.
///
/// Values outside of [`year_range`] are clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct YearChooser {
    current: i32,
}

impl Default for YearChooser {
    fn default() -> Self {
        Self::new(crate::YearMonth::current().year())
    }
}

impl YearChooser {
    pub fn new(current: i32) -> Self {
        Self {
            current: clamp_year(current),
        }
    }

    #[inline]
    pub fn current_year(&self) -> i32 {
        self.current
    }

    /// Does not produce an event.
    pub fn set_current_year(&mut self, year: i32) {
        self.current = clamp_year(year);
    }

    /// Jump to `year` (clamped). No event if that does not change anything.
    pub fn select(&mut self, year: i32) -> Option<CalendarEvent> {
        let new = clamp_year(year);
        (new != self.current).then(|| {
            let old = std::mem::replace(&mut self.current, new);
            CalendarEvent::YearSelected { old, new }
        })
    }

    /// The spinner's "up".
    pub fn increment(&mut self) -> Option<CalendarEvent> {
        self.select(self.current.saturating_add(1))
    }

    /// The spinner's "down".
    pub fn decrement(&mut self) -> Option<CalendarEvent> {
        self.select(self.current.saturating_sub(1))
    }

    /// The inner value is the change the user made this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: impl Into<Id>,
    ) -> InnerResponse<Option<CalendarEvent>> {
        profiling::function_scope!();
        let id_salt = id_salt.into();

        ui.push_id(id_salt.with("year"), |ui| {
            ui.horizontal(|ui| {
                let mut event = None;

                if ui.button("-").on_hover_text("Previous year").clicked() {
                    event = self.decrement();
                }

                let mut value = self.current;
                ui.add(DragValue::new(&mut value).range(year_range()).speed(0.1));
                if let Some(changed) = self.select(value) {
                    event = Some(changed);
                }

                if ui.button("+").on_hover_text("Next year").clicked() {
                    event = self.increment();
                }

                event
            })
            .inner
        })
    }
}
