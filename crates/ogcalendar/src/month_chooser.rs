use chrono::Month;
use egui::{ComboBox, Id, InnerResponse, Ui};

use crate::{CalendarEvent, MonthNames, year_month::all_months};

/// Pick a month, either from a combo box or by stepping with the arrow buttons.
///
/// Stepping wraps around: one step forward from December is January.
/// The chooser does not know about years, see [`crate::Calendar`] for that.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MonthChooser {
    current: Month,
    names: MonthNames,
}

impl Default for MonthChooser {
    fn default() -> Self {
        Self::new(crate::YearMonth::current().month())
    }
}

impl MonthChooser {
    pub fn new(current: Month) -> Self {
        Self {
            current,
            names: MonthNames::default(),
        }
    }

    #[inline]
    pub fn current_month(&self) -> Month {
        self.current
    }

    /// Does not produce an event.
    #[inline]
    pub fn set_current_month(&mut self, month: Month) {
        self.current = month;
    }

    #[inline]
    pub fn month_names(&self) -> &MonthNames {
        &self.names
    }

    pub fn set_month_names(&mut self, names: MonthNames) {
        self.names = names;
    }

    /// Anything but exactly twelve names is ignored.
    pub fn set_month_names_from_slice<S: AsRef<str>>(&mut self, names: &[S]) {
        match MonthNames::try_from_slice(names) {
            Ok(names) => self.names = names,
            Err(err) => log::debug!("Ignoring month names: {err}"),
        }
    }

    /// Pick a month directly. No event if it is already the current one.
    pub fn select(&mut self, month: Month) -> Option<CalendarEvent> {
        (month != self.current).then(|| self.change_to(month))
    }

    /// The spinner's "up".
    pub fn step_forward(&mut self) -> CalendarEvent {
        self.change_to(self.current.succ())
    }

    /// The spinner's "down".
    pub fn step_backward(&mut self) -> CalendarEvent {
        self.change_to(self.current.pred())
    }

    fn change_to(&mut self, new: Month) -> CalendarEvent {
        let old = std::mem::replace(&mut self.current, new);
        CalendarEvent::MonthSelected { old, new }
    }

    /// Show the arrows and the combo box.
    ///
    /// The inner value is the change the user made this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: impl Into<Id>,
    ) -> InnerResponse<Option<CalendarEvent>> {
        profiling::function_scope!();
        let id_salt = id_salt.into();

        ui.horizontal(|ui| {
            let mut event = None;

            if ui.button("<").on_hover_text("Previous month").clicked() {
                event = Some(self.step_backward());
            }

            let mut chosen = self.current;
            ComboBox::from_id_salt(id_salt.with("month"))
                .selected_text(self.names.get(self.current))
                .show_ui(ui, |ui| {
                    for (month, name) in all_months().zip(self.names.iter()) {
                        ui.selectable_value(&mut chosen, month, name);
                    }
                });
            if let Some(changed) = self.select(chosen) {
                event = Some(changed);
            }

            if ui.button(">").on_hover_text("Next month").clicked() {
                event = Some(self.step_forward());
            }

            event
        })
    }
}
