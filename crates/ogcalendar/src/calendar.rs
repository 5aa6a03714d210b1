use chrono::{Month, NaiveDate, Weekday};
use egui::{Id, InnerResponse, Ui};

use crate::{
    CalendarEvent, DayChooser, EventKind, MonthChooser, MonthNames, Subscribers,
    SubscriptionId, WeekdayCaptions, YearChooser, YearMonth,
};

/// Choose a year, a month and a day.
///
/// Month and year choosers sit on top, the day sheet below.
/// Rolling the month over from December to January moves to the next year,
/// and back from January to December to the previous year.
///
/// Either look at what [`Self::show`] returns each frame, or [`Self::subscribe`] to
/// [`EventKind::DateSelected`], [`EventKind::MonthSelected`] and [`EventKind::YearSelected`].
///
/// ```
/// # use ogcalendar::{Calendar, CalendarEvent, YearMonth};
/// # use chrono::Month;
/// let mut calendar = Calendar::new(YearMonth::new(2017, Month::December));
/// let events = calendar.click_day(24);
/// assert!(matches!(events[..], [CalendarEvent::DateSelected { old: None, .. }]));
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Calendar {
    id_salt: Id,
    month_chooser: MonthChooser,
    year_chooser: YearChooser,
    day_chooser: DayChooser,

    #[cfg_attr(feature = "serde", serde(skip))]
    subscribers: Subscribers,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}

impl Calendar {
    /// Show the given year and month.
    pub fn new(year_month: YearMonth) -> Self {
        let year_chooser = YearChooser::new(year_month.year());
        Self {
            id_salt: Id::new("ogcalendar"),
            month_chooser: MonthChooser::new(year_month.month()),
            // The year chooser may have clamped the year.
            day_chooser: DayChooser::new(year_month.with_year(year_chooser.current_year())),
            year_chooser,
            subscribers: Subscribers::default(),
        }
    }

    /// Must be set if there is more than one calendar in the same [`Ui`].
    #[inline]
    pub fn with_id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Pretend today is `today` when highlighting the current day.
    #[inline]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.day_chooser.set_today(Some(today));
        self
    }

    // ------------------------------------------------------------------------
    // State

    pub fn current_year_month(&self) -> YearMonth {
        YearMonth::new(
            self.year_chooser.current_year(),
            self.month_chooser.current_month(),
        )
    }

    /// Show another year and month. Does not produce any events.
    pub fn set_current_date(&mut self, year_month: YearMonth) {
        self.month_chooser.set_current_month(year_month.month());
        self.year_chooser.set_current_year(year_month.year());
        self.sync_day_chooser();
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.day_chooser.selected_date()
    }

    /// Select `date` and show its month. Does not produce any events.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.day_chooser.set_selected_date(date);
        if let Some(date) = date {
            self.set_current_date(YearMonth::from_date(date));
        }
    }

    pub fn month_chooser(&self) -> &MonthChooser {
        &self.month_chooser
    }

    pub fn year_chooser(&self) -> &YearChooser {
        &self.year_chooser
    }

    pub fn day_chooser(&self) -> &DayChooser {
        &self.day_chooser
    }

    // ------------------------------------------------------------------------
    // Captions

    pub fn set_weekday_caption(&mut self, weekday: Weekday, caption: impl Into<String>) {
        self.day_chooser.set_weekday_caption(weekday, caption);
    }

    pub fn set_weekday_captions(&mut self, captions: WeekdayCaptions) {
        self.day_chooser.set_weekday_captions(captions);
    }

    /// Anything but exactly seven captions (Monday first) is ignored.
    pub fn set_weekday_captions_from_slice<S: AsRef<str>>(&mut self, captions: &[S]) {
        self.day_chooser.set_weekday_captions_from_slice(captions);
    }

    pub fn set_month_names(&mut self, names: MonthNames) {
        self.month_chooser.set_month_names(names);
    }

    /// Anything but exactly twelve names (January first) is ignored.
    pub fn set_month_names_from_slice<S: AsRef<str>>(&mut self, names: &[S]) {
        self.month_chooser.set_month_names_from_slice(names);
    }

    // ------------------------------------------------------------------------
    // Subscriptions

    /// Call `callback` whenever an event of the given kind happens.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&CalendarEvent) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe(kind, callback)
    }

    /// Call `callback` on every event.
    pub fn subscribe_all(
        &mut self,
        callback: impl FnMut(&CalendarEvent) + 'static,
    ) -> SubscriptionId {
        self.subscribers.subscribe_all(callback)
    }

    /// Returns `false` if there was no such subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ------------------------------------------------------------------------
    // Interaction
    //
    // These do what the controls do when clicked: the change is reconciled and
    // subscribers are notified. Each returns the events it produced.

    /// Pick a month from the combo box.
    pub fn select_month(&mut self, month: Month) -> Vec<CalendarEvent> {
        let event = self.month_chooser.select(month);
        self.dispatch(event)
    }

    /// The month spinner's "up".
    pub fn step_month_forward(&mut self) -> Vec<CalendarEvent> {
        let event = self.month_chooser.step_forward();
        self.dispatch(Some(event))
    }

    /// The month spinner's "down".
    pub fn step_month_backward(&mut self) -> Vec<CalendarEvent> {
        let event = self.month_chooser.step_backward();
        self.dispatch(Some(event))
    }

    /// Type a year.
    pub fn select_year(&mut self, year: i32) -> Vec<CalendarEvent> {
        let event = self.year_chooser.select(year);
        self.dispatch(event)
    }

    /// The year spinner's "up".
    pub fn increment_year(&mut self) -> Vec<CalendarEvent> {
        let event = self.year_chooser.increment();
        self.dispatch(event)
    }

    /// The year spinner's "down".
    pub fn decrement_year(&mut self) -> Vec<CalendarEvent> {
        let event = self.year_chooser.decrement();
        self.dispatch(event)
    }

    /// Click a day of the displayed month.
    pub fn click_day(&mut self, day: u32) -> Vec<CalendarEvent> {
        let event = self.day_chooser.click_day(day);
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: Option<CalendarEvent>) -> Vec<CalendarEvent> {
        let Some(event) = event else {
            return Vec::new();
        };
        self.reconcile(&event);
        self.subscribers.notify(&event);
        vec![event]
    }

    /// Bring the other choosers in line with a change made in one of them.
    fn reconcile(&mut self, event: &CalendarEvent) {
        match *event {
            CalendarEvent::MonthSelected { old, new } => {
                let year = self.year_chooser.current_year();
                match (old, new) {
                    (Month::December, Month::January) => {
                        log::debug!("Month rolled over into the next year");
                        self.year_chooser.set_current_year(year.saturating_add(1));
                    }
                    (Month::January, Month::December) => {
                        log::debug!("Month rolled back into the previous year");
                        self.year_chooser.set_current_year(year.saturating_sub(1));
                    }
                    _ => {}
                }
                self.sync_day_chooser();
            }
            CalendarEvent::YearSelected { .. } => self.sync_day_chooser(),
            CalendarEvent::DateSelected { .. } => {}
        }
    }

    fn sync_day_chooser(&mut self) {
        let year_month = self.current_year_month();
        self.day_chooser.set_year_month(year_month);
    }

    // ------------------------------------------------------------------------
    // Ui

    /// Show the calendar.
    ///
    /// The inner value holds what the user changed this frame, in the order it happened.
    /// Subscribers have already been notified of these.
    pub fn show(&mut self, ui: &mut Ui) -> InnerResponse<Vec<CalendarEvent>> {
        profiling::function_scope!();
        let id_salt = self.id_salt;

        ui.push_id(id_salt, |ui| {
            let mut events = Vec::new();

            ui.horizontal(|ui| {
                let month = self.month_chooser.show(ui, id_salt).inner;
                events.extend(self.dispatch(month));

                let year = self.year_chooser.show(ui, id_salt).inner;
                events.extend(self.dispatch(year));
            });

            // Reconciled above, so this is already the new month.
            let day = self.day_chooser.show(ui, id_salt).inner;
            events.extend(self.dispatch(day));

            events
        })
    }
}
