use chrono::{NaiveDate, Weekday};
use egui::{Button, Color32, Grid, Id, InnerResponse, RichText, Ui, Vec2, Visuals};

use crate::{CalendarEvent, DayCell, DayGrid, WeekdayCaptions, YearMonth};

/// A sheet with all days of one month, a column per weekday.
///
/// Clicking a day selects it. Today's date is drawn in red.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DayChooser {
    year_month: YearMonth,
    captions: WeekdayCaptions,
    selected: Option<NaiveDate>,

    /// Overrides the clock.
    today: Option<NaiveDate>,
}

impl Default for DayChooser {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}

impl DayChooser {
    /// Size of a day button.
    pub const CELL_SIZE: Vec2 = Vec2::new(28.0, 20.0);

    pub fn new(year_month: YearMonth) -> Self {
        Self {
            year_month,
            captions: WeekdayCaptions::default(),
            selected: None,
            today: None,
        }
    }

    /// Pretend today is `today`, e.g. for tests.
    #[inline]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// `None` goes back to asking the clock.
    #[inline]
    pub fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(crate::local_today)
    }

    #[inline]
    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// Show another month. Does not produce an event.
    pub fn set_year_month(&mut self, year_month: YearMonth) {
        if year_month != self.year_month {
            log::debug!("Day sheet: {} -> {year_month}", self.year_month);
            self.year_month = year_month;
        }
    }

    #[inline]
    pub fn weekday_captions(&self) -> &WeekdayCaptions {
        &self.captions
    }

    pub fn set_weekday_caption(&mut self, weekday: Weekday, caption: impl Into<String>) {
        self.captions.set(weekday, caption);
    }

    pub fn set_weekday_captions(&mut self, captions: WeekdayCaptions) {
        self.captions = captions;
    }

    /// Anything but exactly seven captions is ignored.
    pub fn set_weekday_captions_from_slice<S: AsRef<str>>(&mut self, captions: &[S]) {
        match WeekdayCaptions::try_from_slice(captions) {
            Ok(captions) => self.captions = captions,
            Err(err) => log::debug!("Ignoring weekday captions: {err}"),
        }
    }

    #[inline]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Does not produce an event.
    #[inline]
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected = date;
    }

    /// The layout of the month currently shown.
    pub fn grid(&self) -> DayGrid {
        DayGrid::new(self.year_month, Some(self.today()))
    }

    /// Select `day` of the displayed month.
    ///
    /// Returns `None` if the month has no such day.
    pub fn click_day(&mut self, day: u32) -> Option<CalendarEvent> {
        let new = self.year_month.at_day(day)?;
        let old = self.selected.replace(new);
        Some(CalendarEvent::DateSelected { old, new })
    }

    /// The inner value is the date the user clicked this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        id_salt: impl Into<Id>,
    ) -> InnerResponse<Option<CalendarEvent>> {
        profiling::function_scope!();
        let grid = self.grid();
        let mut clicked = None;

        let response = Grid::new(id_salt.into().with("days"))
            .num_columns(DayGrid::COLUMNS)
            .min_col_width(Self::CELL_SIZE.x)
            .spacing(Vec2::splat(2.0))
            .show(ui, |ui| {
                for caption in self.captions.iter() {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(caption).strong());
                    });
                }
                ui.end_row();

                for row in grid.rows() {
                    for slot in row {
                        let Some(cell) = slot else {
                            ui.allocate_space(Self::CELL_SIZE);
                            continue;
                        };

                        let mut text = RichText::new(cell.day.to_string());
                        if let Some(color) = day_text_color(cell, ui.visuals()) {
                            text = text.color(color).strong();
                        }
                        let button = Button::new(text)
                            .min_size(Self::CELL_SIZE)
                            .selected(self.selected == Some(cell.date));
                        if ui.add(button).clicked() {
                            clicked = Some(cell.day);
                        }
                    }
                    ui.end_row();
                }
            })
            .response;

        InnerResponse::new(clicked.and_then(|day| self.click_day(day)), response)
    }
}

/// Today stands out in the error colour, other days use the default text colour.
fn day_text_color(cell: &DayCell, visuals: &Visuals) -> Option<Color32> {
    cell.is_today.then_some(visuals.error_fg_color)
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn click_resolves_full_date() {
        let mut chooser = DayChooser::new(YearMonth::new(2017, Month::December));
        assert_eq!(
            chooser.click_day(24),
            Some(CalendarEvent::DateSelected {
                old: None,
                new: date(2017, 12, 24)
            })
        );
        assert_eq!(
            chooser.click_day(31),
            Some(CalendarEvent::DateSelected {
                old: Some(date(2017, 12, 24)),
                new: date(2017, 12, 31)
            })
        );
        assert_eq!(chooser.selected_date(), Some(date(2017, 12, 31)));
    }

    #[test]
    fn click_on_missing_day() {
        let mut chooser = DayChooser::new(YearMonth::new(2023, Month::February));
        assert_eq!(chooser.click_day(29), None);
        assert_eq!(chooser.click_day(0), None);
        assert_eq!(chooser.selected_date(), None);
    }

    #[test]
    fn grid_follows_year_month() {
        let mut chooser = DayChooser::new(YearMonth::new(2024, Month::January));
        assert_eq!(chooser.grid().len(), 31);
        chooser.set_year_month(YearMonth::new(2024, Month::February));
        let grid = chooser.grid();
        assert_eq!(grid.year_month(), YearMonth::new(2024, Month::February));
        assert_eq!(grid.len(), 29);
    }

    #[test]
    fn today_override() {
        let today = date(2017, 12, 20);
        let chooser = DayChooser::new(YearMonth::new(2017, Month::December)).with_today(today);
        assert_eq!(chooser.today(), today);
        assert_eq!(chooser.grid().today_cell().map(|c| c.date), Some(today));
    }

    #[test]
    fn only_today_is_drawn_in_the_highlight_colour() {
        let today = date(2017, 12, 20);
        let grid = DayChooser::new(YearMonth::new(2017, Month::December))
            .with_today(today)
            .grid();

        for visuals in [Visuals::dark(), Visuals::light()] {
            let highlighted: Vec<u32> = grid
                .cells()
                .iter()
                .filter(|cell| day_text_color(cell, &visuals) == Some(visuals.error_fg_color))
                .map(|cell| cell.day)
                .collect();
            assert_eq!(highlighted, vec![20]);
            assert!(
                grid.cells()
                    .iter()
                    .filter(|cell| !cell.is_today)
                    .all(|cell| day_text_color(cell, &visuals).is_none()),
                "other days keep the default colour"
            );
        }
    }

    #[test]
    fn captions() {
        let mut chooser = DayChooser::default();
        chooser.set_weekday_caption(Weekday::Sun, "So");
        assert_eq!(chooser.weekday_captions().get(Weekday::Sun), "So");

        chooser.set_weekday_captions_from_slice(&["x"; 8]);
        assert_eq!(chooser.weekday_captions().get(Weekday::Sun), "So", "ignored");

        chooser.set_weekday_captions_from_slice(&["1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(chooser.weekday_captions().get(Weekday::Wed), "3");
    }
}
