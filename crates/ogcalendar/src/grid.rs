use chrono::{Datelike as _, NaiveDate, Weekday};

use crate::YearMonth;

/// One day in a [`DayGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,

    /// Day of month, starting at 1.
    pub day: u32,

    /// Week row, starting at 0.
    pub row: usize,

    /// 0 = Monday … 6 = Sunday.
    pub column: usize,

    pub is_today: bool,
}

impl DayCell {
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// The layout of one month on a seven column sheet, Monday in the first column.
///
/// Day 1 goes into the first row. Every following Monday starts a new row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGrid {
    year_month: YearMonth,
    cells: Vec<DayCell>,
    row_count: usize,
}

impl DayGrid {
    pub const COLUMNS: usize = 7;

    /// Lay out `year_month`. If `today` lies within it, that cell is marked.
    pub fn new(year_month: YearMonth, today: Option<NaiveDate>) -> Self {
        let mut cells = Vec::with_capacity(31);
        let mut row = 0;
        for day in 1..=year_month.length_of_month() {
            let Some(date) = year_month.at_day(day) else {
                // Outside of what chrono can represent.
                break;
            };
            let weekday = date.weekday();
            if weekday == Weekday::Mon && day != 1 {
                row += 1;
            }
            cells.push(DayCell {
                date,
                day,
                row,
                column: weekday.num_days_from_monday() as usize,
                is_today: Some(date) == today,
            });
        }
        let row_count = if cells.is_empty() { 0 } else { row + 1 };

        Self {
            year_month,
            cells,
            row_count,
        }
    }

    #[inline]
    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    /// One cell per day, in order.
    #[inline]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.get((day as usize).checked_sub(1)?)
    }

    /// Number of week rows (4..=6), not counting the header.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of day cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    /// Row by row, seven slots each. Slots before day 1 and after the last day are `None`.
    pub fn rows(&self) -> Vec<[Option<&DayCell>; Self::COLUMNS]> {
        let mut rows = vec![[None; Self::COLUMNS]; self.row_count];
        for cell in &self.cells {
            rows[cell.row][cell.column] = Some(cell);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;
    use crate::year_month::all_months;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_cell_per_day() {
        for year in [1900, 2000, 2017, 2023, 2024] {
            for month in all_months() {
                let ym = YearMonth::new(year, month);
                let grid = DayGrid::new(ym, None);
                assert_eq!(grid.len() as u32, ym.length_of_month(), "{ym}");
                for (i, cell) in grid.cells().iter().enumerate() {
                    assert_eq!(cell.day as usize, i + 1);
                }
            }
        }
    }

    #[test]
    fn columns_follow_iso_weekday() {
        for month in all_months() {
            let grid = DayGrid::new(YearMonth::new(2024, month), None);
            for cell in grid.cells() {
                assert_eq!(
                    cell.column,
                    cell.weekday().number_from_monday() as usize - 1,
                    "{}",
                    cell.date
                );
            }
        }
    }

    #[test]
    fn rows_advance_on_monday() {
        // December 2017 starts on a Friday and ends on a Sunday.
        let grid = DayGrid::new(YearMonth::new(2017, Month::December), None);
        assert_eq!(grid.cell(1).map(|c| (c.row, c.column)), Some((0, 4)));
        assert_eq!(grid.cell(3).map(|c| (c.row, c.column)), Some((0, 6)));
        assert_eq!(grid.cell(4).map(|c| (c.row, c.column)), Some((1, 0)));
        assert_eq!(grid.cell(31).map(|c| (c.row, c.column)), Some((4, 6)));
        assert_eq!(grid.row_count(), 5);
    }

    #[test]
    fn month_starting_on_monday_has_no_empty_first_row() {
        // January 2018 starts on a Monday.
        let grid = DayGrid::new(YearMonth::new(2018, Month::January), None);
        assert_eq!(grid.cell(1).map(|c| (c.row, c.column)), Some((0, 0)));
        assert_eq!(grid.cell(8).map(|c| c.row), Some(1));
    }

    #[test]
    fn row_counts() {
        // February 2021: Monday 1st to Sunday 28th, exactly four rows.
        assert_eq!(DayGrid::new(YearMonth::new(2021, Month::February), None).row_count(), 4);
        // May 2021 starts on a Saturday and has 31 days: six rows.
        assert_eq!(DayGrid::new(YearMonth::new(2021, Month::May), None).row_count(), 6);
    }

    #[test]
    fn rows_have_every_day_exactly_once() {
        let grid = DayGrid::new(YearMonth::new(2021, Month::May), None);
        let rows = grid.rows();
        assert_eq!(rows.len(), 6);
        let days: Vec<u32> = rows.iter().flatten().flatten().map(|c| c.day).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
        assert!(rows[0][0].is_none(), "Monday before the 1st is empty");
        assert!(rows[5][0].is_some(), "Monday the 31st");
        assert!(rows[5][1].is_none());
    }

    #[test]
    fn today_is_marked_once() {
        let ym = YearMonth::new(2017, Month::December);
        let grid = DayGrid::new(ym, Some(date(2017, 12, 20)));
        assert_eq!(grid.cells().iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(grid.today_cell().map(|c| c.day), Some(20));
    }

    #[test]
    fn today_in_another_month_is_not_marked() {
        let ym = YearMonth::new(2017, Month::December);
        for today in [date(2018, 12, 20), date(2017, 11, 20), date(2018, 1, 1)] {
            let grid = DayGrid::new(ym, Some(today));
            assert!(grid.today_cell().is_none(), "{today}");
        }
    }

    #[test]
    fn leap_day() {
        assert!(DayGrid::new(YearMonth::new(2024, Month::February), None).cell(29).is_some());
        assert!(DayGrid::new(YearMonth::new(2023, Month::February), None).cell(29).is_none());
        assert!(DayGrid::new(YearMonth::new(2023, Month::February), None).cell(0).is_none());
    }
}
