// Date utility functions
// Pure month-grid arithmetic; months are zero-indexed 0-11 throughout

use chrono::{Datelike, Local, NaiveDate};

pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of days in the given month: the predecessor of the first day of
/// the following month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("previous day exists")
        .day()
}

/// Weekday index of day 1 of the month, with 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("valid calendar date")
        .weekday()
        .num_days_from_sunday()
}

/// Canonical `YYYY-MM-DD` cell tag, month and day zero-padded.
pub fn cell_date(year: i32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}

/// One position in the month grid: leading padding before day 1, or a
/// calendar date tagged with its canonical string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    Blank,
    Date { day: u32, iso: String },
}

/// The flat ordered cell sequence for a month: leading blanks so day 1
/// lands under its weekday column, then one cell per day. No trailing
/// padding is added; the last week row may be short.
pub fn month_cells(year: i32, month0: u32) -> Vec<DayCell> {
    let blanks = first_weekday_of_month(year, month0);
    let days = days_in_month(year, month0);
    let mut cells = Vec::with_capacity((blanks + days) as usize);
    for _ in 0..blanks {
        cells.push(DayCell::Blank);
    }
    for day in 1..=days {
        cells.push(DayCell::Date {
            day,
            iso: cell_date(year, month0, day),
        });
    }
    cells
}

/// The month currently shown in the grid. Navigable independently of the
/// event cache and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMonth {
    pub year: i32,
    pub month0: u32,
}

impl DisplayMonth {
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month0: today.month0(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// Heading text, e.g. "January 2024".
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .expect("valid calendar date")
            .format("%B %Y")
            .to_string()
    }
}
