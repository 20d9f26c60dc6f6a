//! Month grid for the appointment date picker.
//!
//! All functions take `today` explicitly so the past-date rule can be
//! exercised against a fixed clock; [`today`] reads the local one.

use chrono::{Datelike, Days, Local, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
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
];

const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

/// Number of days in `month` (1-based), taken as the day before the first
/// of the following month so leap years come from the date arithmetic.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .filter(|last| last.month() == month)
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday index of the first day of the month, Sunday = 0.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn leading_blanks(&self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    // Months outside chrono's representable range leave the cursor where it is.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;

        i32::try_from(year)
            .ok()
            .and_then(|year| Self::new(year, month))
            .unwrap_or(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub day_of_month: u32,
    pub date: NaiveDate,
    pub is_past: bool,
    pub is_selected: bool,
}

impl CalendarDay {
    pub fn iso_date(&self) -> String {
        to_iso(self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

#[derive(Debug, Clone)]
pub struct Calendar {
    displayed: MonthCursor,
    cursor: u32,
}

impl Calendar {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed: MonthCursor::containing(today),
            cursor: today.day(),
        }
    }

    pub fn displayed(&self) -> MonthCursor {
        self.displayed
    }

    pub fn cursor_day(&self) -> u32 {
        self.cursor
    }

    pub fn shift_month(&mut self, delta: i32) {
        self.displayed = self.displayed.shift(delta);
        self.cursor = self.cursor.clamp(1, self.displayed.days_in_month().max(1));
    }

    pub fn move_cursor(&mut self, days: i64) {
        let Some(current) = self.displayed.date(self.cursor) else {
            return;
        };

        let moved = if days >= 0 {
            current.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            current.checked_sub_days(Days::new(days.unsigned_abs()))
        };

        if let Some(date) = moved {
            self.displayed = MonthCursor::containing(date);
            self.cursor = date.day();
        }
    }

    pub fn cells(&self, selected: Option<&str>, today: NaiveDate) -> Vec<CalendarCell> {
        let blanks = self.displayed.leading_blanks();
        let total = self.displayed.days_in_month();
        let selected = selected.and_then(parse_iso);

        let mut cells = Vec::with_capacity((blanks + total) as usize);
        cells.extend((0..blanks).map(|_| CalendarCell::Blank));
        cells.extend((1..=total).filter_map(|day| {
            self.displayed.date(day).map(|date| {
                CalendarCell::Day(CalendarDay {
                    day_of_month: day,
                    date,
                    is_past: date < today,
                    is_selected: selected == Some(date),
                })
            })
        }));
        cells
    }

    /// ISO date for `day` of the displayed month, or `None` when that day is
    /// before `today` or does not exist.
    pub fn select_day(&self, day: u32, today: NaiveDate) -> Option<String> {
        self.displayed
            .date(day)
            .filter(|date| *date >= today)
            .map(to_iso)
    }

    pub fn select_cursor(&self, today: NaiveDate) -> Option<String> {
        self.select_day(self.cursor, today)
    }
}
