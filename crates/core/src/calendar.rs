use chrono::{Datelike, Duration, NaiveDate};

use super::obligation::DueSchedule;

/// Number of days in the given month, via the first of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_of_next - Duration::days(1)).day()
}

/// Places `day` in the given month, clamping to the month's last day when the
/// month is shorter. A rule anchored on the 31st therefore lands on Feb 28/29,
/// Apr 30, and so on, instead of rolling over into the next month.
pub fn clamped_day(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.max(1).min(days_in_month(year, month));
    // Cannot fail: day is within the month by construction.
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

/// Steps `date` forward or backward by whole months, re-clamping the day
/// against the destination month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    clamped_day(year, month as u32, date.day())
}

/// Recomputes a due schedule against a concrete month. Fixed calendar dates
/// pass through untouched; day-of-month schedules are clamped into the month.
pub fn due_date_in_month(due: &DueSchedule, year: i32, month: u32) -> NaiveDate {
    match due {
        DueSchedule::DayOfMonth(day) => clamped_day(year, month, *day),
        DueSchedule::On(date) => *date,
    }
}
