use chrono::{Datelike, Days, Months, NaiveDate};

pub const MONTH_GRID_LEN: usize = 42;
pub const WEEK_GRID_LEN: usize = 7;

/// The 6x7 grid of days shown for a month view: always 42 consecutive days
/// starting on the Sunday at or before the 1st of the anchor's month, so the
/// anchor month is fully contained and padded with adjacent-month days.
pub fn month_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let offset = first.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(offset)).unwrap_or(first);
    consecutive_days(start, MONTH_GRID_LEN)
}

/// The 7 days of the anchor's week, Sunday-aligned.
pub fn week_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let offset = anchor.weekday().num_days_from_sunday() as u64;
    let start = anchor.checked_sub_days(Days::new(offset)).unwrap_or(anchor);
    consecutive_days(start, WEEK_GRID_LEN)
}

pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    let first = first_of_month(anchor);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

pub fn previous_month(anchor: NaiveDate) -> NaiveDate {
    let first = first_of_month(anchor);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_week(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_add_days(Days::new(7)).unwrap_or(anchor)
}

pub fn previous_week(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_sub_days(Days::new(7)).unwrap_or(anchor)
}

pub fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

fn consecutive_days(start: NaiveDate, len: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(len);
    let mut current = start;
    for _ in 0..len {
        days.push(current);
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }
    days
}
