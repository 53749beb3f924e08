use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::calendar::grid;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
    pub event_count: usize,
}

/// Six Sunday-aligned week rows covering the anchor month, with
/// adjacent-month padding cells marked `in_month: false`.
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let anchor = state.current_date;
    let days = grid::month_grid(anchor);

    let weeks = days
        .chunks(grid::WEEK_GRID_LEN)
        .map(|chunk| WeekRow {
            days: chunk
                .iter()
                .map(|&date| DayCell {
                    date,
                    in_month: date.year() == anchor.year() && date.month() == anchor.month(),
                    is_selected: state.selected_date == Some(date),
                    is_today: date == today,
                    event_count: state.events_for_date(date).len(),
                })
                .collect(),
        })
        .collect();

    MonthLayout {
        year: anchor.year(),
        month: anchor.month(),
        weeks,
    }
}
