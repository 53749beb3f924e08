use chrono::NaiveDate;

use crate::app::AppState;
use crate::calendar::layout::{EventRect, SlotGeometry};
use crate::calendar::{grid, index, layout};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub blocks: Vec<EventBlock>,
}

/// One positioned event on a day column: a vertical pixel span plus a
/// horizontal slot within its overlap group.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event_id: String,
    pub title: String,
    pub color: Option<String>,
    pub start_label: String,
    pub end_label: String,
    pub rect: EventRect,
    pub slot: SlotGeometry,
}

pub fn calculate_layout(state: &AppState, today: NaiveDate, pixels_per_hour: f64) -> WeekLayout {
    let week = grid::week_grid(state.current_date);
    let week_start = week.first().copied().unwrap_or(state.current_date);

    let days = week
        .into_iter()
        .map(|date| {
            let events = index::events_on_date(state.store.events(), date);
            let groups = index::group_overlapping(&events);

            let mut blocks = Vec::new();
            for group in &groups {
                for (slot_index, event) in group.iter().enumerate() {
                    blocks.push(EventBlock {
                        event_id: event.id.clone(),
                        title: event.title.clone(),
                        color: event.color.clone(),
                        start_label: event.start.format("%H:%M").to_string(),
                        end_label: event.end.format("%H:%M").to_string(),
                        rect: layout::position(event, pixels_per_hour),
                        slot: layout::slot_geometry(group.len(), slot_index),
                    });
                }
            }

            DayColumn {
                date,
                is_selected: state.selected_date == Some(date),
                is_today: date == today,
                blocks,
            }
        })
        .collect();

    WeekLayout { week_start, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventDraft, EventStore, SequentialIdGenerator};
    use chrono::{Datelike, Weekday};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_at(anchor: NaiveDate) -> AppState {
        let mut app = AppState::new(EventStore::new(Box::new(SequentialIdGenerator::default())));
        app.current_date = anchor;
        app
    }

    fn add_event(app: &mut AppState, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> String {
        let draft = EventDraft {
            title: Some("Event".to_string()),
            start: day.and_hms_opt(start.0, start.1, 0),
            end: day.and_hms_opt(end.0, end.1, 0),
            ..EventDraft::default()
        };
        app.store.add(draft).unwrap().id
    }

    #[test]
    fn week_layout_spans_sunday_to_saturday() {
        // 2025-01-15 is a Wednesday.
        let app = app_at(date(2025, 1, 15));
        let layout = calculate_layout(&app, date(2025, 1, 15), 56.0);

        assert_eq!(layout.days.len(), 7);
        assert_eq!(layout.week_start, date(2025, 1, 12));
        assert_eq!(layout.days[0].date.weekday(), Weekday::Sun);
        assert_eq!(layout.days[6].date.weekday(), Weekday::Sat);
    }

    #[test]
    fn events_land_on_their_day_column() {
        let mut app = app_at(date(2025, 1, 15));
        add_event(&mut app, date(2025, 1, 15), (9, 0), (10, 0));
        add_event(&mut app, date(2025, 1, 16), (14, 0), (15, 0));

        let layout = calculate_layout(&app, date(2025, 1, 15), 56.0);

        // Wednesday is column 3 in a Sunday-aligned week.
        assert_eq!(layout.days[3].blocks.len(), 1);
        assert_eq!(layout.days[4].blocks.len(), 1);
        assert!(layout.days[0].blocks.is_empty());
    }

    #[test]
    fn block_rect_uses_the_hour_height() {
        let mut app = app_at(date(2025, 1, 15));
        add_event(&mut app, date(2025, 1, 15), (9, 0), (9, 30));

        let layout = calculate_layout(&app, date(2025, 1, 15), 64.0);
        let block = &layout.days[3].blocks[0];

        assert_eq!(block.rect.top, 576.0);
        assert_eq!(block.rect.height, 32.0);
        assert_eq!(block.start_label, "09:00");
        assert_eq!(block.end_label, "09:30");
    }

    #[test]
    fn overlapping_events_share_slot_widths() {
        let mut app = app_at(date(2025, 1, 15));
        let day = date(2025, 1, 15);
        add_event(&mut app, day, (9, 0), (9, 30));
        add_event(&mut app, day, (9, 15), (10, 0));
        add_event(&mut app, day, (11, 0), (11, 30));

        let layout = calculate_layout(&app, day, 56.0);
        let blocks = &layout.days[3].blocks;
        assert_eq!(blocks.len(), 3);

        // The two 9 o'clock events split the column; the 11 o'clock one has
        // it to itself.
        assert_eq!(blocks[0].slot.width_pct, 50.0);
        assert_eq!(blocks[0].slot.left_pct, 0.0);
        assert_eq!(blocks[1].slot.width_pct, 50.0);
        assert_eq!(blocks[1].slot.left_pct, 50.0);
        assert_eq!(blocks[2].slot.width_pct, 100.0);
    }

    #[test]
    fn selected_and_today_flags_mark_columns() {
        let mut app = app_at(date(2025, 1, 15));
        app.select_date(Some(date(2025, 1, 13)));

        let layout = calculate_layout(&app, date(2025, 1, 14), 56.0);

        assert!(layout.days[1].is_selected);
        assert!(layout.days[2].is_today);
        assert!(!layout.days[3].is_selected);
    }
}
