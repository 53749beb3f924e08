use chrono::Timelike;

use super::event::CalendarEvent;

/// Floor on rendered event height so short events stay visible and
/// clickable. Degenerate durations clamp here instead of failing; layout
/// must never be the thing that blocks rendering.
pub const MIN_EVENT_HEIGHT: f64 = 28.0;

/// At most this many side-by-side columns inside an overlap group. Events
/// past the third stack and clip instead of shrinking columns further.
pub const MAX_OVERLAP_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Vertical span of an event on a day column, in pixels from midnight.
/// Wall-clock minutes only; the date component plays no part here.
pub fn position(event: &CalendarEvent, pixels_per_hour: f64) -> EventRect {
    let start_minutes = f64::from(event.start.hour() * 60 + event.start.minute());
    let end_minutes = f64::from(event.end.hour() * 60 + event.end.minute());
    let duration_minutes = end_minutes - start_minutes;

    let top = start_minutes / 60.0 * pixels_per_hour;
    let height = (duration_minutes / 60.0 * pixels_per_hour).max(MIN_EVENT_HEIGHT);

    EventRect { top, height }
}

/// Horizontal slot for the event at `index` within an overlap group of
/// `group_len` events.
pub fn slot_geometry(group_len: usize, index: usize) -> SlotGeometry {
    let columns = group_len.clamp(1, MAX_OVERLAP_COLUMNS);
    let width_pct = 100.0 / columns as f64;

    SlotGeometry {
        left_pct: index as f64 * width_pct,
        width_pct,
    }
}
