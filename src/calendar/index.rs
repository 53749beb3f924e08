use chrono::{NaiveDate, NaiveDateTime};

use super::event::CalendarEvent;

/// Events relevant to a calendar day: those starting on it, ending on it, or
/// whose interval overlaps any part of it. The third arm is what lets a
/// multi-day event show up on the days it merely passes through.
pub fn events_on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    let Some(day_start) = date.and_hms_opt(0, 0, 0) else {
        return Vec::new();
    };
    let Some(day_end) = date.and_hms_milli_opt(23, 59, 59, 999) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| {
            event.start.date() == date
                || event.end.date() == date
                || (event.start <= day_end && event.end >= day_start)
        })
        .collect()
}

/// Stable ascending sort by start time. Events with identical starts keep
/// their input order; callers rely on that for deterministic layout.
pub fn sort_by_start_time<'a>(events: &[&'a CalendarEvent]) -> Vec<&'a CalendarEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.start);
    sorted
}

/// Partitions events into maximal clusters of transitively overlapping
/// intervals, for side-by-side column layout. Single pass over the sorted
/// events, tracking the max end seen in the current cluster.
pub fn group_overlapping<'a>(events: &[&'a CalendarEvent]) -> Vec<Vec<&'a CalendarEvent>> {
    if events.is_empty() {
        return Vec::new();
    }

    let sorted = sort_by_start_time(events);
    let mut groups: Vec<Vec<&CalendarEvent>> = Vec::new();
    let mut current: Vec<&CalendarEvent> = Vec::new();
    let mut group_end: Option<NaiveDateTime> = None;

    for event in sorted {
        if let Some(end) = group_end
            && event.start >= end
            && !current.is_empty()
        {
            groups.push(std::mem::take(&mut current));
            group_end = None;
        }

        current.push(event);
        if group_end.is_none_or(|end| event.end > end) {
            group_end = Some(event.end);
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event_at(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        event_spanning(id, day, start, day, end)
    }

    fn event_spanning(
        id: &str,
        start_day: NaiveDate,
        start: (u32, u32),
        end_day: NaiveDate,
        end: (u32, u32),
    ) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            start: start_day.and_hms_opt(start.0, start.1, 0).unwrap(),
            end: end_day.and_hms_opt(end.0, end.1, 0).unwrap(),
            color: None,
            category: None,
        }
    }

    fn ids<'a>(events: &[&'a CalendarEvent]) -> Vec<&'a str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn events_on_date_matches_start_day() {
        let day = date(2025, 1, 15);
        let other = date(2025, 1, 16);
        let events = vec![
            event_at("e1", day, (9, 0), (10, 0)),
            event_at("e2", other, (9, 0), (10, 0)),
        ];

        let found = events_on_date(&events, day);
        assert_eq!(ids(&found), vec!["e1"]);
    }

    #[test]
    fn events_on_date_matches_end_day() {
        let events = vec![event_spanning(
            "e1",
            date(2025, 1, 14),
            (22, 0),
            date(2025, 1, 15),
            (1, 0),
        )];

        let found = events_on_date(&events, date(2025, 1, 15));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn events_on_date_matches_day_inside_a_span() {
        // Starts before and ends after the queried day; only the interval
        // overlap arm can catch it.
        let events = vec![event_spanning(
            "e1",
            date(2025, 1, 14),
            (12, 0),
            date(2025, 1, 17),
            (12, 0),
        )];

        let found = events_on_date(&events, date(2025, 1, 15));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn events_on_date_is_idempotent_for_single_day_events() {
        let day = date(2025, 1, 15);
        let events = vec![
            event_at("e1", day, (9, 0), (10, 0)),
            event_at("e2", day, (11, 0), (12, 0)),
        ];

        let once: Vec<CalendarEvent> = events_on_date(&events, day)
            .into_iter()
            .cloned()
            .collect();
        let twice = events_on_date(&once, day);

        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn sort_by_start_time_orders_ascending() {
        let day = date(2025, 1, 15);
        let e1 = event_at("e1", day, (14, 0), (15, 0));
        let e2 = event_at("e2", day, (9, 0), (10, 0));
        let e3 = event_at("e3", day, (11, 0), (12, 0));

        let sorted = sort_by_start_time(&[&e1, &e2, &e3]);
        assert_eq!(ids(&sorted), vec!["e2", "e3", "e1"]);
    }

    #[test]
    fn sort_by_start_time_is_stable_for_equal_starts() {
        let day = date(2025, 1, 15);
        let e1 = event_at("e1", day, (9, 0), (11, 0));
        let e2 = event_at("e2", day, (9, 0), (9, 30));
        let e3 = event_at("e3", day, (9, 0), (10, 0));

        let sorted = sort_by_start_time(&[&e1, &e2, &e3]);
        assert_eq!(ids(&sorted), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn group_overlapping_of_nothing_is_empty() {
        assert!(group_overlapping(&[]).is_empty());
    }

    #[test]
    fn disjoint_events_form_singleton_groups() {
        let day = date(2025, 1, 15);
        let e1 = event_at("e1", day, (9, 0), (9, 30));
        let e2 = event_at("e2", day, (10, 0), (10, 30));
        let e3 = event_at("e3", day, (11, 0), (11, 30));

        let groups = group_overlapping(&[&e1, &e2, &e3]);
        assert_eq!(groups.len(), 3);
        for group in &groups {
            assert_eq!(group.len(), 1);
        }
    }

    #[test]
    fn overlapping_events_share_a_group() {
        let day = date(2025, 1, 15);
        let a = event_at("a", day, (9, 0), (9, 30));
        let b = event_at("b", day, (9, 15), (10, 0));
        let c = event_at("c", day, (11, 0), (11, 30));

        let groups = group_overlapping(&[&a, &b, &c]);

        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[0]), vec!["a", "b"]);
        assert_eq!(ids(&groups[1]), vec!["c"]);
    }

    #[test]
    fn chained_overlaps_stay_in_one_group() {
        // b bridges a and c even though a and c never intersect directly.
        let day = date(2025, 1, 15);
        let a = event_at("a", day, (9, 0), (10, 0));
        let b = event_at("b", day, (9, 30), (11, 0));
        let c = event_at("c", day, (10, 30), (12, 0));

        let groups = group_overlapping(&[&a, &b, &c]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn back_to_back_events_do_not_group() {
        let day = date(2025, 1, 15);
        let a = event_at("a", day, (9, 0), (10, 0));
        let b = event_at("b", day, (10, 0), (11, 0));

        let groups = group_overlapping(&[&a, &b]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_input_order_does_not_matter() {
        let day = date(2025, 1, 15);
        let a = event_at("a", day, (9, 0), (9, 30));
        let b = event_at("b", day, (9, 15), (10, 0));

        let forward = group_overlapping(&[&a, &b]);
        let reverse = group_overlapping(&[&b, &a]);

        assert_eq!(forward.len(), 1);
        assert_eq!(ids(&forward[0]), ids(&reverse[0]));
    }
}
