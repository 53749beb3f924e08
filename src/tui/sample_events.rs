use chrono::{Days, Local, NaiveDate};

use termcal::{app::AppState, calendar::EventDraft};

/// Seeds a spread of demo events around today so the views have something
/// to show on a first run.
pub fn add_sample_events(app: &mut AppState) {
    let today = Local::now().date_naive();

    let Some(tomorrow) = today.checked_add_days(Days::new(1)) else { return };
    let Some(in_two_days) = today.checked_add_days(Days::new(2)) else { return };
    let Some(in_three_days) = today.checked_add_days(Days::new(3)) else { return };
    let Some(yesterday) = today.checked_sub_days(Days::new(1)) else { return };

    let events: Vec<(&str, Option<&str>, NaiveDate, (u32, u32), (u32, u32), &str, &str)> = vec![
        (
            "Team Standup",
            Some("Daily sync with the development team"),
            today,
            (9, 0),
            (9, 30),
            "#3b82f6",
            "Meeting",
        ),
        (
            "Project Review",
            Some("Quarterly project review meeting"),
            today,
            (14, 0),
            (15, 30),
            "#10b981",
            "Work",
        ),
        (
            "Lunch with Client",
            None,
            tomorrow,
            (12, 0),
            (13, 30),
            "#f97316",
            "Meeting",
        ),
        (
            "Gym Session",
            Some("Weekly fitness routine"),
            in_two_days,
            (18, 0),
            (19, 30),
            "#ec4899",
            "Health",
        ),
        (
            "Sprint Planning",
            Some("Plan upcoming sprint tasks and priorities"),
            in_three_days,
            (10, 0),
            (12, 0),
            "#8b5cf6",
            "Work",
        ),
        (
            "Doctor Appointment",
            None,
            yesterday,
            (11, 0),
            (11, 45),
            "#ef4444",
            "Health",
        ),
    ];

    for (title, description, date, start, end, color, category) in events {
        let draft = EventDraft {
            title: Some(title.to_string()),
            description: description.map(String::from),
            start: date.and_hms_opt(start.0, start.1, 0),
            end: date.and_hms_opt(end.0, end.1, 0),
            color: Some(color.to_string()),
            category: Some(category.to_string()),
        };

        if let Err(e) = app.store.add(draft) {
            tracing::warn!("Skipping sample event '{}': {}", title, e);
        }
    }
}
