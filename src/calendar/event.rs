use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_COLOR: &str = "#6366f1";

pub const EVENT_COLORS: [(&str, &str); 8] = [
    ("Blue", "#3b82f6"),
    ("Green", "#10b981"),
    ("Red", "#ef4444"),
    ("Amber", "#f59e0b"),
    ("Purple", "#8b5cf6"),
    ("Pink", "#ec4899"),
    ("Cyan", "#06b6d4"),
    ("Orange", "#f97316"),
];

pub const EVENT_CATEGORIES: [&str; 6] = [
    "Work",
    "Personal",
    "Meeting",
    "Reminder",
    "Health",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl CalendarEvent {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn overlaps(&self, other: &CalendarEvent) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate event with every field optional. Used both for creation and
/// as a patch merged over an existing event before re-validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl EventDraft {
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: event.description.clone(),
            start: Some(event.start),
            end: Some(event.end),
            color: event.color.clone(),
            category: event.category.clone(),
        }
    }

    /// Applies this draft as a patch on top of `event`. Fields left `None`
    /// keep the event's current value.
    pub fn merged_over(&self, event: &CalendarEvent) -> Self {
        Self {
            title: self.title.clone().or_else(|| Some(event.title.clone())),
            description: self.description.clone().or_else(|| event.description.clone()),
            start: self.start.or(Some(event.start)),
            end: self.end.or(Some(event.end)),
            color: self.color.clone().or_else(|| event.color.clone()),
            category: self.category.clone().or_else(|| event.category.clone()),
        }
    }

    /// Builds the final event. Returns `None` when a required field is
    /// missing; callers validate first, so `None` signals a skipped gate.
    pub fn into_event(self, id: String) -> Option<CalendarEvent> {
        let title = self.title?;
        let start = self.start?;
        let end = self.end?;

        Some(CalendarEvent {
            id,
            title,
            description: self.description,
            start,
            end,
            color: self.color,
            category: self.category,
        })
    }
}
