use std::collections::BTreeMap;
use std::fmt;

use super::event::EventDraft;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventField {
    Title,
    Description,
    Start,
    End,
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventField::Title => "title",
            EventField::Description => "description",
            EventField::Start => "start",
            EventField::End => "end",
        };
        f.write_str(name)
    }
}

/// Field-level diagnostics from validation. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<EventField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: EventField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: EventField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every rule independently so callers see all violated fields at
/// once, never just the first.
pub fn validate(draft: &EventDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    match &draft.title {
        Some(title) if !title.trim().is_empty() => {
            if title.chars().count() > MAX_TITLE_LEN {
                errors.insert(
                    EventField::Title,
                    "Title must be 100 characters or less",
                );
            }
        }
        _ => errors.insert(EventField::Title, "Title is required"),
    }

    if let Some(description) = &draft.description
        && description.chars().count() > MAX_DESCRIPTION_LEN
    {
        errors.insert(
            EventField::Description,
            "Description must be 500 characters or less",
        );
    }

    if draft.start.is_none() {
        errors.insert(EventField::Start, "Start date is required");
    }

    match (draft.start, draft.end) {
        (_, None) => errors.insert(EventField::End, "End date is required"),
        (Some(start), Some(end)) if end <= start => {
            errors.insert(EventField::End, "End time must be after start time");
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn datetime(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: Some("Team Standup".to_string()),
            description: Some("Daily sync".to_string()),
            start: Some(datetime(9, 0)),
            end: Some(datetime(10, 0)),
            color: None,
            category: None,
        }
    }

    #[test]
    fn valid_draft_produces_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn missing_title_is_required() {
        let mut draft = valid_draft();
        draft.title = None;

        let errors = validate(&draft);
        assert_eq!(errors.get(EventField::Title), Some("Title is required"));
    }

    #[test]
    fn whitespace_only_title_is_required() {
        let mut draft = valid_draft();
        draft.title = Some("   ".to_string());

        let errors = validate(&draft);
        assert_eq!(errors.get(EventField::Title), Some("Title is required"));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut draft = valid_draft();
        draft.title = Some("x".repeat(101));

        let errors = validate(&draft);
        assert_eq!(
            errors.get(EventField::Title),
            Some("Title must be 100 characters or less")
        );
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let mut draft = valid_draft();
        draft.title = Some("x".repeat(100));
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn missing_description_is_fine() {
        let mut draft = valid_draft();
        draft.description = None;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut draft = valid_draft();
        draft.description = Some("x".repeat(501));

        let errors = validate(&draft);
        assert_eq!(
            errors.get(EventField::Description),
            Some("Description must be 500 characters or less")
        );
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let mut draft = valid_draft();
        draft.end = draft.start;

        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(EventField::End),
            Some("End time must be after start time")
        );
    }

    #[test]
    fn all_violations_reported_together() {
        let draft = EventDraft {
            title: Some(String::new()),
            description: None,
            start: Some(datetime(9, 0)),
            end: Some(datetime(9, 0)),
            color: None,
            category: None,
        };

        let errors = validate(&draft);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(EventField::Title), Some("Title is required"));
        assert_eq!(
            errors.get(EventField::End),
            Some("End time must be after start time")
        );
    }

    #[test]
    fn missing_dates_are_both_reported() {
        let draft = EventDraft {
            title: Some("Meeting".to_string()),
            ..EventDraft::default()
        };

        let errors = validate(&draft);
        assert_eq!(errors.get(EventField::Start), Some("Start date is required"));
        assert_eq!(errors.get(EventField::End), Some("End date is required"));
    }

    #[test]
    fn mutating_end_to_start_breaks_a_valid_draft() {
        let mut draft = valid_draft();
        assert!(validate(&draft).is_empty());

        draft.end = draft.start;
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(EventField::End).is_some());
    }
}
