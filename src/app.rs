use chrono::{Datelike, Local, NaiveDate, Timelike};

use crate::calendar::validate::ValidationErrors;
use crate::calendar::{
    CalendarEvent, EVENT_CATEGORIES, EVENT_COLORS, EventDraft, EventStore, grid, index,
};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Week,
}

pub struct AppState {
    pub mode: Mode,
    pub view: ViewType,
    pub current_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub store: EventStore,
    pub theme: Theme,
    pub event_form: Option<EventForm>,
    pub selected_event_index: usize,
    pub pending_delete: Option<String>,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self {
            mode: Mode::Normal,
            view: ViewType::Month,
            current_date: Local::now().date_naive(),
            selected_date: None,
            store,
            theme: Theme::default(),
            event_form: None,
            selected_event_index: 0,
            pending_delete: None,
            status: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_view(mut self, view: ViewType) -> Self {
        self.view = view;
        self
    }

    /// The date the user is acting on: the selection when there is one,
    /// otherwise the anchor.
    pub fn cursor_date(&self) -> NaiveDate {
        self.selected_date.unwrap_or(self.current_date)
    }

    pub fn next_period(&mut self) {
        self.current_date = match self.view {
            ViewType::Month => grid::next_month(self.current_date),
            ViewType::Week => grid::next_week(self.current_date),
        };
    }

    pub fn previous_period(&mut self) {
        self.current_date = match self.view {
            ViewType::Month => grid::previous_month(self.current_date),
            ViewType::Week => grid::previous_week(self.current_date),
        };
    }

    pub fn go_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.current_date = today;
        self.select_date(Some(today));
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
        self.reset_event_selection();
    }

    /// Moves the selection by whole days; the anchor follows so the view
    /// always shows the cursor.
    pub fn move_cursor_days(&mut self, days: i64) {
        let cursor = self.cursor_date();
        let moved = if days >= 0 {
            cursor.checked_add_days(chrono::Days::new(days as u64))
        } else {
            cursor.checked_sub_days(chrono::Days::new(days.unsigned_abs()))
        };

        if let Some(date) = moved {
            self.current_date = date;
            self.select_date(Some(date));
        }
    }

    pub fn set_month(&mut self, month: u32) {
        if let Some(date) = NaiveDate::from_ymd_opt(self.current_date.year(), month, 1) {
            self.current_date = date;
        }
    }

    pub fn set_year(&mut self, year: i32) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, self.current_date.month(), 1) {
            self.current_date = date;
        }
    }

    /// The day's events in display order.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let found = index::events_on_date(self.store.events(), date);
        index::sort_by_start_time(&found)
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        let events = self.events_for_date(self.cursor_date());
        events.get(self.selected_event_index).copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let event_count = self.events_for_date(self.cursor_date()).len();
        if event_count > 0 && self.selected_event_index < event_count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        if self.selected_event_index > 0 {
            self.selected_event_index -= 1;
        }
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    StartTime,
    EndTime,
    Description,
    Color,
    Category,
}

/// The modal create/edit form. Time fields are free-text buffers normalized
/// on field exit and on save; validation errors land on `errors` and are
/// shown inline without closing the form.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    pub start_input: String,
    pub end_input: String,
    pub description: String,
    pub color_index: usize,
    pub category_index: usize,
    pub active_field: FormField,
    pub event_id: Option<String>,
    pub errors: ValidationErrors,
}

impl EventForm {
    pub fn new(date: NaiveDate) -> Self {
        Self::starting_at(date, Local::now().hour())
    }

    pub fn starting_at(date: NaiveDate, hour: u32) -> Self {
        let start_hour = hour.min(23);
        let end_hour = (start_hour + 1).min(23);

        Self {
            title: String::new(),
            date,
            start_input: format!("{:02}:00", start_hour),
            end_input: format!("{:02}:00", end_hour),
            description: String::new(),
            color_index: 0,
            category_index: 0,
            active_field: FormField::Title,
            event_id: None,
            errors: ValidationErrors::default(),
        }
    }

    pub fn for_event(event: &CalendarEvent) -> Self {
        let color_index = event
            .color
            .as_deref()
            .and_then(|token| EVENT_COLORS.iter().position(|(_, value)| *value == token))
            .unwrap_or(0);
        let category_index = event
            .category
            .as_deref()
            .and_then(|label| EVENT_CATEGORIES.iter().position(|c| *c == label))
            .map(|index| index + 1)
            .unwrap_or(0);

        Self {
            title: event.title.clone(),
            date: event.start.date(),
            start_input: event.start.format("%H:%M").to_string(),
            end_input: event.end.format("%H:%M").to_string(),
            description: event.description.clone().unwrap_or_default(),
            color_index,
            category_index,
            active_field: FormField::Title,
            event_id: Some(event.id.clone()),
            errors: ValidationErrors::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::StartTime,
            FormField::StartTime => FormField::EndTime,
            FormField::EndTime => FormField::Description,
            FormField::Description => FormField::Color,
            FormField::Color => FormField::Category,
            FormField::Category => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Title => FormField::Category,
            FormField::StartTime => FormField::Title,
            FormField::EndTime => FormField::StartTime,
            FormField::Description => FormField::EndTime,
            FormField::Color => FormField::Description,
            FormField::Category => FormField::Color,
        };
    }

    pub fn cycle_color(&mut self, delta: isize) {
        self.color_index = cycle(self.color_index, EVENT_COLORS.len(), delta);
    }

    /// Index 0 means no category; the suggested labels follow.
    pub fn cycle_category(&mut self, delta: isize) {
        self.category_index = cycle(self.category_index, EVENT_CATEGORIES.len() + 1, delta);
    }

    pub fn normalize_time_buffers(&mut self) {
        if let Some((hour, minute)) = parse_time_input(&self.start_input) {
            self.start_input = format!("{:02}:{:02}", hour, minute);
        }
        if let Some((hour, minute)) = parse_time_input(&self.end_input) {
            self.end_input = format!("{:02}:{:02}", hour, minute);
        }
    }

    pub fn to_draft(&self) -> EventDraft {
        let start = parse_time_input(&self.start_input)
            .and_then(|(hour, minute)| self.date.and_hms_opt(hour, minute, 0));
        let end = parse_time_input(&self.end_input)
            .and_then(|(hour, minute)| self.date.and_hms_opt(hour, minute, 0));

        EventDraft {
            title: Some(self.title.clone()),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            start,
            end,
            color: Some(EVENT_COLORS[self.color_index].1.to_string()),
            category: (self.category_index > 0)
                .then(|| EVENT_CATEGORIES[self.category_index - 1].to_string()),
        }
    }
}

fn cycle(index: usize, len: usize, delta: isize) -> usize {
    let len = len as isize;
    let next = (index as isize + delta).rem_euclid(len);
    next as usize
}

/// Accepts "HH:MM", "HHMM", or a bare hour; clamps to a valid wall time.
pub fn parse_time_input(input: &str) -> Option<(u32, u32)> {
    let digits = input.replace(':', "");
    if digits.is_empty() || digits.len() > 4 {
        return None;
    }

    let number: u32 = digits.parse().ok()?;
    let (hour, minute) = if digits.len() >= 3 {
        (number / 100, number % 100)
    } else {
        (number, 0)
    };

    Some((hour.min(23), minute.min(59)))
}
