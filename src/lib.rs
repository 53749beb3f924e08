pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, EventForm, FormField, Mode, ViewType};
pub use calendar::{CalendarEvent, EventChange, EventDraft, EventStore, StoreError};

pub use input::{insert_mode, normal_mode};
