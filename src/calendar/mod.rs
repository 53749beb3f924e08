pub mod event;
pub mod grid;
pub mod index;
pub mod layout;
pub mod store;
pub mod validate;

pub use event::{
    CalendarEvent, DEFAULT_EVENT_COLOR, EVENT_CATEGORIES, EVENT_COLORS, EventDraft,
};
pub use store::{
    EventChange, EventStore, IdGenerator, SequentialIdGenerator, StoreError, UuidIdGenerator,
};
pub use validate::{EventField, ValidationErrors, validate};
