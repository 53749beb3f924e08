pub mod day_events;
pub mod month;
pub mod week;
