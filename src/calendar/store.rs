use thiserror::Error;
use uuid::Uuid;

use super::event::{CalendarEvent, EventDraft};
use super::validate::{ValidationErrors, validate};

/// Identifier source for new events, injected so creation stays
/// deterministic under test.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        format!("event-{}", Uuid::new_v4())
    }
}

#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("event-{}", self.counter)
    }
}

/// Mutation record the state owner drains via `take_changes`, in place of
/// per-mutation callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum EventChange {
    Added(CalendarEvent),
    Updated(CalendarEvent),
    Removed { id: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event not found: {0}")]
    NotFound(String),
    #[error("event failed validation: {0}")]
    Invalid(ValidationErrors),
}

/// The owned, insertion-ordered event collection. Every add and update
/// passes through the validator before it is admitted.
pub struct EventStore {
    events: Vec<CalendarEvent>,
    ids: Box<dyn IdGenerator + Send>,
    changes: Vec<EventChange>,
}

impl EventStore {
    pub fn new(ids: Box<dyn IdGenerator + Send>) -> Self {
        Self {
            events: Vec::new(),
            ids,
            changes: Vec::new(),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<CalendarEvent, StoreError> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        let Some(event) = draft.into_event(self.ids.next_id()) else {
            // Validation guarantees the required fields are present.
            return Err(StoreError::Invalid(errors));
        };

        self.events.push(event.clone());
        self.changes.push(EventChange::Added(event.clone()));
        Ok(event)
    }

    pub fn update(&mut self, id: &str, patch: EventDraft) -> Result<CalendarEvent, StoreError> {
        let Some(index) = self.events.iter().position(|event| event.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };

        let merged = patch.merged_over(&self.events[index]);
        let errors = validate(&merged);
        if !errors.is_empty() {
            return Err(StoreError::Invalid(errors));
        }

        let Some(updated) = merged.into_event(id.to_string()) else {
            return Err(StoreError::Invalid(errors));
        };

        self.events[index] = updated.clone();
        self.changes.push(EventChange::Updated(updated.clone()));
        Ok(updated)
    }

    pub fn remove(&mut self, id: &str) -> Option<CalendarEvent> {
        let index = self.events.iter().position(|event| event.id == id)?;
        let removed = self.events.remove(index);
        self.changes.push(EventChange::Removed {
            id: removed.id.clone(),
        });
        Some(removed)
    }

    /// Drains the pending mutation records accumulated since the last call.
    pub fn take_changes(&mut self) -> Vec<EventChange> {
        std::mem::take(&mut self.changes)
    }
}
