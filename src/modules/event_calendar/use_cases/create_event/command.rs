// Command data type for creating an event.
//
// Purpose
// - Express the intent of an organizer to schedule an event with a unique title.
//
// Responsibilities
// - Carry input data for the decider to validate and turn into an Event.

use crate::shared::core::primitives::PersonId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub invitor: PersonId,
    pub title: String,
    pub time: DateTime<Utc>,
    pub max_participants: u32,
}

impl CreateEvent {
    pub fn new(invitor: PersonId, title: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            invitor,
            title: title.into(),
            time,
            max_participants: 0,
        }
    }

    pub fn max_participants(mut self, max_participants: u32) -> Self {
        self.max_participants = max_participants;
        self
    }
}
