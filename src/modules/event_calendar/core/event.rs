// A scheduled event with its organizer and participants.
//
// Responsibilities
// - Carry the title (natural key), time, organizer, capacity and participant ids.
// - Answer capacity and membership questions for the registration decisions.
//
// Notes
// - max_participants == 0 means unlimited, never "nobody allowed".
// - Participants are kept in registration order without duplicates. Only the registry
//   mutates them, together with the person side of the relation.

use crate::shared::core::primitives::PersonId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    title: String,
    time: DateTime<Utc>,
    organizer: PersonId,
    max_participants: u32,
    participants: Vec<PersonId>,
}

impl Event {
    /// Builds an event without participants.
    ///
    /// # Panics
    ///
    /// Panics when `title` is empty. An event without a title has no identity.
    pub fn new(
        organizer: PersonId,
        title: impl Into<String>,
        time: DateTime<Utc>,
        max_participants: u32,
    ) -> Self {
        let title = title.into();
        assert!(!title.is_empty(), "event title must not be empty");
        Self {
            title,
            time,
            organizer,
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn organizer(&self) -> PersonId {
        self.organizer
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn participants(&self) -> &[PersonId] {
        &self.participants
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_participants == 0
    }

    pub fn is_full(&self) -> bool {
        !self.is_unlimited() && self.participants.len() >= self.max_participants as usize
    }

    pub fn has_participant(&self, person: &PersonId) -> bool {
        self.participants.contains(person)
    }

    pub(crate) fn add_participant(&mut self, person: PersonId) {
        if !self.has_participant(&person) {
            self.participants.push(person);
        }
    }

    pub(crate) fn remove_participant(&mut self, person: &PersonId) {
        self.participants.retain(|p| p != person);
    }
}
