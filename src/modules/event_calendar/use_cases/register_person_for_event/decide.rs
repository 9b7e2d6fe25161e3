// Pure decision function for registering a person for an event.
//
// Responsibilities
// - Reject unknown persons, unknown events, double registrations and full events.
// - A capacity of 0 is unlimited and never rejects.

use crate::modules::event_calendar::core::event::Event;
use crate::shared::core::primitives::PersonId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("person is not enrolled")]
    UnknownPerson,

    #[error("event does not exist")]
    UnknownEvent,

    #[error("person is already registered for the event")]
    AlreadyRegistered,

    #[error("event is full ({0} participants)")]
    EventFull(u32),
}

pub fn decide_register(
    person_enrolled: bool,
    event: Option<&Event>,
    person: &PersonId,
) -> Result<(), RegisterError> {
    if !person_enrolled {
        return Err(RegisterError::UnknownPerson);
    }
    let event = event.ok_or(RegisterError::UnknownEvent)?;
    if event.has_participant(person) {
        return Err(RegisterError::AlreadyRegistered);
    }
    if event.is_full() {
        return Err(RegisterError::EventFull(event.max_participants()));
    }
    Ok(())
}
