// Pure decision function for unregistering a person from an event.
//
// Responsibilities
// - Reject unknown persons, unknown events and persons who are not registered.
// - Never touch registry state. The caller applies the removal.

use crate::modules::event_calendar::core::event::Event;
use crate::shared::core::primitives::PersonId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnregisterError {
    #[error("person is not enrolled")]
    UnknownPerson,

    #[error("event does not exist")]
    UnknownEvent,

    #[error("person is not registered for the event")]
    NotRegistered,
}

pub fn decide_unregister(
    person_enrolled: bool,
    event: Option<&Event>,
    person: &PersonId,
) -> Result<(), UnregisterError> {
    if !person_enrolled {
        return Err(UnregisterError::UnknownPerson);
    }
    let event = event.ok_or(UnregisterError::UnknownEvent)?;
    if !event.has_participant(person) {
        return Err(UnregisterError::NotRegistered);
    }
    Ok(())
}
