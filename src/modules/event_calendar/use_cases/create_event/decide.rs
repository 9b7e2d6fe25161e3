// Pure decision function for event creation.
//
// Responsibilities
// - Reject unknown invitors, empty titles, dates in the past and titles already in use,
//   checked in that order.
// - On success, build the new Event with an empty participant list.
// - Never perform input or output.

use crate::modules::event_calendar::core::event::Event;
use crate::modules::event_calendar::use_cases::create_event::command::CreateEvent;
use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreateEventError {
    #[error("invitor is not enrolled")]
    UnknownInvitor,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("event time lies in the past")]
    InThePast,

    #[error("an event titled {0:?} already exists")]
    DuplicateTitle(String),
}

pub fn decide_create_event(
    invitor_enrolled: bool,
    existing: Option<&Event>,
    command: CreateEvent,
    now: DateTime<Utc>,
) -> Result<Event, CreateEventError> {
    if !invitor_enrolled {
        return Err(CreateEventError::UnknownInvitor);
    }
    if command.title.is_empty() {
        return Err(CreateEventError::EmptyTitle);
    }
    if command.time < now {
        return Err(CreateEventError::InThePast);
    }
    if existing.is_some() {
        return Err(CreateEventError::DuplicateTitle(command.title));
    }
    Ok(Event::new(
        command.invitor,
        command.title,
        command.time,
        command.max_participants,
    ))
}
