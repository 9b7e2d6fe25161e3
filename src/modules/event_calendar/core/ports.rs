// Ports define what embedding applications can ask of the calendar, without fixing how
// access is coordinated.
//
// Purpose
// - Describe the registry operations as an async trait so concurrent callers can share one
//   calendar behind a handle.
//
// Boundaries
// - Every method returns owned values. Callers never hold borrows into the registry.

use crate::modules::event_calendar::core::event::Event;
use crate::modules::event_calendar::core::person::Person;
use crate::modules::event_calendar::use_cases::create_event::command::CreateEvent;
use crate::modules::event_calendar::use_cases::create_event::decide::CreateEventError;
use crate::modules::event_calendar::use_cases::register_person_for_event::decide::RegisterError;
use crate::modules::event_calendar::use_cases::unregister_person_for_event::decide::UnregisterError;
use crate::shared::core::primitives::PersonId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EventCalendar: Send + Sync {
    async fn enroll_person(&self, person: Person) -> PersonId;

    async fn person(&self, id: &PersonId) -> Option<Person>;

    /// Replaces the contact fields that are `Some`. Returns `false` for an unknown person.
    async fn update_contact(
        &self,
        id: &PersonId,
        mail_address: Option<String>,
        phone_number: Option<String>,
    ) -> bool;

    async fn organizer_of(&self, title: &str) -> Option<Person>;

    async fn create_event(
        &self,
        invitor: &PersonId,
        title: &str,
        time: DateTime<Utc>,
        max_participants: u32,
    ) -> bool;

    async fn try_create_event(&self, command: CreateEvent) -> Result<(), CreateEventError>;

    async fn event(&self, title: &str) -> Option<Event>;

    async fn events_count(&self) -> usize;

    async fn register_person_for_event(&self, person: &PersonId, title: &str) -> bool;

    async fn try_register_person_for_event(
        &self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), RegisterError>;

    async fn unregister_person_for_event(&self, person: &PersonId, title: &str) -> bool;

    async fn try_unregister_person_for_event(
        &self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), UnregisterError>;

    async fn participators_for_event(&self, title: &str) -> Option<Vec<Person>>;

    async fn events_for_person(&self, person: &PersonId) -> Option<Vec<Event>>;

    async fn count_events_for_person(&self, person: &PersonId) -> usize;
}
