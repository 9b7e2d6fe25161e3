// Shared, lock-guarded registry implementing the EventCalendar port.
//
// Responsibilities
// - Hold one lock for the whole check-then-mutate sequence of each operation, so capacity
//   and title uniqueness hold with concurrent callers.
// - Queries take the same lock as writes.

use crate::modules::event_calendar::core::event::Event;
use crate::modules::event_calendar::core::person::Person;
use crate::modules::event_calendar::core::ports::EventCalendar;
use crate::modules::event_calendar::core::registry::Registry;
use crate::modules::event_calendar::use_cases::create_event::command::CreateEvent;
use crate::modules::event_calendar::use_cases::create_event::decide::CreateEventError;
use crate::modules::event_calendar::use_cases::register_person_for_event::decide::RegisterError;
use crate::modules::event_calendar::use_cases::unregister_person_for_event::decide::UnregisterError;
use crate::shared::core::primitives::PersonId;
use crate::shared::infrastructure::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct SharedRegistry<C: Clock = SystemClock> {
    inner: Arc<Mutex<Registry<C>>>,
}

impl<C: Clock> Clone for SharedRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }
}

impl Default for SharedRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedRegistry<C> {
    pub fn from_registry(registry: Registry<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

#[async_trait::async_trait]
impl<C: Clock> EventCalendar for SharedRegistry<C> {
    async fn enroll_person(&self, person: Person) -> PersonId {
        self.inner.lock().await.enroll_person(person)
    }

    async fn person(&self, id: &PersonId) -> Option<Person> {
        self.inner.lock().await.person(id).cloned()
    }

    async fn update_contact(
        &self,
        id: &PersonId,
        mail_address: Option<String>,
        phone_number: Option<String>,
    ) -> bool {
        let mut registry = self.inner.lock().await;
        let Some(person) = registry.person_mut(id) else {
            return false;
        };
        if let Some(mail_address) = mail_address {
            person.set_mail_address(mail_address);
        }
        if let Some(phone_number) = phone_number {
            person.set_phone_number(phone_number);
        }
        true
    }

    async fn organizer_of(&self, title: &str) -> Option<Person> {
        self.inner.lock().await.organizer_of(title).cloned()
    }

    async fn create_event(
        &self,
        invitor: &PersonId,
        title: &str,
        time: DateTime<Utc>,
        max_participants: u32,
    ) -> bool {
        self.inner
            .lock()
            .await
            .create_event(invitor, title, time, max_participants)
    }

    async fn try_create_event(&self, command: CreateEvent) -> Result<(), CreateEventError> {
        self.inner.lock().await.try_create_event(command)
    }

    async fn event(&self, title: &str) -> Option<Event> {
        self.inner.lock().await.event(title).cloned()
    }

    async fn events_count(&self) -> usize {
        self.inner.lock().await.events_count()
    }

    async fn register_person_for_event(&self, person: &PersonId, title: &str) -> bool {
        self.inner
            .lock()
            .await
            .register_person_for_event(person, title)
    }

    async fn try_register_person_for_event(
        &self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), RegisterError> {
        self.inner
            .lock()
            .await
            .try_register_person_for_event(person, title)
    }

    async fn unregister_person_for_event(&self, person: &PersonId, title: &str) -> bool {
        self.inner
            .lock()
            .await
            .unregister_person_for_event(person, title)
    }

    async fn try_unregister_person_for_event(
        &self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), UnregisterError> {
        self.inner
            .lock()
            .await
            .try_unregister_person_for_event(person, title)
    }

    async fn participators_for_event(&self, title: &str) -> Option<Vec<Person>> {
        self.inner.lock().await.participators_for_event(title)
    }

    async fn events_for_person(&self, person: &PersonId) -> Option<Vec<Event>> {
        self.inner.lock().await.events_for_person(person)
    }

    async fn count_events_for_person(&self, person: &PersonId) -> usize {
        self.inner.lock().await.count_events_for_person(person)
    }
}
