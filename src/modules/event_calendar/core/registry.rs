// The registry owns every event and the person directory.
//
// Responsibilities
// - Enforce the creation and registration rules by delegating to the pure deciders.
// - Keep both sides of the person <-> event relation in sync: an event lists its participant
//   ids, the directory lists the titles each person attends. Every mutation updates both.
// - Answer the ordered queries with owned snapshots.
//
// Boundaries
// - Single-threaded. Wrap it in SharedRegistry for concurrent callers.

use crate::modules::event_calendar::core::event::Event;
use crate::modules::event_calendar::core::ordering::{Activity, by_activity, by_time};
use crate::modules::event_calendar::core::person::Person;
use crate::modules::event_calendar::use_cases::create_event::command::CreateEvent;
use crate::modules::event_calendar::use_cases::create_event::decide::{
    CreateEventError, decide_create_event,
};
use crate::modules::event_calendar::use_cases::register_person_for_event::decide::{
    RegisterError, decide_register,
};
use crate::modules::event_calendar::use_cases::unregister_person_for_event::decide::{
    UnregisterError, decide_unregister,
};
use crate::shared::core::primitives::PersonId;
use crate::shared::infrastructure::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct PersonEntry {
    person: Person,
    // Titles of attended events, in registration order.
    events: Vec<String>,
}

#[derive(Debug)]
pub struct Registry<C: Clock = SystemClock> {
    clock: C,
    events: HashMap<String, Event>,
    persons: HashMap<PersonId, PersonEntry>,
}

impl Registry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Registry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Registry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            events: HashMap::new(),
            persons: HashMap::new(),
        }
    }

    pub fn events_count(&self) -> usize {
        self.events.len()
    }

    /// Adds a person to the directory. Enrolling a known id keeps its attendance and only
    /// takes over the contact details.
    pub fn enroll_person(&mut self, person: Person) -> PersonId {
        let id = person.id();
        match self.persons.get_mut(&id) {
            Some(entry) => entry.person.take_contact_from(person),
            None => {
                tracing::debug!(person = %id, "person enrolled");
                self.persons.insert(
                    id,
                    PersonEntry {
                        person,
                        events: Vec::new(),
                    },
                );
            }
        }
        id
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.persons.get(id).map(|entry| &entry.person)
    }

    pub fn person_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.persons.get_mut(id).map(|entry| &mut entry.person)
    }

    pub fn organizer_of(&self, title: &str) -> Option<&Person> {
        let event = self.events.get(title)?;
        self.person(&event.organizer())
    }

    pub fn create_event(
        &mut self,
        invitor: &PersonId,
        title: &str,
        time: DateTime<Utc>,
        max_participants: u32,
    ) -> bool {
        let command = CreateEvent::new(*invitor, title, time).max_participants(max_participants);
        match self.try_create_event(command) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(title, %reason, "create event rejected");
                false
            }
        }
    }

    pub fn try_create_event(&mut self, command: CreateEvent) -> Result<(), CreateEventError> {
        let event = decide_create_event(
            self.persons.contains_key(&command.invitor),
            self.events.get(&command.title),
            command,
            self.clock.now(),
        )?;
        tracing::info!(
            title = event.title(),
            time = %event.time(),
            max_participants = event.max_participants(),
            "event created"
        );
        self.events.insert(event.title().to_string(), event);
        Ok(())
    }

    /// Looks up an event by its exact title.
    pub fn event(&self, title: &str) -> Option<&Event> {
        self.events.get(title)
    }

    pub fn register_person_for_event(&mut self, person: &PersonId, title: &str) -> bool {
        match self.try_register_person_for_event(person, title) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(person = %person, title, %reason, "registration rejected");
                false
            }
        }
    }

    pub fn try_register_person_for_event(
        &mut self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), RegisterError> {
        decide_register(
            self.persons.contains_key(person),
            self.events.get(title),
            person,
        )?;
        match (self.events.get_mut(title), self.persons.get_mut(person)) {
            (Some(event), Some(entry)) => {
                event.add_participant(*person);
                entry.events.push(event.title().to_string());
            }
            (None, _) => return Err(RegisterError::UnknownEvent),
            (_, None) => return Err(RegisterError::UnknownPerson),
        }
        tracing::info!(person = %person, title, "person registered");
        Ok(())
    }

    pub fn unregister_person_for_event(&mut self, person: &PersonId, title: &str) -> bool {
        match self.try_unregister_person_for_event(person, title) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(person = %person, title, %reason, "unregistration rejected");
                false
            }
        }
    }

    pub fn try_unregister_person_for_event(
        &mut self,
        person: &PersonId,
        title: &str,
    ) -> Result<(), UnregisterError> {
        decide_unregister(
            self.persons.contains_key(person),
            self.events.get(title),
            person,
        )?;
        match (self.events.get_mut(title), self.persons.get_mut(person)) {
            (Some(event), Some(entry)) => {
                event.remove_participant(person);
                entry.events.retain(|t| t != title);
            }
            (None, _) => return Err(UnregisterError::UnknownEvent),
            (_, None) => return Err(UnregisterError::UnknownPerson),
        }
        tracing::info!(person = %person, title, "person unregistered");
        Ok(())
    }

    /// Participants of the event, most active first. `None` when the event does not exist.
    pub fn participators_for_event(&self, title: &str) -> Option<Vec<Person>> {
        let event = self.events.get(title)?;
        let mut ranked: Vec<Activity<'_>> = event
            .participants()
            .iter()
            .filter_map(|id| self.persons.get(id))
            .map(|entry| Activity {
                person: &entry.person,
                event_count: entry.events.len(),
            })
            .collect();
        ranked.sort_by(by_activity);
        Some(ranked.into_iter().map(|a| a.person.clone()).collect())
    }

    /// Events the person attends, earliest first. `None` when the person is not enrolled.
    pub fn events_for_person(&self, person: &PersonId) -> Option<Vec<Event>> {
        let entry = self.persons.get(person)?;
        let mut events: Vec<&Event> = entry
            .events
            .iter()
            .filter_map(|title| self.events.get(title))
            .collect();
        events.sort_by(|a, b| by_time(a, b));
        Some(events.into_iter().cloned().collect())
    }

    // Unknown persons count as zero, same as an enrolled person without events.
    pub fn count_events_for_person(&self, person: &PersonId) -> usize {
        self.persons
            .get(person)
            .map_or(0, |entry| entry.events.len())
    }
}
