// Sort orders used by the registry queries.
//
// - Events: ascending by scheduled time only.
// - Persons: most events attended first, then last name, then first name (both ascending).
//
// Both are meant for stable sorts, so equal keys keep their insertion order.

use crate::modules::event_calendar::core::event::Event;
use crate::modules::event_calendar::core::person::Person;
use std::cmp::Ordering;

pub fn by_time(a: &Event, b: &Event) -> Ordering {
    a.time().cmp(&b.time())
}

// A person paired with the number of events they attend across the whole registry.
#[derive(Debug, Clone, Copy)]
pub struct Activity<'a> {
    pub person: &'a Person,
    pub event_count: usize,
}

pub fn by_activity(a: &Activity<'_>, b: &Activity<'_>) -> Ordering {
    b.event_count
        .cmp(&a.event_count)
        .then_with(|| a.person.last_name().cmp(b.person.last_name()))
        .then_with(|| a.person.first_name().cmp(b.person.first_name()))
}
