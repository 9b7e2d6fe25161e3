// A person can organize events and attend them.
//
// Responsibilities
// - Hold the name pair, which is fixed at construction, and the mutable contact fields.
//
// Boundaries
// - The events a person attends are not stored here. The registry keeps that relation and
//   exposes it through `Registry::events_for_person`.

use crate::shared::core::primitives::PersonId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    last_name: String,
    first_name: String,
    mail_address: Option<String>,
    phone_number: Option<String>,
}

impl Person {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self::with_id(PersonId::new(), last_name, first_name)
    }

    pub fn with_id(
        id: PersonId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            mail_address: None,
            phone_number: None,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn mail_address(&self) -> Option<&str> {
        self.mail_address.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_mail_address(&mut self, mail_address: impl Into<String>) {
        self.mail_address = Some(mail_address.into());
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = Some(phone_number.into());
    }

    pub(crate) fn take_contact_from(&mut self, other: Person) {
        self.mail_address = other.mail_address;
        self.phone_number = other.phone_number;
    }
}
