// Shared test fixture for persons.
// The defaults come from a JSON file so every test starts from the same person.

use crate::modules::event_calendar::core::person::Person;
use crate::shared::core::primitives::PersonId;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (fixture shape)
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDto {
    pub last_name: String,
    pub first_name: String,
    pub mail_address: Option<String>,
    pub phone_number: Option<String>,
}

pub struct PersonBuilder {
    id: PersonId,
    dto: PersonDto,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PersonBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/person.json").unwrap();
        let dto: PersonDto = serde_json::from_str(&json_str).unwrap();
        Self {
            id: PersonId::new(),
            dto,
        }
    }

    pub fn id(mut self, v: PersonId) -> Self {
        self.id = v;
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.dto.last_name = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.dto.first_name = v.into();
        self
    }

    pub fn mail_address(mut self, v: impl Into<String>) -> Self {
        self.dto.mail_address = Some(v.into());
        self
    }

    pub fn phone_number(mut self, v: impl Into<String>) -> Self {
        self.dto.phone_number = Some(v.into());
        self
    }

    pub fn build(self) -> Person {
        let mut person = Person::with_id(self.id, self.dto.last_name, self.dto.first_name);
        if let Some(mail) = self.dto.mail_address {
            person.set_mail_address(mail);
        }
        if let Some(phone) = self.dto.phone_number {
            person.set_phone_number(phone);
        }
        person
    }
}

#[cfg(test)]
mod person_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = PersonBuilder::default().build();
        assert_eq!(built.last_name(), "Muster");
        assert_eq!(built.first_name(), "Max");
        assert_eq!(built.mail_address(), None);
        assert_eq!(built.phone_number(), None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_the_person() {
        let id = PersonId::new();
        let custom = PersonBuilder::new()
            .id(id)
            .last_name("Zeta")
            .first_name("Zoe")
            .mail_address("zoe@example.org")
            .phone_number("+43 1 234")
            .build();
        assert_eq!(custom.id(), id);
        assert_eq!(custom.last_name(), "Zeta");
        assert_eq!(custom.first_name(), "Zoe");
        assert_eq!(custom.mail_address(), Some("zoe@example.org"));
        assert_eq!(custom.phone_number(), Some("+43 1 234"));
    }
}
