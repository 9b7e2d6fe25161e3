use crate::modules::event_calendar::adapters::in_memory::shared_registry::SharedRegistry;
use crate::modules::event_calendar::core::person::Person;
use crate::modules::event_calendar::core::ports::EventCalendar;
use crate::modules::event_calendar::core::registry::Registry;
use crate::modules::event_calendar::use_cases::register_person_for_event::decide::RegisterError;
use crate::shared::core::primitives::PersonId;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shell::state::AppState;
use crate::shell::telemetry::init_tracing;
use crate::tests::fixtures::clock::fixed_now;
use crate::tests::fixtures::persons::PersonBuilder;
use chrono::{Duration, Utc};
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Cast {
    a: PersonId,
    b: PersonId,
    c: PersonId,
    d: PersonId,
}

fn enroll_cast(registry: &mut Registry<FixedClock>) -> Cast {
    let mut enroll = |last: &str, first: &str| {
        let person = PersonBuilder::new()
            .last_name(last)
            .first_name(first)
            .build();
        registry.enroll_person(person)
    };
    Cast {
        a: enroll("Adler", "Anna"),
        b: enroll("Berger", "Bernd"),
        c: enroll("Czerny", "Carla"),
        d: enroll("Doppler", "Dora"),
    }
}

#[fixture]
fn registry() -> Registry<FixedClock> {
    dotenvy::dotenv().ok();
    let _ = init_tracing();
    Registry::with_clock(FixedClock::at(fixed_now()))
}

#[rstest]
fn standup_fills_up_and_frees_a_slot(mut registry: Registry<FixedClock>) {
    let cast = enroll_cast(&mut registry);
    assert!(registry.create_event(&cast.a, "Standup", fixed_now() + Duration::hours(1), 2));

    assert!(registry.register_person_for_event(&cast.b, "Standup"));
    assert!(registry.register_person_for_event(&cast.c, "Standup"));
    assert_eq!(
        registry.try_register_person_for_event(&cast.d, "Standup"),
        Err(RegisterError::EventFull(2))
    );
    assert!(registry.unregister_person_for_event(&cast.b, "Standup"));
    assert!(registry.register_person_for_event(&cast.d, "Standup"));

    let participants: Vec<PersonId> = registry
        .participators_for_event("Standup")
        .unwrap()
        .iter()
        .map(Person::id)
        .collect();
    assert_eq!(participants, vec![cast.c, cast.d]);
    assert_eq!(registry.count_events_for_person(&cast.a), 0);
    assert_eq!(registry.count_events_for_person(&cast.b), 0);
    assert_eq!(
        registry.events_for_person(&cast.d).unwrap()[0].title(),
        "Standup"
    );
}

#[rstest]
fn a_busy_week_ranks_the_most_active_person_first(mut registry: Registry<FixedClock>) {
    let cast = enroll_cast(&mut registry);
    let week = [("Wednesday", 2), ("Monday", 0), ("Friday", 4)];
    for (title, day) in week {
        let time = fixed_now() + Duration::days(day);
        assert!(registry.create_event(&cast.a, title, time, 0));
    }
    for (title, _) in week {
        assert!(registry.register_person_for_event(&cast.d, title));
    }
    assert!(registry.register_person_for_event(&cast.c, "Monday"));
    assert!(registry.register_person_for_event(&cast.b, "Monday"));

    let ranked: Vec<String> = registry
        .participators_for_event("Monday")
        .unwrap()
        .iter()
        .map(|p| p.last_name().to_string())
        .collect();
    assert_eq!(ranked, vec!["Doppler", "Berger", "Czerny"]);

    let agenda: Vec<String> = registry
        .events_for_person(&cast.d)
        .unwrap()
        .iter()
        .map(|e| e.title().to_string())
        .collect();
    assert_eq!(agenda, vec!["Monday", "Wednesday", "Friday"]);
    assert_eq!(registry.events_count(), 3);
}

#[rstest]
#[tokio::test]
async fn the_wall_clock_calendar_runs_the_standup_scenario() {
    let state = AppState::in_memory();
    let calendar = Arc::clone(&state.calendar);
    let a = calendar.enroll_person(Person::new("Adler", "Anna")).await;
    let b = calendar.enroll_person(Person::new("Berger", "Bernd")).await;
    let c = calendar.enroll_person(Person::new("Czerny", "Carla")).await;
    let d = calendar.enroll_person(Person::new("Doppler", "Dora")).await;

    assert!(
        !calendar
            .create_event(&a, "Standup", Utc::now() - Duration::hours(1), 2)
            .await
    );
    assert!(
        calendar
            .create_event(&a, "Standup", Utc::now() + Duration::hours(1), 2)
            .await
    );
    assert!(calendar.register_person_for_event(&b, "Standup").await);
    assert!(calendar.register_person_for_event(&c, "Standup").await);
    assert!(!calendar.register_person_for_event(&d, "Standup").await);
    assert!(calendar.unregister_person_for_event(&b, "Standup").await);
    assert!(calendar.register_person_for_event(&d, "Standup").await);
    assert_eq!(calendar.events_count().await, 1);
}

#[rstest]
#[tokio::test]
async fn the_app_state_accepts_any_calendar() {
    let mut registry = Registry::with_clock(FixedClock::at(fixed_now()));
    let organizer = registry.enroll_person(PersonBuilder::new().build());
    let state = AppState::new(Arc::new(SharedRegistry::from_registry(registry)));
    assert!(
        state
            .calendar
            .create_event(&organizer, "Retro", fixed_now(), 0)
            .await
    );
    assert_eq!(
        state.calendar.event("Retro").await.map(|e| e.organizer()),
        Some(organizer)
    );
}
