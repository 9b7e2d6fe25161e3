pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
    }
}

pub mod modules {
    pub mod event_calendar {
        pub mod core {
            pub mod event;
            pub mod ordering;
            pub mod person;
            pub mod ports;
            pub mod registry;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
            }
            pub mod register_person_for_event {
                pub mod decide;
            }
            pub mod unregister_person_for_event {
                pub mod decide;
            }
        }
        pub mod adapters {
            pub mod in_memory {
                pub mod shared_registry;
            }
        }
    }
}

pub mod shell;

pub use modules::event_calendar::core::event::Event;
pub use modules::event_calendar::core::person::Person;
pub use modules::event_calendar::core::ports::EventCalendar;
pub use modules::event_calendar::core::registry::Registry;
pub use shared::core::primitives::PersonId;
