// Composition root for the event calendar.
//
// Responsibilities
// - Install tracing for the embedding application.
// - Instantiate the shared in-memory registry and hand it out behind the EventCalendar port.

pub mod state;
pub mod telemetry;
