use crate::modules::event_calendar::adapters::in_memory::shared_registry::SharedRegistry;
use crate::modules::event_calendar::core::ports::EventCalendar;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub calendar: Arc<dyn EventCalendar>,
}

impl AppState {
    pub fn new(calendar: Arc<dyn EventCalendar>) -> Self {
        Self { calendar }
    }

    // Wall-clock registry held in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SharedRegistry::new()))
    }
}
