use crate::modules::registrations::adapters::outbound::in_memory_page::InMemoryPage;
use crate::modules::registrations::use_cases::register_submission::handler::RegistrationFormHandler;
use crate::shared::core::clock::{Clock, TimestampFormat};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedClock = Arc<dyn Clock>;

#[derive(Clone)]
pub struct AppState {
    /// Holding the lock for a whole submission keeps submissions strictly serial.
    pub page: Arc<Mutex<InMemoryPage>>,
    pub register_handler: Arc<RegistrationFormHandler<SharedClock>>,
}

impl AppState {
    pub fn new(clock: SharedClock, timestamp_format: TimestampFormat) -> Self {
        Self {
            page: Arc::new(Mutex::new(InMemoryPage::new())),
            register_handler: Arc::new(RegistrationFormHandler::new(clock, timestamp_format)),
        }
    }
}
