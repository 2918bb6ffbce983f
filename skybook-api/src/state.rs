use std::sync::Arc;

use skybook_core::session::BookingSession;
use skybook_core::supplier::TravelApi;
use tokio::sync::RwLock;

/// Shared handles for the handlers: the upstream client and the single
/// in-memory booking session. The session write lock is the serialization
/// point for form operations.
#[derive(Clone)]
pub struct AppState {
    pub travel_api: Arc<dyn TravelApi>,
    pub session: Arc<RwLock<BookingSession>>,
}

impl AppState {
    pub fn new(travel_api: Arc<dyn TravelApi>) -> Self {
        Self {
            travel_api,
            session: Arc::new(RwLock::new(BookingSession::new())),
        }
    }
}
