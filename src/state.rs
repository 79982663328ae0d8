use crate::models::{Hotel, Restaurant, TransportOption, Trip, User};
use crate::store::MemoryStore;

/// All five stores, constructed once in `main` and handed to handlers via
/// `web::Data`. No ambient globals; state lives exactly as long as the
/// process.
#[derive(Default)]
pub struct AppState {
    pub users: MemoryStore<User>,
    pub hotels: MemoryStore<Hotel>,
    pub restaurants: MemoryStore<Restaurant>,
    pub transport: MemoryStore<TransportOption>,
    pub trips: MemoryStore<Trip>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
