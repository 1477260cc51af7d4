use std::sync::Arc;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use medconnect_storage::store::{DoctorCatalog, DocumentStore};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn DoctorCatalog>,
    pub store: Arc<dyn DocumentStore>,
    pub timezone: TimeZone,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn DoctorCatalog>,
        store: Arc<dyn DocumentStore>,
        timezone: TimeZone,
    ) -> Self {
        Self {
            catalog,
            store,
            timezone,
        }
    }

    /// The clinic's current calendar date.
    pub fn today(&self) -> Date {
        jiff::Timestamp::now().to_zoned(self.timezone.clone()).date()
    }
}
