use std::future::Future;
use std::pin::Pin;

use medconnect_core::models::appointment::{AppointmentRequest, StoredAppointment};
use medconnect_core::models::doctor::Doctor;
use uuid::Uuid;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to the static doctor list.
///
/// Backs the directory, the profile page (which scans the whole list) and
/// the admin count. Methods return boxed futures for dyn compatibility.
pub trait DoctorCatalog: Send + Sync {
    fn fetch_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>>;
}

/// The network-backed document store used by the booking form.
pub trait DocumentStore: Send + Sync {
    /// Point lookup of one doctor. A missing record is `Ok(None)`.
    fn get_doctor<'a>(&'a self, id: &'a str)
    -> BoxFuture<'a, Result<Option<Doctor>, StorageError>>;

    /// Append a new appointment. The store assigns the record id and the
    /// write timestamp.
    fn add_appointment(
        &self,
        request: AppointmentRequest,
    ) -> BoxFuture<'_, Result<StoredAppointment, StorageError>>;
}

/// Wrap a request with a fresh id and the current time, as the store does
/// on insert.
pub fn stamp_appointment(request: AppointmentRequest) -> StoredAppointment {
    StoredAppointment {
        id: Uuid::new_v4(),
        booked_at: jiff::Timestamp::now(),
        request,
    }
}
