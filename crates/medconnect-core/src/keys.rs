//! Document-store key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the
//! canonical layout of objects in the MedConnect bucket.

use uuid::Uuid;

/// The static doctor list served to the directory, profile and admin pages.
pub const DOCTOR_LIST: &str = "doctors.json";

pub const DOCTORS_PREFIX: &str = "doctors/";

pub const APPOINTMENTS_PREFIX: &str = "appointments/";

/// Point-lookup key for a single doctor, or `None` when `id` cannot be a
/// key segment.
pub fn doctor(id: &str) -> Option<String> {
    if id.is_empty() || id.contains('/') || id.contains("..") {
        return None;
    }
    Some(format!("{DOCTORS_PREFIX}{id}.json"))
}

pub fn appointment(id: Uuid) -> String {
    format!("{APPOINTMENTS_PREFIX}{id}.json")
}
