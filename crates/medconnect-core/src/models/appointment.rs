use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::doctor::Doctor;
use crate::validation::ValidatedAppointment;

/// Booking lifecycle. Only `Pending` is ever written here; the rest is
/// driven by clinic staff outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A booking request as submitted from the appointment form.
///
/// Doctor fields are a denormalized copy taken at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppointmentRequest {
    pub doctor_id: String,
    pub doctor_name: String,
    pub doctor_specialization: String,
    pub doctor_branch: String,
    pub patient_name: String,
    pub contact_number: String,
    pub email: String,
    #[ts(type = "string")]
    pub preferred_date: Date,
    pub preferred_time: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

impl AppointmentRequest {
    /// Assemble a pending request from the resolved doctor and a form that
    /// already passed validation. Free-text fields are trimmed.
    pub fn new(doctor: &Doctor, form: &ValidatedAppointment) -> Self {
        Self {
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            doctor_specialization: doctor.specialization.clone(),
            doctor_branch: doctor.branch.clone(),
            patient_name: form.patient_name.trim().to_string(),
            contact_number: form.contact_number.trim().to_string(),
            email: form.email.trim().to_string(),
            preferred_date: form.preferred_date,
            preferred_time: form.preferred_time.clone(),
            notes: form.notes.trim().to_string(),
            status: AppointmentStatus::Pending,
        }
    }
}

/// The appointment record as written to the store. `id` and `booked_at`
/// are assigned by the store at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredAppointment {
    pub id: Uuid,
    pub booked_at: jiff::Timestamp,
    #[serde(flatten)]
    pub request: AppointmentRequest,
}
