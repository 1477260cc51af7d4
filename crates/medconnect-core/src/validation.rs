//! Booking-form field validation.
//!
//! Every rule here is a pure function of the raw input strings and the
//! current calendar date, so hosts can run the same checks on blur and on
//! submit.

use std::sync::LazyLock;

use jiff::ToSpan;
use jiff::civil::Date;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw booking-form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AppointmentForm {
    pub patient_name: String,
    pub contact_number: String,
    pub email: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
}

impl AppointmentForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::PatientName => &self.patient_name,
            Field::ContactNumber => &self.contact_number,
            Field::Email => &self.email,
            Field::PreferredDate => &self.preferred_date,
            Field::PreferredTime => &self.preferred_time,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::PatientName => &mut self.patient_name,
            Field::ContactNumber => &mut self.contact_number,
            Field::Email => &mut self.email,
            Field::PreferredDate => &mut self.preferred_date,
            Field::PreferredTime => &mut self.preferred_time,
        };
        *slot = value.into();
    }
}

/// The required fields of the booking form. Notes are free-form and never
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    PatientName,
    ContactNumber,
    Email,
    PreferredDate,
    PreferredTime,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::PatientName,
        Field::ContactNumber,
        Field::Email,
        Field::PreferredDate,
        Field::PreferredTime,
    ];
}

/// A single failed field. `Display` is the inline message shown under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter patient name")]
    MissingPatientName,

    #[error("Please enter contact number")]
    MissingContactNumber,

    #[error("Please enter a valid contact number")]
    InvalidContactNumber,

    #[error("Please enter email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a date")]
    MissingDate,

    #[error("Please select a future date")]
    PastDate,

    #[error("Please select a time")]
    MissingTime,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::MissingPatientName => Field::PatientName,
            Self::MissingContactNumber | Self::InvalidContactNumber => Field::ContactNumber,
            Self::MissingEmail | Self::InvalidEmail => Field::Email,
            Self::MissingDate | Self::PastDate => Field::PreferredDate,
            Self::MissingTime => Field::PreferredTime,
        }
    }
}

/// All failures from a whole-form validation, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.iter().copied().find(|e| e.field() == field)
    }
}

/// A form that passed every rule, with the date already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAppointment {
    pub patient_name: String,
    pub contact_number: String,
    pub email: String,
    pub preferred_date: Date,
    pub preferred_time: String,
    pub notes: String,
}

/// Earliest date a patient may pick: tomorrow.
pub fn min_booking_date(today: Date) -> Date {
    today.saturating_add(1.day())
}

/// Validate one field against the current form contents.
pub fn validate_field(field: Field, form: &AppointmentForm, today: Date) -> Result<(), FieldError> {
    match field {
        Field::PatientName => check_patient_name(&form.patient_name),
        Field::ContactNumber => check_contact_number(&form.contact_number),
        Field::Email => check_email(&form.email),
        Field::PreferredDate => check_preferred_date(&form.preferred_date, today).map(|_| ()),
        Field::PreferredTime => check_preferred_time(&form.preferred_time),
    }
}

/// Validate every required field; all failures are reported together.
pub fn validate_form(
    form: &AppointmentForm,
    today: Date,
) -> Result<ValidatedAppointment, FieldErrors> {
    let errors: Vec<FieldError> = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, form, today).err())
        .collect();

    if !errors.is_empty() {
        return Err(FieldErrors(errors));
    }

    let preferred_date =
        check_preferred_date(&form.preferred_date, today).map_err(|e| FieldErrors(vec![e]))?;

    Ok(ValidatedAppointment {
        patient_name: form.patient_name.clone(),
        contact_number: form.contact_number.clone(),
        email: form.email.clone(),
        preferred_date,
        preferred_time: form.preferred_time.clone(),
        notes: form.notes.clone(),
    })
}

pub fn check_patient_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingPatientName);
    }
    Ok(())
}

/// Separators (whitespace, `-`, `(`, `)`) are stripped before matching.
pub fn check_contact_number(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingContactNumber);
    }
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    if !PHONE_PATTERN.is_match(&digits) {
        return Err(FieldError::InvalidContactNumber);
    }
    Ok(())
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Only `YYYY-MM-DD` is accepted. Dates compare at day granularity:
/// `today` itself is rejected.
pub fn check_preferred_date(value: &str, today: Date) -> Result<Date, FieldError> {
    let value = value.trim();
    if value.len() != 10 {
        return Err(FieldError::MissingDate);
    }
    let date = Date::strptime("%Y-%m-%d", value).map_err(|_| FieldError::MissingDate)?;
    if date <= today {
        return Err(FieldError::PastDate);
    }
    Ok(date)
}

pub fn check_preferred_time(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingTime);
    }
    Ok(())
}
