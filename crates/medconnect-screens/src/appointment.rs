use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use jiff::civil::Date;
use medconnect_core::models::appointment::{AppointmentRequest, StoredAppointment};
use medconnect_core::models::doctor::{BOOKING_PLACEHOLDER_PHOTO, Doctor};
use medconnect_core::validation::{
    AppointmentForm, Field, FieldError, min_booking_date, validate_field, validate_form,
};
use medconnect_storage::store::DocumentStore;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::navigation::{NavigationContext, Page};
use crate::surface::{Dialog, DialogSurface, Navigator};

/// Query parameter carrying the doctor id.
pub const DOCTOR_ID_PARAM: &str = "doctorId";

pub const SUBMIT_LABEL: &str = "Book Appointment";
pub const SUBMITTING_LABEL: &str = "Booking...";

/// Read-only doctor summary shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub branch: String,
    pub photo_url: String,
    pub photo_alt: String,
}

impl DoctorSummary {
    fn from_doctor(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            branch: doctor.branch.clone(),
            photo_url: doctor.photo_or(BOOKING_PLACEHOLDER_PHOTO).to_string(),
            photo_alt: doctor.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldMessage {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentView {
    Loading,
    Form {
        doctor: DoctorSummary,
        /// Earliest selectable date (`YYYY-MM-DD`).
        #[ts(type = "string")]
        min_date: Date,
        values: AppointmentForm,
        errors: Vec<FieldMessage>,
        submit: SubmitControl,
    },
    Error,
}

/// The three mutually exclusive regions. Submitting is a sub-state of
/// `Form`, tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Form,
    Error,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// At least one field failed; errors are now visible on the form.
    Invalid,
    Booked(StoredAppointment),
    /// The write failed; the form is left as it was.
    Failed,
    /// No form to submit, or a submission is already in flight.
    Ignored,
}

/// Booking form for one doctor.
#[derive(Debug)]
pub struct AppointmentScreen {
    today: Date,
    phase: Phase,
    doctor: Option<Doctor>,
    form: AppointmentForm,
    errors: BTreeMap<Field, FieldError>,
    submitting: Arc<AtomicBool>,
}

impl AppointmentScreen {
    /// `today` anchors date validation and the date picker minimum.
    pub fn new(today: Date) -> Self {
        Self {
            today,
            phase: Phase::Loading,
            doctor: None,
            form: AppointmentForm::default(),
            errors: BTreeMap::new(),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resolve the doctor by point lookup. A missing id, a missing record,
    /// and a failed lookup all end in the error region.
    pub async fn activate(&mut self, nav: &NavigationContext, store: &dyn DocumentStore) {
        let Some(id) = nav.get(DOCTOR_ID_PARAM) else {
            tracing::warn!("booking form opened without a doctor id");
            self.phase = Phase::Error;
            return;
        };

        self.phase = Phase::Loading;
        match store.get_doctor(id).await {
            Ok(Some(doctor)) => {
                tracing::debug!(doctor_id = %doctor.id, "booking form ready");
                self.doctor = Some(doctor);
                self.phase = Phase::Form;
            }
            Ok(None) => {
                tracing::warn!(doctor_id = %id, "doctor not found for booking");
                self.phase = Phase::Error;
            }
            Err(e) => {
                tracing::error!(error = %e, doctor_id = %id, "error loading doctor information");
                self.phase = Phase::Error;
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    pub fn min_date(&self) -> Date {
        min_booking_date(self.today)
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Typing into a field clears its own error. It is not re-validated
    /// until the next blur or submit.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.form.notes = notes.into();
    }

    /// Replace every input at once, as when a whole form is posted.
    pub fn fill(&mut self, form: AppointmentForm) {
        self.form = form;
        self.errors.clear();
    }

    /// Leaving a field validates just that field.
    pub fn blur(&mut self, field: Field) -> Option<FieldError> {
        let result = validate_field(field, &self.form, self.today);
        if let Err(e) = result {
            self.errors.insert(field, e);
        }
        result.err()
    }

    pub fn submit_control(&self) -> SubmitControl {
        submit_control(self.is_submitting())
    }

    /// Validate everything and, if the form is clean, hand back the write to
    /// perform. The submit control reads as busy until the returned
    /// [`Submission`] finishes or is dropped.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitOutcome> {
        if self.is_submitting() || self.phase != Phase::Form {
            return Err(SubmitOutcome::Ignored);
        }
        let Some(doctor) = self.doctor.as_ref() else {
            return Err(SubmitOutcome::Ignored);
        };

        let validated = match validate_form(&self.form, self.today) {
            Ok(validated) => validated,
            Err(errors) => {
                self.errors = errors.0.into_iter().map(|e| (e.field(), e)).collect();
                return Err(SubmitOutcome::Invalid);
            }
        };

        Ok(Submission {
            request: AppointmentRequest::new(doctor, &validated),
            _busy: BusyGuard::raise(&self.submitting),
        })
    }

    /// Validate everything, then write the appointment.
    pub async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        dialogs: &dyn DialogSurface,
        navigator: &dyn Navigator,
    ) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(submission) => submission.send(store, dialogs, navigator).await,
            Err(outcome) => outcome,
        }
    }

    pub fn view(&self) -> AppointmentView {
        match (self.phase, &self.doctor) {
            (Phase::Form, Some(doctor)) => AppointmentView::Form {
                doctor: DoctorSummary::from_doctor(doctor),
                min_date: self.min_date(),
                values: self.form.clone(),
                errors: self
                    .errors
                    .iter()
                    .map(|(field, e)| FieldMessage {
                        field: *field,
                        message: e.to_string(),
                    })
                    .collect(),
                submit: self.submit_control(),
            },
            (Phase::Form, None) | (Phase::Error, _) => AppointmentView::Error,
            (Phase::Loading, _) => AppointmentView::Loading,
        }
    }
}

fn submit_control(submitting: bool) -> SubmitControl {
    SubmitControl {
        disabled: submitting,
        label: if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }.to_string(),
        busy: submitting,
    }
}

/// Holds the screen's submitting flag up; lowering it on drop covers
/// completion, failure and a cancelled write alike.
#[derive(Debug)]
struct BusyGuard(Arc<AtomicBool>);

impl BusyGuard {
    fn raise(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(Arc::clone(flag))
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A validated appointment waiting to be written.
#[derive(Debug)]
pub struct Submission {
    request: AppointmentRequest,
    _busy: BusyGuard,
}

impl Submission {
    pub fn request(&self) -> &AppointmentRequest {
        &self.request
    }

    /// Write the appointment and report the result to the patient.
    pub async fn send(
        self,
        store: &dyn DocumentStore,
        dialogs: &dyn DialogSurface,
        navigator: &dyn Navigator,
    ) -> SubmitOutcome {
        let Self { request, _busy } = self;

        match store.add_appointment(request).await {
            Ok(record) => {
                tracing::info!(appointment_id = %record.id, "appointment booked");
                dialogs
                    .show(Dialog::success(
                        "Appointment Booked!",
                        "Your appointment has been successfully booked. We will contact you soon to confirm.",
                    ))
                    .await;
                navigator.navigate(Page::Directory);
                SubmitOutcome::Booked(record)
            }
            Err(e) => {
                tracing::error!(error = %e, "error booking appointment");
                dialogs
                    .show(Dialog::error(
                        "Booking Failed",
                        "There was an error booking your appointment. Please try again.",
                    ))
                    .await;
                SubmitOutcome::Failed
            }
        }
    }
}
