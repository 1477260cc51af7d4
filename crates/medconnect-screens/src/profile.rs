use medconnect_core::models::doctor::{Doctor, PROFILE_PLACEHOLDER_PHOTO};
use medconnect_storage::store::DoctorCatalog;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::navigation::{NavigationContext, Page};
use crate::surface::{Dialog, DialogSurface, Navigator};

/// Query parameter carrying the doctor id.
pub const ID_PARAM: &str = "id";

const TITLE_SUFFIX: &str = "MedConnect";

fn page_title(doctor: &Doctor) -> String {
    format!("{} - {TITLE_SUFFIX}", doctor.name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub branch: String,
    pub qualifications: String,
    pub availability: String,
    pub photo_url: String,
    pub photo_alt: String,
    /// Link to the booking form for this doctor.
    pub appointment_href: String,
}

impl ProfileCard {
    fn from_doctor(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            branch: doctor.branch.clone(),
            qualifications: doctor.qualifications.clone(),
            availability: doctor.availability.clone(),
            photo_url: doctor.photo_or(PROFILE_PLACEHOLDER_PHOTO).to_string(),
            photo_alt: doctor.name.clone(),
            appointment_href: Page::Appointment {
                doctor_id: doctor.id.clone(),
            }
            .href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum ProfileView {
    Loading,
    Profile {
        card: ProfileCard,
        title: String,
    },
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Loading,
    Found(Doctor),
    Error,
}

/// Single-doctor profile page.
///
/// Resolves the doctor by scanning the full static list rather than by a
/// point lookup.
#[derive(Debug)]
pub struct ProfileScreen {
    state: State,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            state: State::Loading,
        }
    }

    pub async fn activate(&mut self, nav: &NavigationContext, catalog: &dyn DoctorCatalog) {
        let Some(id) = nav.get(ID_PARAM) else {
            tracing::warn!("profile opened without a doctor id");
            self.state = State::Error;
            return;
        };

        self.state = match catalog.fetch_doctors().await {
            Ok(doctors) => match doctors.into_iter().find(|d| d.id == id) {
                Some(doctor) => State::Found(doctor),
                None => {
                    tracing::warn!(doctor_id = %id, "doctor not in list");
                    State::Error
                }
            },
            Err(e) => {
                tracing::error!(error = %e, doctor_id = %id, "error loading doctor profile");
                State::Error
            }
        };
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match &self.state {
            State::Found(doctor) => Some(doctor),
            State::Loading | State::Error => None,
        }
    }

    /// `"<name> - MedConnect"` once a doctor is loaded.
    pub fn page_title(&self) -> Option<String> {
        self.doctor().map(page_title)
    }

    pub fn view(&self) -> ProfileView {
        match &self.state {
            State::Loading => ProfileView::Loading,
            State::Found(doctor) => ProfileView::Profile {
                card: ProfileCard::from_doctor(doctor),
                title: page_title(doctor),
            },
            State::Error => ProfileView::Error,
        }
    }

    /// The profile's "book" button: an acknowledgment dialog, then back to
    /// the directory. Nothing is written; real bookings go through the
    /// appointment form. Does nothing until a doctor is loaded.
    pub async fn book(&self, dialogs: &dyn DialogSurface, navigator: &dyn Navigator) -> bool {
        let Some(doctor) = self.doctor() else {
            return false;
        };

        dialogs
            .show(
                Dialog::success(
                    "Appointment Confirmed",
                    format!(
                        "Your appointment with {} has been successfully booked.",
                        doctor.name
                    ),
                )
                .confirm_label("Back to Doctors"),
            )
            .await;
        navigator.navigate(Page::Directory);
        true
    }
}
