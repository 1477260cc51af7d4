use medconnect_core::directory::{DoctorFilter, FilterOptions};
use medconnect_core::models::doctor::{Doctor, PROFILE_PLACEHOLDER_PHOTO};
use medconnect_storage::store::DoctorCatalog;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::navigation::Page;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load doctors.";

/// A directory grid card, keyed by doctor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub branch: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub profile_href: String,
}

impl DoctorCard {
    pub fn from_doctor(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            branch: doctor.branch.clone(),
            photo_url: doctor.photo_or(PROFILE_PLACEHOLDER_PHOTO).to_string(),
            photo_alt: doctor.name.clone(),
            profile_href: Page::Profile {
                id: doctor.id.clone(),
            }
            .href(),
        }
    }
}

/// What the directory body shows. Exactly one region is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum DirectoryBody {
    Loading,
    Error { message: String },
    NoResults,
    Grid { cards: Vec<DoctorCard> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DirectoryView {
    pub body: DirectoryBody,
    pub options: FilterOptions,
    pub filter: DoctorFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Load {
    Loading,
    Ready(Vec<Doctor>),
    Failed,
}

/// Doctor directory: fetches the list once, then filters locally.
#[derive(Debug)]
pub struct DirectoryScreen {
    load: Load,
    options: FilterOptions,
    filter: DoctorFilter,
}

impl Default for DirectoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryScreen {
    pub fn new() -> Self {
        Self {
            load: Load::Loading,
            options: FilterOptions::default(),
            filter: DoctorFilter::default(),
        }
    }

    /// Fetch the doctor list and derive the filter options. A failure is
    /// terminal for this activation; there is no retry.
    pub async fn activate(&mut self, catalog: &dyn DoctorCatalog) {
        match catalog.fetch_doctors().await {
            Ok(doctors) => {
                tracing::debug!(count = doctors.len(), "directory loaded");
                self.options = FilterOptions::from_doctors(&doctors);
                self.load = Load::Ready(doctors);
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading doctors");
                self.load = Load::Failed;
            }
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.name = text.into();
    }

    /// `""` selects the "all" wildcard.
    pub fn select_specialization(&mut self, value: impl Into<String>) {
        self.filter.specialization = value.into();
    }

    /// `""` selects the "all" wildcard.
    pub fn select_branch(&mut self, value: impl Into<String>) {
        self.filter.branch = value.into();
    }

    pub fn apply_filter(&mut self, filter: DoctorFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn filter(&self) -> &DoctorFilter {
        &self.filter
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The doctors currently visible, or `None` before a successful load.
    pub fn visible(&self) -> Option<Vec<Doctor>> {
        match &self.load {
            Load::Ready(doctors) => Some(self.filter.apply(doctors)),
            Load::Loading | Load::Failed => None,
        }
    }

    pub fn view(&self) -> DirectoryView {
        let body = match (&self.load, self.visible()) {
            (Load::Failed, _) => DirectoryBody::Error {
                message: LOAD_FAILED_MESSAGE.to_string(),
            },
            (_, None) => DirectoryBody::Loading,
            (_, Some(visible)) if visible.is_empty() => DirectoryBody::NoResults,
            (_, Some(visible)) => DirectoryBody::Grid {
                cards: visible.iter().map(DoctorCard::from_doctor).collect(),
            },
        };

        DirectoryView {
            body,
            options: self.options.clone(),
            filter: self.filter.clone(),
        }
    }
}
