//! Directory filtering and filter-option derivation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::doctor::Doctor;

pub const ALL_SPECIALIZATIONS: &str = "All Specializations";
pub const ALL_BRANCHES: &str = "All Branches";

/// The three directory predicates. An empty string matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoctorFilter {
    /// Case-insensitive substring of the doctor's name.
    #[serde(default)]
    pub name: String,
    /// Exact specialization.
    #[serde(default)]
    pub specialization: String,
    /// Exact branch.
    #[serde(default)]
    pub branch: String,
}

impl DoctorFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.specialization.is_empty() && self.branch.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.specialization.clear();
        self.branch.clear();
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let name_ok = self.name.is_empty()
            || doctor
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase());
        let specialization_ok =
            self.specialization.is_empty() || doctor.specialization == self.specialization;
        let branch_ok = self.branch.is_empty() || doctor.branch == self.branch;

        name_ok && specialization_ok && branch_ok
    }

    /// The subset of `doctors` matching every active predicate, in input order.
    pub fn apply(&self, doctors: &[Doctor]) -> Vec<Doctor> {
        doctors.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}

/// One entry of a filter `<select>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn wildcard(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn exact(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// Selectable specializations and branches, each led by an "all" wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterOptions {
    pub specializations: Vec<SelectOption>,
    pub branches: Vec<SelectOption>,
}

impl FilterOptions {
    pub fn from_doctors(doctors: &[Doctor]) -> Self {
        let specializations: BTreeSet<&str> =
            doctors.iter().map(|d| d.specialization.as_str()).collect();
        let branches: BTreeSet<&str> = doctors.iter().map(|d| d.branch.as_str()).collect();

        Self {
            specializations: with_wildcard(ALL_SPECIALIZATIONS, specializations),
            branches: with_wildcard(ALL_BRANCHES, branches),
        }
    }
}

fn with_wildcard(label: &str, values: BTreeSet<&str>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::wildcard(label))
        .chain(values.into_iter().map(SelectOption::exact))
        .collect()
}
