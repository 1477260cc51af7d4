use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Query-string parameters of the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    params: HashMap<String, String>,
}

impl NavigationContext {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// A parameter's value. Empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl From<HashMap<String, String>> for NavigationContext {
    fn from(params: HashMap<String, String>) -> Self {
        Self { params }
    }
}

/// Pages of the site that screens navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "page", rename_all = "snake_case")]
#[ts(export)]
pub enum Page {
    Directory,
    Profile { id: String },
    Appointment { doctor_id: String },
    Admin,
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Directory => "doctors.html".to_string(),
            Page::Profile { id } => format!("doctor.html?id={id}"),
            Page::Appointment { doctor_id } => format!("appointment.html?doctorId={doctor_id}"),
            Page::Admin => "admin.html".to_string(),
        }
    }
}
