use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Placeholder used by directory cards and the profile page.
pub const PROFILE_PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/150";

/// Placeholder used by the booking form's doctor summary.
pub const BOOKING_PLACEHOLDER_PHOTO: &str =
    "https://images.pexels.com/photos/5407206/pexels-photo-5407206.jpeg?auto=compress&cs=tinysrgb&w=400";

/// A practitioner record from the clinic directory.
///
/// Read-only to this system. The shape follows the static `doctors.json`
/// list, so keys are camelCase and the photo lives under `photoURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Doctor {
    /// Store documents may leave the id to their key; the loader fills it in.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub branch: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub availability: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Doctor {
    /// The doctor's photo, or `placeholder` when none is set.
    ///
    /// An empty string counts as unset.
    pub fn photo_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.photo_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}
