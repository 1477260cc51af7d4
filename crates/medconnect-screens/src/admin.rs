use medconnect_storage::store::DoctorCatalog;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::surface::{Dialog, DialogSurface, Navigator};

/// Shared admin password, compared verbatim on the client.
///
/// WARNING: this is not authentication. The value ships with the client,
/// anyone can read it, and nothing behind the panel is enforced
/// server-side. It only hides a read-only doctor count. Do not put
/// anything sensitive behind this gate; replace it with a real session
/// boundary first.
pub const ADMIN_PASSWORD: &str = "admin123";

pub const PASSWORD_ERROR_MESSAGE: &str = "Incorrect password";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminView {
    pub login_visible: bool,
    pub panel_visible: bool,
    /// Inline message under the password field, when the last attempt failed.
    pub password_error: Option<String>,
    /// Unset until the count loads.
    pub total_doctors: Option<String>,
}

/// Password-gated admin panel showing the number of listed doctors.
#[derive(Debug, Default)]
pub struct AdminScreen {
    unlocked: bool,
    password_error: bool,
    total_doctors: Option<usize>,
}

impl AdminScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn total_doctors(&self) -> Option<usize> {
        self.total_doctors
    }

    /// Compare `password` against [`ADMIN_PASSWORD`]; on a match reveal the
    /// panel and load the count. Returns whether the panel is now shown.
    pub async fn login(
        &mut self,
        password: &str,
        catalog: &dyn DoctorCatalog,
        dialogs: &dyn DialogSurface,
    ) -> bool {
        if password != ADMIN_PASSWORD {
            tracing::warn!("admin login rejected");
            self.password_error = true;
            return false;
        }

        self.unlocked = true;
        self.load_doctor_count(catalog, dialogs).await;
        true
    }

    async fn load_doctor_count(&mut self, catalog: &dyn DoctorCatalog, dialogs: &dyn DialogSurface) {
        match catalog.fetch_doctors().await {
            Ok(doctors) => self.total_doctors = Some(doctors.len()),
            Err(e) => {
                tracing::error!(error = %e, "failed to load doctors data");
                dialogs
                    .show(Dialog::error("Error", "Failed to load doctor data"))
                    .await;
            }
        }
    }

    /// No session is held, so logging out is a page reload.
    pub fn logout(&self, navigator: &dyn Navigator) {
        navigator.reload();
    }

    pub fn view(&self) -> AdminView {
        AdminView {
            login_visible: !self.unlocked,
            panel_visible: self.unlocked,
            password_error: (self.password_error && !self.unlocked)
                .then(|| PASSWORD_ERROR_MESSAGE.to_string()),
            total_doctors: self.total_doctors.map(|n| n.to_string()),
        }
    }
}
