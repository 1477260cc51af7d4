use std::env;

use jiff::tz::TimeZone;

/// Runtime settings read from the Lambda environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    /// `MEDCONNECT_BUCKET`, default `medconnect`.
    pub bucket: String,
    /// `MEDCONNECT_DOCTORS_KEY`, default `doctors.json`.
    pub doctors_key: String,
    /// `MEDCONNECT_TIMEZONE` (IANA name). Decides what "today" is for
    /// booking-date validation. Defaults to the system zone.
    pub timezone: TimeZone,
}

impl LambdaConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let bucket = env::var("MEDCONNECT_BUCKET").unwrap_or_else(|_| "medconnect".to_string());
        let doctors_key = env::var("MEDCONNECT_DOCTORS_KEY")
            .unwrap_or_else(|_| medconnect_core::keys::DOCTOR_LIST.to_string());
        let timezone = match env::var("MEDCONNECT_TIMEZONE") {
            Ok(name) if !name.trim().is_empty() => TimeZone::get(name.trim())
                .map_err(|e| eyre::eyre!("invalid MEDCONNECT_TIMEZONE {name:?}: {e}"))?,
            _ => TimeZone::system(),
        };

        Ok(Self {
            bucket,
            doctors_key,
            timezone,
        })
    }
}
