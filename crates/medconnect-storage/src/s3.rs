use aws_sdk_s3::Client;
use medconnect_core::keys;
use medconnect_core::models::appointment::{AppointmentRequest, StoredAppointment};
use medconnect_core::models::doctor::Doctor;

use crate::error::StorageError;
use crate::objects;
use crate::store::{BoxFuture, DoctorCatalog, DocumentStore, stamp_appointment};

/// Document store over a single S3 bucket.
///
/// Layout follows [`medconnect_core::keys`]: the static list at
/// `doctor_list_key`, one object per doctor under `doctors/`, and one object
/// per appointment under `appointments/`.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    doctor_list_key: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            doctor_list_key: keys::DOCTOR_LIST.to_string(),
        }
    }

    pub fn with_doctor_list_key(mut self, key: impl Into<String>) -> Self {
        self.doctor_list_key = key.into();
        self
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl DoctorCatalog for S3Store {
    fn fetch_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>> {
        Box::pin(async {
            let doctors: Vec<Doctor> =
                objects::get_json(&self.client, &self.bucket, &self.doctor_list_key).await?;
            tracing::debug!(count = doctors.len(), key = %self.doctor_list_key, "doctor list fetched");
            Ok(doctors)
        })
    }
}

impl DocumentStore for S3Store {
    fn get_doctor<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Doctor>, StorageError>> {
        Box::pin(async move {
            let key = keys::doctor(id).ok_or_else(|| StorageError::InvalidKey(id.to_string()))?;
            match objects::get_json::<Doctor>(&self.client, &self.bucket, &key).await {
                Ok(mut doctor) => {
                    // The object key is authoritative, like a document id.
                    doctor.id = id.to_string();
                    Ok(Some(doctor))
                }
                Err(StorageError::NotFound { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }

    fn add_appointment(
        &self,
        request: AppointmentRequest,
    ) -> BoxFuture<'_, Result<StoredAppointment, StorageError>> {
        Box::pin(async move {
            let record = stamp_appointment(request);
            let key = keys::appointment(record.id);
            objects::put_json(&self.client, &self.bucket, &key, &record).await?;
            tracing::info!(
                appointment_id = %record.id,
                doctor_id = %record.request.doctor_id,
                "appointment stored"
            );
            Ok(record)
        })
    }
}
