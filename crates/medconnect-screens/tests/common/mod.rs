#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use medconnect_core::models::appointment::{AppointmentRequest, StoredAppointment};
use medconnect_core::models::doctor::Doctor;
use medconnect_storage::error::StorageError;
use medconnect_storage::store::{BoxFuture, DoctorCatalog, DocumentStore, stamp_appointment};
use tokio::sync::Notify;

pub fn doctor(id: &str, name: &str, specialization: &str, branch: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        branch: branch.to_string(),
        qualifications: "MBBS, MD".to_string(),
        availability: "Mon-Fri 9am-5pm".to_string(),
        photo_url: None,
    }
}

pub fn roster() -> Vec<Doctor> {
    vec![
        doctor("d1", "Dr. A", "Cardiology", "Main"),
        doctor("d2", "Dr. Ben Carter", "Neurology", "Westside"),
        doctor("d3", "Dr. Clara Mendes", "Cardiology", "Westside"),
    ]
}

/// Static doctor list that either serves `doctors` or fails every fetch.
pub struct FakeCatalog {
    doctors: Option<Vec<Doctor>>,
    pub fetches: AtomicUsize,
}

impl FakeCatalog {
    pub fn serving(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors: Some(doctors),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            doctors: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DoctorCatalog for FakeCatalog {
    fn fetch_doctors(&self) -> BoxFuture<'_, Result<Vec<Doctor>, StorageError>> {
        Box::pin(async {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.doctors
                .clone()
                .ok_or_else(|| StorageError::GetObject("connection reset".to_string()))
        })
    }
}

/// In-memory document store recording every appointment written.
#[derive(Default)]
pub struct FakeStore {
    doctors: HashMap<String, Doctor>,
    fail_reads: bool,
    fail_writes: bool,
    hang_writes: bool,
    write_gate: Option<Arc<Notify>>,
    written: Mutex<Vec<AppointmentRequest>>,
}

impl FakeStore {
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors: doctors.into_iter().map(|d| (d.id.clone(), d)).collect(),
            ..Default::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Writes wait until `gate` is notified.
    pub fn gated_writes(mut self, gate: Arc<Notify>) -> Self {
        self.write_gate = Some(gate);
        self
    }

    /// Writes never complete.
    pub fn hanging_writes(mut self) -> Self {
        self.hang_writes = true;
        self
    }

    pub fn written(&self) -> Vec<AppointmentRequest> {
        self.written.lock().unwrap().clone()
    }
}

impl DocumentStore for FakeStore {
    fn get_doctor<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Doctor>, StorageError>> {
        Box::pin(async move {
            if self.fail_reads {
                return Err(StorageError::GetObject("timeout".to_string()));
            }
            Ok(self.doctors.get(id).cloned())
        })
    }

    fn add_appointment(
        &self,
        request: AppointmentRequest,
    ) -> BoxFuture<'_, Result<StoredAppointment, StorageError>> {
        Box::pin(async move {
            if self.hang_writes {
                std::future::pending::<()>().await;
            }
            if let Some(gate) = &self.write_gate {
                gate.notified().await;
            }
            if self.fail_writes {
                return Err(StorageError::PutObject("access denied".to_string()));
            }
            self.written.lock().unwrap().push(request.clone());
            Ok(stamp_appointment(request))
        })
    }
}
