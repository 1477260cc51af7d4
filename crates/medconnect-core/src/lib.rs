//! medconnect-core
//!
//! Pure domain types, directory filtering, booking-form validation and
//! document-store key conventions. No AWS SDK dependency — this is the
//! shared vocabulary of the MedConnect system.

pub mod directory;
pub mod keys;
pub mod models;
pub mod validation;
