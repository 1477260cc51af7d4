//! medconnect-storage
//!
//! The document-store boundary: trait seams for the static doctor list and
//! the appointment store, plus an S3-backed implementation.

pub mod client;
pub mod error;
pub mod objects;
pub mod s3;
pub mod store;
