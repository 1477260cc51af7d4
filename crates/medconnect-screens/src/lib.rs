//! medconnect-screens
//!
//! Screen controllers for the clinic directory and booking flow. Each
//! screen owns its transient state for one activation, talks to storage
//! only through the traits in `medconnect_storage::store`, and exposes a
//! serializable view for whatever surface renders it.

pub mod admin;
pub mod appointment;
pub mod directory;
pub mod navigation;
pub mod profile;
pub mod surface;
