//! Domain logic for the Myron NGO admin console.
//!
//! Entity models, draft records, validation rules, the form/list state
//! machine and the dashboard activity derivation. This crate performs no
//! I/O; every collection it works on is handed in by the caller.

pub mod activity;
pub mod error;
pub mod form;
pub mod image;
pub mod models;
pub mod navigation;
pub mod resource;
pub mod types;
pub mod validation;
