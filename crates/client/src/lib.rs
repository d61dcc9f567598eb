//! Typed REST client for the Myron NGO backend.
//!
//! Wraps the category, donation, event and contact collections behind
//! [`resources::ResourceService`], built on one explicitly constructed
//! [`api::ApiClient`] that carries the base URL.

pub mod api;
pub mod config;
pub mod envelope;
pub mod resources;
