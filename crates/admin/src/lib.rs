//! `myron-admin` library crate.
//!
//! The resource pages (form/list controllers), the dashboard aggregator
//! and the terminal rendering used by the `myron-admin` binary.

pub mod categories;
pub mod cli;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod prompt;
pub mod render;
