//! Shared domain types, errors, and helpers for the CampusLink backend.

pub mod display;
pub mod error;
pub mod tags;
pub mod types;
pub mod validate;
