//! Core types for the Holidaze booking client.
//!
//! This crate provides everything the CLI needs to talk to the hosted
//! Holidaze API:
//! - `model` types for venues, bookings and profiles
//! - `api` client with envelope decoding and the error taxonomy
//! - `ownership` and `display_name` heuristics layered on top of the API
//! - `session` and `config` for the persisted local state

pub mod api;
pub mod config;
pub mod date_range;
pub mod display_name;
pub mod error;
pub mod manager_requests;
pub mod model;
pub mod ownership;
pub mod session;
pub mod view;

// Re-export model types at crate root for convenience
pub use model::*;
