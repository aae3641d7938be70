//! FitTrack Shared Library
//!
//! This crate contains shared types, models, and utilities used across
//! the backend and any future client crates.

pub mod lists;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use lists::{decode_list, encode_list};
pub use models::{BodyMetric, UserProfile};
pub use types::*;
