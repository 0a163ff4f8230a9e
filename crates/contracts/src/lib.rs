//! Shared request/response shapes between the frontend and the REST backend.
//!
//! Everything here is a plain serde DTO; the UI holds no authoritative
//! state, it only mirrors these records.

pub mod domain;
pub mod shared;
pub mod system;
