//! Types shared across the API layer.

pub mod error;
