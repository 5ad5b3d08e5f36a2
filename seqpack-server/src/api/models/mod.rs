//! This module contains the models used within echo server endpoint interactions.

/// Api structures for the echo endpoint.
pub mod echo;
/// Api structures for the health endpoint.
pub mod health;
