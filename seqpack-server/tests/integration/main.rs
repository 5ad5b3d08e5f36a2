//! Integration tests for the complete echo service: routes, JSON error
//! recovery and the CORS policy.

mod cors;
mod echo;
mod round_trip;
mod util;
