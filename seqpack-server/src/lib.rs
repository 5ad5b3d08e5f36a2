#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod api;
pub mod common;
pub mod config;
pub mod context;
