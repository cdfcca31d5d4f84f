//! # Fundraise
//!
//! HTTP API, CLI and configuration for the fundraising portal backend.
//! `main.rs` is a thin wrapper; integration tests drive these modules directly.

pub mod api;
pub mod cli;
pub mod config;

// Re-export fundraise_core for convenience
pub use fundraise_core;
