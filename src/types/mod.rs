//! Shared type definitions
//!
//! Persisted preference values and application configuration.

pub mod config;
