//! Runtime adapters and handlers for the Ad-Forge assistant integration.
//!
//! This crate owns the HTTP client for the forge backend, the create-ad and
//! job-status handlers, and process setup shared by the Lambda and CLI
//! binaries. Domain contracts live in `ad_forge_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
