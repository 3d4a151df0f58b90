//! Shared Ad-Forge domain primitives.
//!
//! This crate owns the product catalog, the forge request/response contract,
//! and the result envelopes handed back to the voice-assistant host. It
//! excludes HTTP clients and Lambda runtime concerns.

pub mod catalog;
pub mod contract;
pub mod envelope;
pub mod event;
pub mod job;
