//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`,
//! `bitflags`, `thiserror`). Keep it lean: no I/O, networking, or heavy
//! logic, just data and simple helpers.
//!
//! The heart of the crate is [`features`]: the closed flag set, the
//! constraint graph, and the [`features::FeatureResolver`] every gate in the
//! system consults.

pub mod config;
pub mod constants;
pub mod features;
pub mod registry;
