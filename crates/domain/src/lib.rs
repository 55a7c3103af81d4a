//! # tvbridge-domain
//!
//! Domain model for tvbridge — the pure vocabulary of controlling networked
//! televisions over the vendor IP-control protocol.
//!
//! ## Responsibilities
//! - Device configuration records ([`config::TvConfig`])
//! - The closed protocol vocabularies ([`vocab`]: apps, inputs, keys,
//!   energy-saving levels, picture modes)
//! - Sanitizing raw device replies ([`sanitize`])
//! - Device state value objects ([`state`])
//! - The workspace error taxonomy ([`error`])
//!
//! ## Dependency rule
//! No IO, no frameworks. Only `serde` (derives for API serialization) and
//! `thiserror`. Every other crate in the workspace depends on this one;
//! this one depends on nothing internal.

pub mod config;
pub mod error;
pub mod interface;
pub mod sanitize;
pub mod state;
pub mod vocab;
