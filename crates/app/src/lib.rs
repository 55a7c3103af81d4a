//! # tvbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the [`ports::TvControl`] port that device-control clients
//!   implement (driven/outbound port)
//! - Own per-device transactions: the [`registry::TvHandle`] serializes every
//!   connect→operate→disconnect cycle against one TV
//! - Map sanitized protocol replies into typed operations ([`ops`])
//! - Expose high-level intents through [`services::tv_service::TvService`]
//!
//! ## Dependency rule
//! Depends on `tvbridge-domain` only (plus `tokio::sync` for the per-device
//! mutex). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ops;
pub mod ports;
pub mod registry;
pub mod services;
