//! # tvbridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the REST control surface under `/api/v1/tv`
//! - Map HTTP requests into [`TvService`](tvbridge_app::services::tv_service::TvService)
//!   calls (driving adapter), coercing loose JSON payloads into typed values
//! - Map application results into the `{message, data?}` envelope and errors
//!   into appropriate non-2xx statuses
//!
//! ## Dependency rule
//! Depends on `tvbridge-app` (port trait and service) and `tvbridge-domain`
//! (types used in request/response mapping). Never leaks axum types into the
//! application core.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
