//! # persons-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST JSON API** under `/api/persons`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses and status codes
//!
//! ## Dependency rule
//! Depends on `persons-app` (for port traits and services) and `persons-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
