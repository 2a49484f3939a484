//! # persons-domain
//!
//! Pure domain model for the persons service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PersonId`](id::PersonId) and error conventions
//! - Define the [`Person`](person::Person) record and its create/update payloads
//! - Enforce the creation invariant (non-blank name)
//! - Define the JSON encoding of binary `data` (base64)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod codec;
pub mod error;
pub mod id;

pub mod person;
