//! Error Module
//!
//! Defines the service error taxonomy used across the auth and listing
//! subsystems, plus its conversion into HTTP responses.
//!
//! Errors are never logged-and-swallowed inside the core: every failure
//! propagates to its caller, and only the HTTP conversion layer decides
//! what to log and what to put on the wire. There are no automatic
//! retries anywhere.

mod conversion;
mod types;

pub use types::ServiceError;
