//! Route Configuration
//!
//! Router assembly for the codeshelf backend.

/// API route wiring
pub mod api_routes;

/// Router creation
pub mod router;

pub use router::create_router;
