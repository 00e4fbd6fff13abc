//! Authentication Module
//!
//! User registration, authentication and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── hashing.rs      - Peppered SHA-512 credential hasher
//! ├── users.rs        - User model and store operations
//! ├── sessions.rs     - Session records and bearer tokens
//! ├── service.rs      - Sign-up / sign-in / sign-out orchestration
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /api/auth/sign-up
//!     ├── signin.rs   - POST /api/auth/sign-in
//!     └── signout.rs  - DELETE /api/auth/sign-out
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: login and password -> user created -> session token
//!    returned
//! 2. **Sign-in**: login and password -> credentials matched against the
//!    stored digest -> fresh session token returned
//! 3. **Sign-out**: bearer token -> session row deleted (idempotent)
//!
//! # Security
//!
//! - Passwords are digested with peppered SHA-512 before any comparison or
//!   storage; the raw password never leaves the request scope
//! - Failed sign-in returns one uniform error whatever the cause, so the
//!   endpoint cannot be used to enumerate logins
//! - Sessions expire after a configurable TTL, checked lazily on lookup
//!   and reclaimed by a periodic sweep

/// Peppered credential hashing
pub mod hashing;

/// HTTP handlers for the auth endpoints
pub mod handlers;

/// Sign-up / sign-in / sign-out orchestration
pub mod service;

/// Session records and bearer tokens
pub mod sessions;

/// User model and store operations
pub mod users;

// Re-export commonly used types and handlers
pub use handlers::types::{Credentials, TokenResponse};
pub use handlers::{sign_in, sign_out, sign_up};
pub use service::AuthService;
