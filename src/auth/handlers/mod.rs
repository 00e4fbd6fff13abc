//! HTTP handlers for the auth endpoints.

/// Request/response types shared by the handlers
pub mod types;

/// POST /api/auth/sign-in
pub mod signin;

/// DELETE /api/auth/sign-out
pub mod signout;

/// POST /api/auth/sign-up
pub mod signup;

pub use signin::sign_in;
pub use signout::sign_out;
pub use signup::sign_up;
