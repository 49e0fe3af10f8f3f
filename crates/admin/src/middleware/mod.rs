//! HTTP middleware stack for admin.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (admin CSP admits same-origin scripts for printing)
//!
//! The admin binary binds to localhost only and has no login.

pub mod security_headers;

pub use security_headers::security_headers_middleware;
