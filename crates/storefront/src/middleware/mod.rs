//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)
//! 4. Login redirect (turn 401 responses into a redirect to `/login`)

pub mod auth;
pub mod session;

pub use auth::{AuthToken, clear_auth_token, redirect_unauthorized_to_login, set_auth_token};
pub use session::create_session_layer;
