//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Dashboard (server-rendered, staff-facing)
//! GET  /                       - Redirect to /dashboard
//! GET  /dashboard              - Store overview
//!
//! # JSON API (consumed by the storefront)
//! GET  /admin/settings         - Store settings (always 200, see services::settings)
//! GET  /admin/menu             - Available menu items
//! ```
//!
//! Health endpoints are registered in `main.rs` next to the listener.

pub mod api;
pub mod dashboard;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::redirect_to_dashboard))
        .route("/dashboard", get(dashboard::index))
}

/// Create all routes for the admin service.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Staff dashboard
        .merge(dashboard_routes())
        // Storefront-facing JSON API
        .nest("/admin", api::routes())
}
