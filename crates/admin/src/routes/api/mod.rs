//! JSON API consumed by the storefront.
//!
//! Every endpoint here is read-only. The CORS policy reflects that: any
//! origin may GET, nothing else.

pub mod menu;
pub mod settings;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the complete API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(settings::router())
        .merge(menu::router())
        .layer(cors_layer())
}

/// CORS layer for the read-only API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
}
