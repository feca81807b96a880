//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page
//! GET  /health            - Health check
//! GET  /health/ready      - Readiness check
//!
//! # Menu
//! GET  /menu              - Menu with add-to-cart forms
//!
//! # Cart
//! GET  /cart              - Cart page
//! POST /cart/add          - Add an item
//! POST /cart/remove       - Remove an item
//! POST /cart/clear        - Empty the cart
//! POST /cart/address      - Save the delivery address
//! POST /cart/guest        - Continue as guest
//!
//! # Payment
//! GET  /payment-methods   - UPI payment options (display only)
//!
//! # Auth
//! GET  /login             - Login page (401 redirect target)
//! ```
//!
//! Unknown paths fall through to the branded 404 page.

pub mod auth;
pub mod cart;
pub mod home;
pub mod menu;
pub mod payment;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/address", post(cart::save_address))
        .route("/guest", post(cart::continue_as_guest))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Menu
        .route("/menu", get(menu::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Payment methods (display only)
        .route("/payment-methods", get(payment::methods))
        // Login page
        .route("/login", get(auth::login_page))
        // Branded 404 for everything else
        .fallback(not_found)
}

/// Fallback handler for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
