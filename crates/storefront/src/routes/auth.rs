//! Login page route handler.
//!
//! The storefront has no credential flow of its own. This page exists as
//! the landing spot for the 401 redirect: when an admin API call comes
//! back unauthorized, the middleware sends the visitor here.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate;

/// Display the login page.
#[instrument]
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}
