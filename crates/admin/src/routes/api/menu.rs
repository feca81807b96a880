//! Menu API handlers.

use axum::{Json, Router, extract::State, routing::get};

use pizza_box_core::MenuItem;

use crate::db::MenuRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Build the menu router.
pub fn router() -> Router<AppState> {
    Router::new().route("/menu", get(index))
}

/// List the items customers can order right now, ordered by category
/// then name.
///
/// No fallback here, unlike settings. An unreadable menu means a broken
/// storefront either way, so failures surface as 500s and the
/// storefront's cache keeps serving the last good copy.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = MenuRepository::new(state.pool()).list_available().await?;
    Ok(Json(items))
}
