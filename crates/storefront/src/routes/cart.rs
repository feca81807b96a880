//! Cart route handlers.
//!
//! Cart contents live in the visitor's session snapshot, never on the
//! admin side. Mutations follow post-redirect-get: every form posts here,
//! the snapshot is updated, and the browser is sent back to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use pizza_box_core::{
    AddressKind, CartItem, DeliveryAddress, MenuItemId, StoreState, User, UserId, UserRole,
};

use crate::api::ApiError;
use crate::error::AppError;
use crate::middleware::AuthToken;
use crate::state::AppState;
use crate::store::SessionStore;

/// Cart line display data for templates.
pub struct CartItemView {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub instructions: Option<String>,
}

/// Cart display data for templates.
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

/// Saved delivery address display data.
pub struct AddressView {
    pub location: String,
    pub details: Vec<String>,
    pub kind: &'static str,
}

/// Minimum-order shortfall display data.
pub struct ShortfallView {
    pub minimum: String,
    pub missing: String,
}

/// Format a price in rupees.
fn format_price(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            line_total: format_price(item.line_total()),
            instructions: item
                .options
                .as_ref()
                .and_then(|options| options.get("instructions"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        }
    }
}

impl From<&StoreState> for CartView {
    fn from(state: &StoreState) -> Self {
        Self {
            items: state.cart.iter().map(CartItemView::from).collect(),
            subtotal: format_price(state.subtotal()),
            item_count: state.item_count(),
        }
    }
}

impl From<&DeliveryAddress> for AddressView {
    fn from(address: &DeliveryAddress) -> Self {
        let details = [
            address.house.as_deref(),
            address.floor.as_deref(),
            address.building.as_deref(),
            address.landmark.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

        Self {
            location: address.location.clone(),
            details,
            kind: match address.kind {
                AddressKind::Home => "Home",
                AddressKind::Work => "Work",
                AddressKind::Other => "Other",
            },
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Empty form fields post as empty strings; treat those as absent.
fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: i64,
    pub quantity: Option<u32>,
    pub instructions: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: i64,
}

/// Delivery address form data.
#[derive(Debug, Deserialize)]
pub struct DeliveryAddressForm {
    pub location: String,
    pub house: Option<String>,
    pub floor: Option<String>,
    pub building: Option<String>,
    pub landmark: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AddressKind>,
    pub address_id: Option<i64>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub address: Option<AddressView>,
    pub user_name: Option<String>,
    pub is_guest: bool,
    pub shortfall: Option<ShortfallView>,
}

/// Display the cart page.
///
/// Settings are only needed for the minimum-order note, so an unreachable
/// admin service drops the note rather than the page.
#[instrument(skip(state, token, store))]
pub async fn show(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    store: SessionStore,
) -> Result<impl IntoResponse, AppError> {
    let min_order = match state.api().get_settings(token.as_deref()).await {
        Ok(settings) => Some(settings.min_order_amount),
        Err(err @ ApiError::Unauthorized) => return Err(err.into()),
        Err(err) => {
            tracing::warn!("Failed to fetch settings for the cart page: {err}");
            None
        }
    };

    let snapshot = store.state();
    let subtotal = snapshot.subtotal();

    let shortfall = min_order
        .filter(|minimum| *minimum > subtotal && !snapshot.cart.is_empty())
        .map(|minimum| ShortfallView {
            minimum: format_price(minimum),
            missing: format_price(minimum - subtotal),
        });

    Ok(CartShowTemplate {
        cart: CartView::from(snapshot),
        address: snapshot.delivery_address.as_ref().map(AddressView::from),
        user_name: snapshot.user.as_ref().map(|user| user.name.clone()),
        is_guest: snapshot.user.as_ref().is_some_and(User::is_guest),
        shortfall,
    })
}

/// Add a menu item to the cart.
///
/// The form only carries the item id; name and price are resolved from
/// the menu so the client cannot invent its own prices.
#[instrument(skip(state, token, store))]
pub async fn add(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    mut store: SessionStore,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect, AppError> {
    let menu = state.api().get_menu(token.as_deref()).await?;

    let wanted = MenuItemId::from(form.item_id);
    let Some(item) = menu.iter().find(|item| item.id == wanted) else {
        return Err(AppError::BadRequest(format!(
            "Unknown menu item {}",
            form.item_id
        )));
    };

    let options = none_if_blank(form.instructions)
        .map(|instructions| serde_json::json!({ "instructions": instructions.trim() }));

    store
        .add_to_cart(CartItem {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: form.quantity.unwrap_or(1),
            options,
            addons: None,
            variant: None,
            item_type: item.item_type.clone(),
        })
        .await;

    Ok(Redirect::to("/cart"))
}

/// Remove an item from the cart.
#[instrument(skip(store))]
pub async fn remove(
    mut store: SessionStore,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect, AppError> {
    store.remove_from_cart(form.item_id.into()).await;

    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
#[instrument(skip(store))]
pub async fn clear(mut store: SessionStore) -> Result<Redirect, AppError> {
    store.clear_cart().await;

    Ok(Redirect::to("/cart"))
}

/// Save the delivery address from the cart page form.
#[instrument(skip(store))]
pub async fn save_address(
    mut store: SessionStore,
    Form(form): Form<DeliveryAddressForm>,
) -> Result<Redirect, AppError> {
    let location = form.location.trim().to_string();
    if location.is_empty() {
        return Err(AppError::BadRequest(
            "A delivery location is required".to_string(),
        ));
    }

    let address = DeliveryAddress {
        location: location.clone(),
        house: none_if_blank(form.house),
        floor: none_if_blank(form.floor),
        building: none_if_blank(form.building),
        landmark: none_if_blank(form.landmark),
        kind: form.kind.unwrap_or_default(),
    };

    store.set_location(Some(location)).await;
    store.set_delivery_address(Some(address)).await;
    store
        .set_selected_address_id(form.address_id.map(Into::into))
        .await;

    Ok(Redirect::to("/cart"))
}

/// Attach a guest identity to the session.
#[instrument(skip(store))]
pub async fn continue_as_guest(mut store: SessionStore) -> Result<Redirect, AppError> {
    let user = User {
        id: UserId::new(format!("guest-{}", Uuid::new_v4())),
        name: "Guest".to_string(),
        email: String::new(),
        role: UserRole::Customer,
        phone: None,
        is_guest: Some(true),
    };

    store.set_user(Some(user)).await;

    Ok(Redirect::to("/cart"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use crate::config::StorefrontConfig;

    use super::*;

    fn state_with_unreachable_api() -> AppState {
        let config = StorefrontConfig {
            database_url: SecretString::from("postgres://nobody@127.0.0.1:1/pizza_box"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            api_base_url: "http://127.0.0.1:1".parse().unwrap(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(100))
            .connect_lazy("postgres://nobody@127.0.0.1:1/pizza_box")
            .unwrap();

        AppState::new(config, pool)
    }

    fn app() -> Router {
        Router::new()
            .route("/cart", get(show))
            .route("/cart/add", post(add))
            .route("/cart/clear", post(clear))
            .route("/cart/address", post(save_address))
            .route("/cart/guest", post(continue_as_guest))
            .layer(SessionManagerLayer::new(MemoryStore::default()))
            .with_state(state_with_unreachable_api())
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn the_cart_page_renders_even_when_the_admin_api_is_down() {
        let response = app()
            .oneshot(Request::builder().uri("/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn adding_needs_the_menu_so_an_unreachable_api_is_a_bad_gateway() {
        let response = app()
            .oneshot(form_post("/cart/add", "item_id=1&quantity=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn clearing_the_cart_redirects_back_to_it() {
        let response = app().oneshot(form_post("/cart/clear", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/cart");
    }

    #[tokio::test]
    async fn a_blank_location_is_rejected() {
        let response = app()
            .oneshot(form_post("/cart/address", "location=+++"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn continue_as_guest_redirects_back_to_the_cart() {
        let response = app().oneshot(form_post("/cart/guest", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/cart");
    }

    #[test]
    fn line_instructions_surface_from_the_options_payload() {
        let item = CartItem {
            id: 3.into(),
            name: "Farmhouse".to_string(),
            price: Decimal::new(29900, 2),
            quantity: 1,
            options: Some(serde_json::json!({ "instructions": "extra jalapenos" })),
            addons: None,
            variant: None,
            item_type: Some("veg".to_string()),
        };

        let view = CartItemView::from(&item);

        assert_eq!(view.instructions.as_deref(), Some("extra jalapenos"));
        assert_eq!(view.line_total, "₹299.00");
    }

    #[test]
    fn the_shortfall_math_uses_the_configured_minimum() {
        let mut state = StoreState::default();
        state.add_to_cart(CartItem {
            id: 1.into(),
            name: "Garlic Bread".to_string(),
            price: Decimal::new(9900, 2),
            quantity: 1,
            options: None,
            addons: None,
            variant: None,
            item_type: None,
        });

        let minimum = Decimal::new(29900, 2);
        let missing = minimum - state.subtotal();

        assert_eq!(format_price(missing), "₹200.00");
    }

    #[test]
    fn blank_form_fields_become_absent() {
        assert_eq!(none_if_blank(Some("  ".to_string())), None);
        assert_eq!(none_if_blank(None), None);
        assert_eq!(
            none_if_blank(Some("2nd floor".to_string())),
            Some("2nd floor".to_string())
        );
    }
}
