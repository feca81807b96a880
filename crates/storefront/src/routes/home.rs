//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use tracing::instrument;

use pizza_box_core::StoreSettings;

use crate::api::ApiError;
use crate::error::AppError;
use crate::middleware::AuthToken;
use crate::state::AppState;

/// Restaurant details display data for templates.
pub struct SettingsView {
    pub restaurant_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    pub operating_hours: String,
    pub is_open: bool,
    pub is_paused: bool,
    /// Pre-formatted minimum order amount; `None` when no minimum is set.
    pub min_order: Option<String>,
}

/// Format a price in rupees.
fn format_price(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

impl From<&StoreSettings> for SettingsView {
    fn from(settings: &StoreSettings) -> Self {
        Self {
            restaurant_name: settings.restaurant_name.clone(),
            contact_phone: settings.contact_phone.clone(),
            contact_email: settings.contact_email.clone(),
            address: settings.address.clone(),
            operating_hours: settings.operating_hours.clone(),
            is_open: settings.is_open,
            is_paused: settings.is_paused,
            min_order: (settings.min_order_amount > Decimal::ZERO)
                .then(|| format_price(settings.min_order_amount)),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub settings: SettingsView,
}

/// Display the home page.
///
/// An unreachable admin service degrades to the launch defaults so the
/// page always renders. A 401 still propagates for the login redirect.
#[instrument(skip(state, token))]
pub async fn home(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let settings = match state.api().get_settings(token.as_deref()).await {
        Ok(settings) => settings,
        Err(err @ ApiError::Unauthorized) => return Err(err.into()),
        Err(err) => {
            tracing::error!("Failed to fetch store settings: {err}");
            StoreSettings::default()
        }
    };

    Ok(HomeTemplate {
        settings: SettingsView::from(&settings),
    })
}
