//! Dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use tracing::instrument;

use pizza_box_core::StoreSettings;

use crate::db::MenuRepository;
use crate::db::menu::MenuItemRecord;
use crate::services::SettingsService;
use crate::state::AppState;

/// Store settings display data for templates.
#[derive(Debug, Clone)]
pub struct SettingsView {
    pub restaurant_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    pub min_order: String,
    pub operating_hours: String,
    pub status: &'static str,
}

impl From<&StoreSettings> for SettingsView {
    fn from(settings: &StoreSettings) -> Self {
        Self {
            restaurant_name: settings.restaurant_name.clone(),
            contact_phone: settings.contact_phone.clone(),
            contact_email: settings.contact_email.clone(),
            address: settings.address.clone(),
            min_order: format_price(settings.min_order_amount),
            operating_hours: settings.operating_hours.clone(),
            status: status_label(settings),
        }
    }
}

/// Menu row display data for templates.
#[derive(Debug, Clone)]
pub struct MenuRowView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub availability: &'static str,
    pub updated: String,
}

impl From<&MenuItemRecord> for MenuRowView {
    fn from(record: &MenuItemRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            price: format_price(record.price),
            availability: if record.is_available {
                "Available"
            } else {
                "Hidden"
            },
            updated: record.updated_at.format("%d %b %Y").to_string(),
        }
    }
}

/// Format an amount as a rupee price string.
fn format_price(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

/// Human label for the order-taking status.
fn status_label(settings: &StoreSettings) -> &'static str {
    if !settings.is_open {
        "Closed"
    } else if settings.is_paused {
        "Paused"
    } else {
        "Open"
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub settings: SettingsView,
    pub menu: Vec<MenuRowView>,
}

/// Redirect the bare root to the dashboard.
pub async fn redirect_to_dashboard() -> Redirect {
    Redirect::to("/dashboard")
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let settings_service = SettingsService::new(state.pool());
    let menu_repo = MenuRepository::new(state.pool());

    let (settings, menu_result) =
        tokio::join!(settings_service.read_with_fallback(), menu_repo.list_all());

    let menu = menu_result.map_or_else(
        |e| {
            tracing::error!("Failed to load menu for dashboard: {e}");
            Vec::new()
        },
        |records| records.iter().map(MenuRowView::from).collect(),
    );

    DashboardTemplate {
        settings: SettingsView::from(&settings),
        menu,
    }
}
