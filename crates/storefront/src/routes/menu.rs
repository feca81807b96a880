//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use tracing::instrument;

use pizza_box_core::MenuItem;

use crate::error::AppError;
use crate::middleware::AuthToken;
use crate::state::AppState;

/// Menu item display data for templates.
pub struct MenuItemView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub item_type: Option<String>,
}

/// A menu section with its items, in serving order.
pub struct CategoryView {
    pub name: String,
    pub items: Vec<MenuItemView>,
}

/// Format a price in rupees.
fn format_price(amount: Decimal) -> String {
    format!("₹{amount:.2}")
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_price(item.price),
            item_type: item.item_type.clone(),
        }
    }
}

/// Group items into category sections.
///
/// The admin API already orders by category then name, so grouping
/// consecutive runs preserves its ordering.
fn group_by_category(items: &[MenuItem]) -> Vec<CategoryView> {
    let mut categories: Vec<CategoryView> = Vec::new();

    for item in items {
        let name = item.category.as_deref().unwrap_or("More from the kitchen");
        match categories.last_mut() {
            Some(last) if last.name == name => last.items.push(MenuItemView::from(item)),
            _ => categories.push(CategoryView {
                name: name.to_string(),
                items: vec![MenuItemView::from(item)],
            }),
        }
    }

    categories
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/index.html")]
pub struct MenuTemplate {
    pub categories: Vec<CategoryView>,
}

/// Display the menu with add-to-cart forms.
///
/// Unlike the home page there is nothing sensible to render without the
/// menu itself, so fetch failures propagate to the error page.
#[instrument(skip(state, token))]
pub async fn index(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let items = state.api().get_menu(token.as_deref()).await?;

    Ok(MenuTemplate {
        categories: group_by_category(&items),
    })
}
