//! Menu item repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use pizza_box_core::{MenuItem, MenuItemId};

use super::RepositoryError;

/// A menu item row as stored, including bookkeeping columns the public
/// API does not expose.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MenuItemRecord {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub item_type: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub item_type: Option<String>,
    pub is_available: bool,
}

/// Repository for menu item database operations.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List items customers can order, grouped by category then name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let items = sqlx::query_as::<_, MenuItem>(
            r"
            SELECT id, name, description, price, category, item_type, is_available
            FROM menu_items
            WHERE is_available = TRUE
            ORDER BY category NULLS LAST, name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// List every item, available or not, for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<MenuItemRecord>, RepositoryError> {
        let items = sqlx::query_as::<_, MenuItemRecord>(
            r"
            SELECT id, name, description, price, category, item_type,
                   is_available, created_at, updated_at
            FROM menu_items
            ORDER BY category NULLS LAST, name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Insert a menu item and return its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, item: &NewMenuItem) -> Result<MenuItemId, RepositoryError> {
        let (id,): (MenuItemId,) = sqlx::query_as(
            r"
            INSERT INTO menu_items (name, description, price, category, item_type, is_available)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.category)
        .bind(&item.item_type)
        .bind(item.is_available)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
