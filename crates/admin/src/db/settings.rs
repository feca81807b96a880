//! Store settings repository.
//!
//! The `store_settings` table holds at most one row (id fixed to 1). An
//! empty table is a normal state, not an error: consumers decide what a
//! missing row means (see `services::settings` for the fallback policy).

use sqlx::PgPool;

use pizza_box_core::StoreSettings;

use super::RepositoryError;

/// Repository for store settings database operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find(&self) -> Result<Option<StoreSettings>, RepositoryError> {
        let settings = sqlx::query_as::<_, StoreSettings>(
            r"
            SELECT restaurant_name, contact_phone, contact_email, address,
                   min_order_amount, operating_hours, is_open, is_paused,
                   notifications_enabled
            FROM store_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(settings)
    }

    /// Insert or replace the settings row.
    ///
    /// Used by seeds and ops tooling; the admin API itself never writes
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, settings: &StoreSettings) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO store_settings (
                id, restaurant_name, contact_phone, contact_email, address,
                min_order_amount, operating_hours, is_open, is_paused,
                notifications_enabled
            )
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                restaurant_name = EXCLUDED.restaurant_name,
                contact_phone = EXCLUDED.contact_phone,
                contact_email = EXCLUDED.contact_email,
                address = EXCLUDED.address,
                min_order_amount = EXCLUDED.min_order_amount,
                operating_hours = EXCLUDED.operating_hours,
                is_open = EXCLUDED.is_open,
                is_paused = EXCLUDED.is_paused,
                notifications_enabled = EXCLUDED.notifications_enabled,
                updated_at = NOW()
            ",
        )
        .bind(&settings.restaurant_name)
        .bind(&settings.contact_phone)
        .bind(&settings.contact_email)
        .bind(&settings.address)
        .bind(settings.min_order_amount)
        .bind(&settings.operating_hours)
        .bind(settings.is_open)
        .bind(settings.is_paused)
        .bind(settings.notifications_enabled)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
