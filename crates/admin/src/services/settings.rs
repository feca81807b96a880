//! Store settings reads with the launch-default fallback.
//!
//! The storefront polls `GET /admin/settings` on every page load and has
//! no useful way to render a settings outage. The policy is therefore:
//! settings reads never fail. A missing row or a database error both
//! resolve to [`StoreSettings::default`], and errors are reported
//! server-side only.

use sqlx::PgPool;
use tracing::{debug, error, instrument};

use pizza_box_core::StoreSettings;

use crate::db::{RepositoryError, SettingsRepository};

/// Settings reads that always produce a usable configuration.
pub struct SettingsService<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the store settings, falling back to the launch defaults.
    ///
    /// Database failures are logged (and picked up by the Sentry tracing
    /// layer) but never surface to the caller.
    #[instrument(skip(self))]
    pub async fn read_with_fallback(&self) -> StoreSettings {
        or_launch_defaults(SettingsRepository::new(self.pool).find().await)
    }
}

/// Turn a settings read outcome into the settings to serve.
///
/// A missing row is expected before the first save, so it logs at debug;
/// a failed read logs at error level. Both serve
/// [`StoreSettings::default`].
fn or_launch_defaults(found: Result<Option<StoreSettings>, RepositoryError>) -> StoreSettings {
    match found {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            debug!("No settings row yet, serving launch defaults");
            StoreSettings::default()
        }
        Err(err) => {
            error!(error = %err, "Failed to read store settings, serving launch defaults");
            StoreSettings::default()
        }
    }
}
