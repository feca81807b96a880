//! Store settings API handlers.

use axum::{Json, Router, extract::State, routing::get};

use pizza_box_core::StoreSettings;

use crate::services::SettingsService;
use crate::state::AppState;

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new().route("/settings", get(show))
}

/// Serve the store settings.
///
/// Always responds 200 with a complete payload. A missing row or an
/// unreadable database both resolve to the launch defaults; see
/// [`SettingsService::read_with_fallback`].
pub async fn show(State(state): State<AppState>) -> Json<StoreSettings> {
    Json(SettingsService::new(state.pool()).read_with_fallback().await)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AdminConfig;

    fn state_with_unreachable_database() -> AppState {
        let config = AdminConfig {
            database_url: secrecy::SecretString::from("postgres://nobody@127.0.0.1:1/pizza_box"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(100))
            .connect_lazy("postgres://nobody@127.0.0.1:1/pizza_box")
            .unwrap();
        AppState::new(config, pool)
    }

    #[tokio::test]
    async fn responds_200_with_defaults_when_database_is_down() {
        let app = router().with_state(state_with_unreachable_database());

        let response = app
            .oneshot(Request::get("/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let settings: StoreSettings = serde_json::from_slice(&body).unwrap();
        assert_eq!(settings, StoreSettings::default());
    }

    #[tokio::test]
    async fn payload_shape_matches_what_the_storefront_parses() {
        let app = router().with_state(state_with_unreachable_database());

        let response = app
            .oneshot(Request::get("/settings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["restaurantName"], "The Pizza Box");
        assert_eq!(json["operatingHours"], "9 AM - 11 PM");
        assert!(json["minOrderAmount"].is_number());
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["isPaused"], false);
        assert_eq!(json["notificationsEnabled"], true);
    }
}
