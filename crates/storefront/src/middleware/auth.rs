//! Admin API token plumbing and the login redirect.
//!
//! The storefront itself has no accounts. What it holds is an optional
//! bearer token for the admin API, stored in the visitor's session, plus
//! a response filter that walks anyone who hits a 401 over to `/login`.

use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::session_keys;

/// Extractor for the optional admin API bearer token.
///
/// Never rejects; a visitor without a token is simply a guest.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     AuthToken(token): AuthToken,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     let settings = state.api().get_settings(token.as_deref()).await;
///     // ...
/// }
/// ```
pub struct AuthToken(pub Option<String>);

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let token = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<String>(session_keys::AUTH_TOKEN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(token))
    }
}

/// Helper to store the admin API token in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_auth_token(
    session: &Session,
    token: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::AUTH_TOKEN, token).await
}

/// Helper to clear the admin API token from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_auth_token(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(session_keys::AUTH_TOKEN).await?;
    Ok(())
}

/// Turn 401 responses into a redirect to the login page.
///
/// Requests whose path already contains `/login` are left alone, so a
/// rejected login attempt cannot redirect back into itself.
pub async fn redirect_unauthorized_to_login(request: Request, next: Next) -> Response {
    let path_has_login = request.uri().path().contains("/login");

    let response = next.run(request).await;

    if response.status() == StatusCode::UNAUTHORIZED && !path_has_login {
        return Redirect::to("/login").into_response();
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        middleware::from_fn,
        routing::get,
    };
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/account", get(|| async { StatusCode::UNAUTHORIZED }))
            .route("/login/submit", get(|| async { StatusCode::UNAUTHORIZED }))
            .route("/menu", get(|| async { "menu" }))
            .layer(from_fn(redirect_unauthorized_to_login))
    }

    #[tokio::test]
    async fn a_401_response_redirects_to_login() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/account")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn login_paths_never_redirect_to_themselves() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/login/submit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn successful_responses_pass_through() {
        let response = app()
            .oneshot(Request::builder().uri("/menu").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn token_helpers_round_trip_through_the_session() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        set_auth_token(&session, "tok_live_1").await.unwrap();
        assert_eq!(
            session
                .get::<String>(session_keys::AUTH_TOKEN)
                .await
                .unwrap()
                .as_deref(),
            Some("tok_live_1")
        );

        clear_auth_token(&session).await.unwrap();
        assert!(
            session
                .get::<String>(session_keys::AUTH_TOKEN)
                .await
                .unwrap()
                .is_none()
        );
    }
}
