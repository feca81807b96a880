//! Durable visitor state.
//!
//! [`SessionStore`] is the handle every route uses to read and mutate a
//! visitor's cart, identity, and delivery address. It binds the pure
//! [`StoreState`] to the tower-sessions `Session` it was loaded from:
//! extraction reads the snapshot once, and every mutation delegates to
//! the pure state then writes the full snapshot back.
//!
//! Snapshot write failures are logged and swallowed. Losing one write
//! costs at most a stale cart on the next page load; turning it into an
//! error page would cost the order.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use tower_sessions::Session;
use tracing::warn;

use pizza_box_core::{AddressId, CartItem, DeliveryAddress, MenuItemId, StoreState, User};

use crate::models::session_keys;

/// Visitor state bound to its backing session.
pub struct SessionStore {
    session: Session,
    state: StoreState,
}

impl SessionStore {
    /// Load the snapshot from a session.
    ///
    /// A missing snapshot is a first visit; an unreadable one is dropped
    /// with a warning. Both start from the default state.
    pub async fn load(session: Session) -> Self {
        let state = match session
            .get::<StoreState>(session_keys::STORE_SNAPSHOT)
            .await
        {
            Ok(Some(state)) => state,
            Ok(None) => StoreState::default(),
            Err(err) => {
                warn!(error = %err, "Discarding unreadable store snapshot");
                StoreState::default()
            }
        };

        Self { session, state }
    }

    /// Read access to the current state.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Add an item to the cart and persist.
    pub async fn add_to_cart(&mut self, item: CartItem) {
        self.state.add_to_cart(item);
        self.persist().await;
    }

    /// Remove every cart line with the given id and persist.
    pub async fn remove_from_cart(&mut self, id: MenuItemId) {
        self.state.remove_from_cart(id);
        self.persist().await;
    }

    /// Empty the cart and persist.
    pub async fn clear_cart(&mut self) {
        self.state.clear_cart();
        self.persist().await;
    }

    /// Replace the signed-in user and persist.
    pub async fn set_user(&mut self, user: Option<User>) {
        self.state.set_user(user);
        self.persist().await;
    }

    /// Replace the free-text location and persist.
    pub async fn set_location(&mut self, location: Option<String>) {
        self.state.set_location(location);
        self.persist().await;
    }

    /// Replace the delivery address and persist.
    pub async fn set_delivery_address(&mut self, address: Option<DeliveryAddress>) {
        self.state.set_delivery_address(address);
        self.persist().await;
    }

    /// Replace the saved-address selection and persist.
    pub async fn set_selected_address_id(&mut self, id: Option<AddressId>) {
        self.state.set_selected_address_id(id);
        self.persist().await;
    }

    /// Write the full snapshot back to the session.
    async fn persist(&self) {
        if let Err(err) = self
            .session
            .insert(session_keys::STORE_SNAPSHOT, &self.state)
            .await
        {
            warn!(error = %err, "Failed to persist store snapshot");
        }
    }
}

impl<S> FromRequestParts<S> for SessionStore
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer; absent only if the layer is missing
        let session = parts.extensions.get::<Session>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "session layer not installed",
        ))?;

        Ok(Self::load(session).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn fresh_session() -> Session {
        let store = Arc::new(MemoryStore::default());
        Session::new(None, store, None)
    }

    fn item(id: i64, name: &str, price: Decimal, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: name.to_string(),
            price,
            quantity,
            options: None,
            addons: None,
            variant: None,
            item_type: None,
        }
    }

    #[tokio::test]
    async fn mutations_survive_a_reload_from_the_same_session() {
        let session = fresh_session();

        let mut store = SessionStore::load(session.clone()).await;
        store
            .add_to_cart(item(1, "Margherita", Decimal::new(19900, 2), 2))
            .await;
        store.set_location(Some("Koramangala".to_string())).await;

        let reloaded = SessionStore::load(session).await;

        assert_eq!(reloaded.state().cart.len(), 1);
        assert_eq!(reloaded.state().cart[0].quantity, 2);
        assert_eq!(reloaded.state().location.as_deref(), Some("Koramangala"));
    }

    #[tokio::test]
    async fn a_fresh_session_starts_empty() {
        let store = SessionStore::load(fresh_session()).await;

        assert!(store.state().is_empty());
        assert!(store.state().user.is_none());
    }

    #[tokio::test]
    async fn a_corrupt_snapshot_falls_back_to_the_default_state() {
        let session = fresh_session();
        session
            .insert(session_keys::STORE_SNAPSHOT, "not a snapshot")
            .await
            .unwrap();

        let store = SessionStore::load(session).await;

        assert!(store.state().is_empty());
    }

    #[tokio::test]
    async fn clearing_the_cart_keeps_the_rest_of_the_snapshot() {
        let session = fresh_session();

        let mut store = SessionStore::load(session.clone()).await;
        store
            .add_to_cart(item(1, "Margherita", Decimal::new(19900, 2), 1))
            .await;
        store.set_location(Some("Indiranagar".to_string())).await;
        store.clear_cart().await;

        let reloaded = SessionStore::load(session).await;

        assert!(reloaded.state().cart.is_empty());
        assert_eq!(reloaded.state().location.as_deref(), Some("Indiranagar"));
    }
}
