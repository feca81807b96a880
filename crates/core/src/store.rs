//! The per-session state container.
//!
//! [`StoreState`] holds everything the storefront remembers about one
//! browser session: the cart, the signed-in (or guest) user, the picked
//! location, the delivery address being composed, and the saved-address
//! selection. It is deliberately pure: persistence lives with the caller,
//! which writes the whole snapshot back after every mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AddressId, CartItem, DeliveryAddress, MenuItemId, User};

/// Everything one storefront session carries, as a single snapshot.
///
/// `#[serde(default)]` keeps older snapshots readable when fields are added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreState {
    pub cart: Vec<CartItem>,
    pub user: Option<User>,
    pub location: Option<String>,
    pub delivery_address: Option<DeliveryAddress>,
    pub selected_address_id: Option<AddressId>,
}

impl StoreState {
    /// Add a line to the cart.
    ///
    /// If a line with the same id already exists, its quantity grows by the
    /// incoming quantity and the rest of the incoming line is dropped: the
    /// existing line keeps its name, price, and customization payloads.
    /// Re-adding with different options therefore does not fork a new line
    /// or update the old one. Kept as shipped so saved carts keep meaning
    /// what they meant; see the pinning test below before changing it.
    ///
    /// Quantities below 1 are normalized to 1.
    pub fn add_to_cart(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        if let Some(existing) = self.cart.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.cart.push(CartItem { quantity, ..item });
        }
    }

    /// Remove every line with the given id.
    pub fn remove_from_cart(&mut self, id: MenuItemId) {
        self.cart.retain(|line| line.id != id);
    }

    /// Empty the cart. Leaves user, location, and addresses untouched.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Replace the session user. `None` signs the session out.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Replace the picked delivery location.
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    /// Replace the delivery address being composed.
    pub fn set_delivery_address(&mut self, address: Option<DeliveryAddress>) {
        self.delivery_address = address;
    }

    /// Replace the saved-address selection.
    pub fn set_selected_address_id(&mut self, id: Option<AddressId>) {
        self.selected_address_id = id;
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
