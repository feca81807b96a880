//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::MenuItemId;

/// A single line in a customer's cart.
///
/// Customization payloads (`options`, `addons`, `variant`) are kept as
/// free-form JSON: the storefront renders whatever the menu produced and the
/// kitchen reads them verbatim, so there is nothing to gain from a schema
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl CartItem {
    /// Price of the line as a whole (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn margherita() -> CartItem {
        CartItem {
            id: MenuItemId::new(1),
            name: "Margherita".to_owned(),
            price: Decimal::new(24900, 2),
            quantity: 3,
            options: None,
            addons: None,
            variant: None,
            item_type: None,
        }
    }

    #[test]
    fn line_total_multiplies_by_quantity() {
        assert_eq!(margherita().line_total(), Decimal::new(74700, 2));
    }

    #[test]
    fn serializes_in_camel_case_with_numeric_price() {
        let mut item = margherita();
        item.item_type = Some("pizza".to_owned());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemType"], "pizza");
        assert!(json["price"].is_number());
        assert!(json.get("options").is_none());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let item: CartItem = serde_json::from_str(
            r#"{"id": 5, "name": "Garlic Bread", "price": 99.5, "quantity": 1}"#,
        )
        .unwrap();

        assert_eq!(item.id, MenuItemId::new(5));
        assert_eq!(item.price, Decimal::new(995, 1));
        assert!(item.options.is_none());
        assert!(item.item_type.is_none());
    }
}
