//! Menu catalog items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::MenuItemId;

/// A dish on the menu, as served by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub is_available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_camel_case() {
        let item = MenuItem {
            id: MenuItemId::new(3),
            name: "Farmhouse".to_owned(),
            description: Some("Onion, capsicum, tomato".to_owned()),
            price: Decimal::new(32900, 2),
            category: Some("Pizzas".to_owned()),
            item_type: Some("pizza".to_owned()),
            is_available: true,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemType"], "pizza");
        assert_eq!(json["isAvailable"], true);
        assert!(json["price"].is_number());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id": 9, "name": "Coke", "price": 60.0, "isAvailable": false}"#,
        )
        .unwrap();

        assert!(item.description.is_none());
        assert!(item.category.is_none());
        assert!(!item.is_available);
    }
}
