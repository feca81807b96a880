//! Restaurant-wide settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The restaurant's storefront settings.
///
/// At most one row of these exists. Absence is a valid state: every consumer
/// goes through a fallback that substitutes [`StoreSettings::default`], so a
/// fresh database serves a working storefront out of the box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    pub restaurant_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub min_order_amount: Decimal,
    pub operating_hours: String,
    pub is_open: bool,
    pub is_paused: bool,
    pub notifications_enabled: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "The Pizza Box".to_owned(),
            contact_phone: String::new(),
            contact_email: String::new(),
            address: String::new(),
            min_order_amount: Decimal::ZERO,
            operating_hours: "9 AM - 11 PM".to_owned(),
            is_open: true,
            is_paused: false,
            notifications_enabled: true,
        }
    }
}

impl StoreSettings {
    /// Whether the restaurant is currently taking orders.
    #[must_use]
    pub const fn accepting_orders(&self) -> bool {
        self.is_open && !self.is_paused
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_launch_configuration() {
        let settings = StoreSettings::default();

        assert_eq!(settings.restaurant_name, "The Pizza Box");
        assert_eq!(settings.contact_phone, "");
        assert_eq!(settings.contact_email, "");
        assert_eq!(settings.address, "");
        assert_eq!(settings.min_order_amount, Decimal::ZERO);
        assert_eq!(settings.operating_hours, "9 AM - 11 PM");
        assert!(settings.is_open);
        assert!(!settings.is_paused);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn serializes_in_camel_case_with_numeric_min_order() {
        let json = serde_json::to_value(StoreSettings::default()).unwrap();

        assert_eq!(json["restaurantName"], "The Pizza Box");
        assert_eq!(json["operatingHours"], "9 AM - 11 PM");
        assert_eq!(json["isOpen"], true);
        assert_eq!(json["isPaused"], false);
        assert_eq!(json["notificationsEnabled"], true);
        assert!(json["minOrderAmount"].is_number());
    }

    #[test]
    fn camel_case_payload_round_trips() {
        let payload = r#"{
            "restaurantName": "The Pizza Box",
            "contactPhone": "+91 98765 43210",
            "contactEmail": "orders@thepizzabox.in",
            "address": "12 Brigade Road, Bengaluru",
            "minOrderAmount": 199.0,
            "operatingHours": "10 AM - 10 PM",
            "isOpen": true,
            "isPaused": true,
            "notificationsEnabled": false
        }"#;

        let settings: StoreSettings = serde_json::from_str(payload).unwrap();
        assert_eq!(settings.min_order_amount, Decimal::new(199, 0));
        assert!(!settings.accepting_orders());

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["contactPhone"], "+91 98765 43210");
    }

    #[test]
    fn paused_store_is_not_accepting_orders() {
        let settings = StoreSettings {
            is_paused: true,
            ..StoreSettings::default()
        };
        assert!(!settings.accepting_orders());

        let closed = StoreSettings {
            is_open: false,
            ..StoreSettings::default()
        };
        assert!(!closed.accepting_orders());
    }
}
