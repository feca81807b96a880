//! Delivery address details collected at checkout.

use serde::{Deserialize, Serialize};

/// Where an order should be delivered.
///
/// `location` is the free-text area the customer picked (or geolocated); the
/// remaining fields refine it to a door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AddressKind,
}

impl DeliveryAddress {
    /// An address carrying only the free-text location.
    #[must_use]
    pub fn from_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            house: None,
            floor: None,
            building: None,
            landmark: None,
            kind: AddressKind::default(),
        }
    }
}

/// Label the customer files the address under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_under_type_key() {
        let address = DeliveryAddress {
            kind: AddressKind::Work,
            house: Some("14B".to_owned()),
            ..DeliveryAddress::from_location("MG Road")
        };

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["type"], "work");
        assert_eq!(json["house"], "14B");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn missing_type_defaults_to_home() {
        let address: DeliveryAddress =
            serde_json::from_str(r#"{"location": "Indiranagar"}"#).unwrap();
        assert_eq!(address.kind, AddressKind::Home);
    }
}
