//! Core types for Pizza Box.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod cart;
pub mod id;
pub mod menu;
pub mod settings;
pub mod user;

pub use address::{AddressKind, DeliveryAddress};
pub use cart::CartItem;
pub use id::*;
pub use menu::MenuItem;
pub use settings::StoreSettings;
pub use user::{User, UserRole};
