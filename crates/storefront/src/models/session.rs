//! Session storage keys.
//!
//! Everything the storefront remembers about a visitor lives in the
//! session under these keys. The snapshot key is versioned so a future
//! layout change can migrate old sessions instead of corrupting them.

/// Session keys for visitor data.
pub mod keys {
    /// Key for the serialized store snapshot (cart, user, addresses).
    pub const STORE_SNAPSHOT: &str = "pizza_box.store.v1";

    /// Key for the admin API bearer token.
    pub const AUTH_TOKEN: &str = "pizza_box.auth_token";
}
